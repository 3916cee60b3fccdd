//! SYLK (SYmbolic LinK) writer
//!
//! Record-based spreadsheet interchange format from the early 1980s: an
//! `ID` header, per-column name and format records in spreadsheet row 1,
//! then one `C` cell record per present value with 1-based X/Y addressing
//! (data starts at spreadsheet row 2), terminated by `E`. Cells of short
//! columns are simply absent.

use std::io::Write;

use super::{format_value, padded_rows};
use crate::column::Column;
use crate::error::Result;
use crate::store::ColumnId;

pub(crate) fn write_sylk<W: Write>(writer: &mut W, columns: &[(ColumnId, &Column)]) -> Result<()> {
    writeln!(writer, "ID;P")?;

    for (i, (_, col)) in columns.iter().enumerate() {
        let x = i + 1;
        writeln!(writer, "C;Y1;X{};K\"{}\"", x, col.name())?;
        writeln!(writer, "F;Y1;X{x};SDB")?;
    }

    for row in 0..padded_rows(columns) {
        for (i, (_, col)) in columns.iter().enumerate() {
            if row < col.rows() {
                writeln!(
                    writer,
                    "C;X{};Y{};N;K{}",
                    i + 1,
                    row + 2,
                    format_value(col.as_slice()[row], None)
                )?;
            }
        }
    }
    writeln!(writer, "E")?;
    Ok(())
}
