//! DIF (Data Interchange Format) writer
//!
//! Header records announce the table shape (`TABLE`, `VECTORS` = column
//! count, `TUPLES` = row count); the data section opens with a `BOT` tuple
//! of quoted column labels followed by one `BOT` tuple per row holding a
//! numeric/`V` record pair per present cell, and closes with `EOT`.

use std::io::Write;

use super::{format_value, padded_rows};
use crate::column::Column;
use crate::error::Result;
use crate::store::ColumnId;

pub(crate) fn write_dif<W: Write>(writer: &mut W, columns: &[(ColumnId, &Column)]) -> Result<()> {
    let rows = padded_rows(columns);

    writeln!(writer, "TABLE\n0,1\n\"\"")?;
    writeln!(writer, "VECTORS\n0,{}\n\"\"", columns.len())?;
    writeln!(writer, "TUPLES\n0,{rows}\n\"\"")?;

    writeln!(writer, "-1,0\nBOT")?;
    for (_, col) in columns {
        writeln!(writer, "1,0\n\"{}\"", col.name())?;
    }

    for row in 0..rows {
        writeln!(writer, "-1,0\nBOT")?;
        for (_, col) in columns {
            if row < col.rows() {
                writeln!(writer, "0,{}\nV", format_value(col.as_slice()[row], None))?;
            }
        }
    }
    writeln!(writer, "-1,0\nEOT")?;
    Ok(())
}
