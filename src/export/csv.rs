//! CSV writer
//!
//! One line per row up to the longest selected column; a column that has no
//! value for a row emits an empty field. The header line carries the column
//! names behind a comment prefix, matching what most plotting tools write
//! alongside their data dumps.

use std::io::Write;

use super::{format_value, padded_rows, CsvOptions};
use crate::column::Column;
use crate::error::Result;
use crate::store::ColumnId;

pub(crate) fn write_csv<W: Write>(
    writer: &mut W,
    columns: &[(ColumnId, &Column)],
    options: &CsvOptions,
) -> Result<()> {
    if !options.comment.is_empty() {
        write!(writer, "{} ", options.comment)?;
        for (i, (_, col)) in columns.iter().enumerate() {
            if i > 0 {
                write!(writer, "{}", options.separator)?;
            }
            write!(writer, "{}{}{}", options.quote, col.name(), options.quote)?;
        }
        writeln!(writer)?;
    }

    for row in 0..padded_rows(columns) {
        for (i, (_, col)) in columns.iter().enumerate() {
            if i > 0 {
                write!(writer, "{}", options.separator)?;
            }
            if row < col.rows() {
                let mut text = format_value(col.as_slice()[row], options.precision);
                if options.decimal_separator != "." {
                    text = text.replace('.', &options.decimal_separator);
                }
                write!(writer, "{text}")?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}
