//! Matlab script writer
//!
//! Emits one `name = [ ... ];` assignment per column so the file can be
//! executed directly as a script. Column names are sanitized to valid
//! identifiers and deduplicated with a numeric suffix; image columns are
//! emitted as their flat row-major vector.

use std::collections::HashSet;
use std::io::Write;

use super::format_value;
use crate::column::Column;
use crate::error::Result;
use crate::store::ColumnId;

/// Reduce a column name to a valid Matlab identifier. Characters outside
/// `[A-Za-z0-9_]` become underscores and anything before the first letter
/// is dropped; the result may be empty.
fn sanitize_varname(name: &str) -> String {
    let mapped: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    match mapped.find(|c: char| c.is_ascii_alphabetic()) {
        Some(start) => mapped[start..].to_string(),
        None => String::new(),
    }
}

pub(crate) fn write_matlab<W: Write>(
    writer: &mut W,
    columns: &[(ColumnId, &Column)],
) -> Result<()> {
    let mut used: HashSet<String> = HashSet::new();
    for (i, (_, col)) in columns.iter().enumerate() {
        let base = match sanitize_varname(col.name()) {
            name if name.is_empty() => "column".to_string(),
            name => name,
        };
        let mut var = base.clone();
        let mut suffix = 1;
        while used.contains(&var) {
            var = format!("{base}{suffix}");
            suffix += 1;
        }
        used.insert(var.clone());

        writeln!(writer, "% data from column {} ('{}')", i + 1, col.name())?;
        write!(writer, "{var} = [ ")?;
        for value in col.as_slice() {
            write!(writer, "{} ", format_value(*value, None))?;
        }
        writeln!(writer, "];")?;
        writeln!(writer)?;
    }
    Ok(())
}
