//! Export of the column set to spreadsheet and script text formats
//!
//! All exporters share the same shape: they take an optional subset of
//! column ids (an empty slice exports every column), walk the columns in
//! insertion order, pad short columns per the format's rules, and write
//! through any [`std::io::Write`]. Each format has a `*_file` convenience
//! wrapper that creates the target file; open and write failures surface
//! as [`StoreError::Io`](crate::StoreError::Io) and no partial-file cleanup
//! is attempted.
//!
//! Floating point values are rendered with Rust's locale-independent `f64`
//! formatting, which round-trips through parsing.

mod csv;
mod dif;
mod matlab;
mod sylk;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::Result;
use crate::store::{ColumnId, DataStore};

/// Formatting options for [`DataStore::save_csv`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Text placed between fields
    pub separator: String,
    /// Decimal separator substituted into formatted numbers (a German
    /// Excel export would use `","` together with a `"; "` separator)
    pub decimal_separator: String,
    /// Prefix of the header line holding the column names; an empty
    /// string suppresses the header entirely
    pub comment: String,
    /// Characters placed around column names in the header
    pub quote: String,
    /// Fixed number of decimal places, or `None` for shortest
    /// round-tripping output
    pub precision: Option<usize>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            decimal_separator: ".".to_string(),
            comment: "#".to_string(),
            quote: String::new(),
            precision: None,
        }
    }
}

impl CsvOptions {
    /// Set the field separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the decimal separator
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Set the header comment prefix (empty suppresses the header)
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Set the quote characters around header names
    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = quote.into();
        self
    }

    /// Set a fixed number of decimal places
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }
}

/// Render one value, honoring an optional fixed precision
pub(crate) fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{value:.digits$}"),
        None => format!("{value}"),
    }
}

/// Resolve a subset request against the store: an empty subset means all
/// columns; otherwise keep the listed columns, in insertion order, silently
/// skipping unknown ids
fn select<'a>(store: &'a DataStore, subset: &[ColumnId]) -> Vec<(ColumnId, &'a Column)> {
    store
        .iter()
        .filter(|(id, _)| subset.is_empty() || subset.contains(id))
        .collect()
}

fn padded_rows(columns: &[(ColumnId, &Column)]) -> usize {
    columns.iter().map(|(_, col)| col.rows()).max().unwrap_or(0)
}

impl DataStore {
    /// Write the selected columns as comma separated values
    pub fn save_csv<W: Write>(
        &self,
        writer: &mut W,
        columns: &[ColumnId],
        options: &CsvOptions,
    ) -> Result<()> {
        csv::write_csv(writer, &select(self, columns), options)
    }

    /// Write a CSV export to a file
    pub fn save_csv_file(
        &self,
        path: impl AsRef<Path>,
        columns: &[ColumnId],
        options: &CsvOptions,
    ) -> Result<()> {
        self.save_to_file(path.as_ref(), "CSV", |store, writer| {
            store.save_csv(writer, columns, options)
        })
    }

    /// Write the selected columns as a Matlab script of `name = [ ... ];`
    /// assignments
    pub fn save_matlab<W: Write>(&self, writer: &mut W, columns: &[ColumnId]) -> Result<()> {
        matlab::write_matlab(writer, &select(self, columns))
    }

    /// Write a Matlab script export to a file
    pub fn save_matlab_file(&self, path: impl AsRef<Path>, columns: &[ColumnId]) -> Result<()> {
        self.save_to_file(path.as_ref(), "Matlab", |store, writer| {
            store.save_matlab(writer, columns)
        })
    }

    /// Write the selected columns in the SYLK spreadsheet interchange
    /// format
    pub fn save_sylk<W: Write>(&self, writer: &mut W, columns: &[ColumnId]) -> Result<()> {
        sylk::write_sylk(writer, &select(self, columns))
    }

    /// Write a SYLK export to a file
    pub fn save_sylk_file(&self, path: impl AsRef<Path>, columns: &[ColumnId]) -> Result<()> {
        self.save_to_file(path.as_ref(), "SYLK", |store, writer| {
            store.save_sylk(writer, columns)
        })
    }

    /// Write the selected columns in the DIF (data interchange format)
    /// spreadsheet format
    pub fn save_dif<W: Write>(&self, writer: &mut W, columns: &[ColumnId]) -> Result<()> {
        dif::write_dif(writer, &select(self, columns))
    }

    /// Write a DIF export to a file
    pub fn save_dif_file(&self, path: impl AsRef<Path>, columns: &[ColumnId]) -> Result<()> {
        self.save_to_file(path.as_ref(), "DIF", |store, writer| {
            store.save_dif(writer, columns)
        })
    }

    fn save_to_file(
        &self,
        path: &Path,
        format: &str,
        write: impl FnOnce(&DataStore, &mut BufWriter<File>) -> Result<()>,
    ) -> Result<()> {
        let file = File::create(path).inspect_err(|e| {
            tracing::warn!("failed to create {} export {:?}: {}", format, path, e);
        })?;
        let mut writer = BufWriter::new(file);
        write(self, &mut writer)?;
        writer.flush()?;
        tracing::debug!("saved {} export to {:?}", format, path);
        Ok(())
    }
}
