//! Error handling for the plotstore library
//!
//! This module defines the error type shared by all store operations and a
//! Result alias used throughout the crate.

use thiserror::Error;

use crate::store::ColumnId;

/// Main error type for datastore operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// A row index beyond the valid bounds of a column
    #[error("row {index} out of range (column has {rows} rows)")]
    OutOfRange { index: usize, rows: usize },

    /// A pixel coordinate beyond the bounds of an image column
    #[error("pixel ({x}, {y}) out of range for {width}x{height} image column")]
    PixelOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// An erase range that is inverted or extends past the end of a column
    #[error("range {start}..{end} invalid for column with {rows} rows")]
    RangeOutOfRange {
        start: usize,
        end: usize,
        rows: usize,
    },

    /// A malformed argument (zero stride, mismatched mask length, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A column id that is not present in the store
    #[error("unknown column id {0}")]
    NotFound(ColumnId),

    /// IO errors from the file export functions
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Create an `InvalidArgument` error from anything printable
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        StoreError::InvalidArgument(msg.into())
    }
}

/// Result type alias for datastore operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::OutOfRange { index: 7, rows: 5 };
        assert_eq!(err.to_string(), "row 7 out of range (column has 5 rows)");
    }

    #[test]
    fn test_pixel_error_display() {
        let err = StoreError::PixelOutOfRange {
            x: 4,
            y: 0,
            width: 4,
            height: 2,
        };
        assert!(err.to_string().contains("(4, 0)"));
        assert!(err.to_string().contains("4x2"));
    }

    #[test]
    fn test_invalid_argument_helper() {
        let err = StoreError::invalid_argument("stride must be nonzero");
        assert!(err.to_string().contains("stride must be nonzero"));
    }
}
