//! # plotstore: columnar data storage for 2D plotting
//!
//! The column store that backs every graph of a plotting widget: a set of
//! named `f64` columns behind stable integer ids, so graphs reference data
//! by [`ColumnId`] instead of holding buffers themselves.
//!
//! ## Architecture
//!
//! - **Columns**: named series with three buffer ownership modes (shared,
//!   owned, growable); mutations that need growth promote transparently
//! - **Store**: id-keyed owning container with copy/masked/strided/image
//!   constructors, generated (linear, log, grid) and calculated columns
//! - **Adapters**: value and mutable iterators plus a back-inserter
//! - **Export**: CSV, Matlab script, SYLK and DIF writers
//!
//! Everything is synchronous and single-threaded; a store is `Send`, and
//! concurrent use is the caller's concern (in practice, Rust's borrow
//! rules). The library never installs a `tracing` subscriber; the host
//! application owns logging setup.
//!
//! ## Example
//!
//! ```
//! use plotstore::{CsvOptions, DataStore};
//!
//! let mut store = DataStore::new();
//! let x = store.add_linear_column(100, 0.0, 10.0, "x");
//! let y = store
//!     .add_calculated_column_from_column(x, f64::sin, "sin(x)")
//!     .unwrap();
//!
//! store.append_to_columns(x, y, 10.1, 10.1f64.sin()).unwrap();
//! assert_eq!(store.column(y).unwrap().rows(), 101);
//!
//! let mut csv = Vec::new();
//! store.save_csv(&mut csv, &[], &CsvOptions::default()).unwrap();
//! assert!(String::from_utf8(csv).unwrap().starts_with("# x, sin(x)\n"));
//! ```

pub mod column;
pub mod error;
pub mod export;
pub mod iter;
pub mod store;

// Re-export commonly used types
pub use column::{Column, IntoF64, StorageMode};
pub use error::{Result, StoreError};
pub use export::CsvOptions;
pub use iter::{BackInserter, ColumnIter, ColumnIterMut};
pub use store::{ColumnId, DataStore};
