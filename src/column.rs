//! A single named column of floating point samples
//!
//! A [`Column`] stores one ordered sequence of `f64` values, optionally
//! interpreted as a row-major 2D image of `width * height` pixels. The
//! backing buffer comes in three ownership modes (see [`StorageMode`]):
//!
//! - `Shared`: the caller keeps its own handle to the buffer, the store
//!   only reads from it
//! - `Owned`: a fixed-size buffer owned and freed by the store
//! - `Growable`: a store-managed buffer that may grow and shrink
//!
//! The mode is fixed at creation. Mutations that need to grow the buffer
//! (append, erase, resize), and any in-place write to a `Shared` buffer,
//! transparently promote the column to `Growable` via a full copy.

use std::sync::Arc;

use crate::error::{Result, StoreError};
use crate::iter::{ColumnIter, ColumnIterMut};

/// Conversion of numeric sample types into the store's native `f64`
/// representation.
///
/// Implemented for all primitive integers, floats and `bool`, and for
/// references to those, so copy constructors accept containers, iterator
/// pairs and slices of mixed numeric element types alike.
pub trait IntoF64: Copy {
    /// Convert the sample to `f64`
    fn into_f64(self) -> f64;
}

macro_rules! impl_into_f64 {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoF64 for $t {
                #[inline]
                fn into_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_into_f64!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoF64 for bool {
    #[inline]
    fn into_f64(self) -> f64 {
        if self { 1.0 } else { 0.0 }
    }
}

impl<T: IntoF64> IntoF64 for &T {
    #[inline]
    fn into_f64(self) -> f64 {
        (*self).into_f64()
    }
}

/// The ownership mode of a column's backing buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// The caller retains a handle to the buffer; the store never frees it
    Shared,
    /// A fixed-size buffer owned by the store, freed when the store drops
    Owned,
    /// A store-managed growable buffer
    Growable,
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageMode::Shared => write!(f, "shared"),
            StorageMode::Owned => write!(f, "owned"),
            StorageMode::Growable => write!(f, "growable"),
        }
    }
}

/// Backing buffer of a column, one variant per ownership mode
#[derive(Debug, Clone)]
pub(crate) enum ColumnStorage {
    Shared(Arc<[f64]>),
    Owned(Box<[f64]>),
    Growable(Vec<f64>),
}

impl ColumnStorage {
    #[inline]
    fn as_slice(&self) -> &[f64] {
        match self {
            ColumnStorage::Shared(data) => data,
            ColumnStorage::Owned(data) => data,
            ColumnStorage::Growable(data) => data,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn mode(&self) -> StorageMode {
        match self {
            ColumnStorage::Shared(_) => StorageMode::Shared,
            ColumnStorage::Owned(_) => StorageMode::Owned,
            ColumnStorage::Growable(_) => StorageMode::Growable,
        }
    }

    /// Mutable view of the buffer without changing its length.
    ///
    /// `Shared` buffers are promoted to `Growable` first, since the caller
    /// still holds a handle to the original data.
    fn make_mut(&mut self) -> &mut [f64] {
        if let ColumnStorage::Shared(data) = self {
            *self = ColumnStorage::Growable(data.to_vec());
        }
        match self {
            ColumnStorage::Shared(_) => unreachable!("shared storage was just promoted"),
            ColumnStorage::Owned(data) => data,
            ColumnStorage::Growable(data) => data,
        }
    }

    /// Growable view of the buffer; promotes `Shared` and `Owned` storage
    /// to `Growable` via a full copy. The old buffer is released according
    /// to its prior ownership.
    fn make_growable(&mut self) -> &mut Vec<f64> {
        if !matches!(self, ColumnStorage::Growable(_)) {
            let copied = self.as_slice().to_vec();
            *self = ColumnStorage::Growable(copied);
        }
        match self {
            ColumnStorage::Growable(data) => data,
            _ => unreachable!("storage was just promoted to growable"),
        }
    }
}

/// One named data series managed by a [`DataStore`](crate::DataStore)
#[derive(Debug, Clone)]
pub struct Column {
    /// Descriptive name, not required to be unique within a store
    name: String,
    /// The backing buffer
    storage: ColumnStorage,
    /// Image width, 0 for flat 1D columns
    image_width: usize,
    /// Image height, 0 for flat 1D columns
    image_height: usize,
}

impl Column {
    /// Create a growable column from a vector of values
    pub(crate) fn from_vec(values: Vec<f64>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            storage: ColumnStorage::Growable(values),
            image_width: 0,
            image_height: 0,
        }
    }

    /// Create an internally owned, fixed-size column
    pub(crate) fn from_boxed(values: Box<[f64]>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            storage: ColumnStorage::Owned(values),
            image_width: 0,
            image_height: 0,
        }
    }

    /// Create a column referencing an externally owned buffer
    pub(crate) fn from_shared(values: Arc<[f64]>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            storage: ColumnStorage::Shared(values),
            image_width: 0,
            image_height: 0,
        }
    }

    /// Create a growable image-shaped column; `values.len()` must equal
    /// `width * height`
    pub(crate) fn image_from_vec(
        values: Vec<f64>,
        width: usize,
        height: usize,
        name: impl Into<String>,
    ) -> Self {
        debug_assert_eq!(values.len(), width * height);
        Self {
            name: name.into(),
            storage: ColumnStorage::Growable(values),
            image_width: width,
            image_height: height,
        }
    }

    /// The column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the column
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Number of rows (valid entries) in the column
    #[inline]
    pub fn rows(&self) -> usize {
        self.storage.len()
    }

    /// True if the column holds no values
    pub fn is_empty(&self) -> bool {
        self.rows() == 0
    }

    /// Image width, 0 for flat columns
    #[inline]
    pub fn image_width(&self) -> usize {
        self.image_width
    }

    /// Image height, 0 for flat columns
    #[inline]
    pub fn image_height(&self) -> usize {
        self.image_height
    }

    /// True if the column is interpreted as a row-major 2D image
    pub fn is_image(&self) -> bool {
        self.image_width > 0
    }

    /// The current ownership mode of the backing buffer
    pub fn storage_mode(&self) -> StorageMode {
        self.storage.mode()
    }

    /// The values as a slice
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.storage.as_slice()
    }

    /// Read the value in the given row
    pub fn get(&self, row: usize) -> Result<f64> {
        self.as_slice()
            .get(row)
            .copied()
            .ok_or(StoreError::OutOfRange {
                index: row,
                rows: self.rows(),
            })
    }

    /// Write the value in the given row.
    ///
    /// Shared storage is promoted to a growable copy first; the bounds are
    /// never changed by this call.
    pub fn set(&mut self, row: usize, value: f64) -> Result<()> {
        let rows = self.rows();
        let data = self.storage.make_mut();
        match data.get_mut(row) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(StoreError::OutOfRange { index: row, rows }),
        }
    }

    /// Read the pixel at `(x, y)` of an image column, mapped to
    /// `row = y * width + x`
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<f64> {
        self.pixel_row(x, y).and_then(|row| self.get(row))
    }

    /// Write the pixel at `(x, y)` of an image column
    pub fn set_pixel(&mut self, x: usize, y: usize, value: f64) -> Result<()> {
        self.pixel_row(x, y).and_then(|row| self.set(row, value))
    }

    fn pixel_row(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.image_width || y >= self.image_height {
            return Err(StoreError::PixelOutOfRange {
                x,
                y,
                width: self.image_width,
                height: self.image_height,
            });
        }
        Ok(y * self.image_width + x)
    }

    /// Multiply every value by the given factor
    pub fn scale(&mut self, factor: f64) {
        for value in self.storage.make_mut() {
            *value *= factor;
        }
    }

    /// Subtract the given value from every entry
    pub fn subtract(&mut self, value: f64) {
        for entry in self.storage.make_mut() {
            *entry -= value;
        }
    }

    /// Replace every occurrence of `find` with `replace`
    pub fn exchange(&mut self, find: f64, replace: f64) {
        for entry in self.storage.make_mut() {
            if *entry == find {
                *entry = replace;
            }
        }
    }

    /// Copy all values into a fresh vector
    pub fn copy_data(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// Iterate over the values by value
    pub fn iter(&self) -> ColumnIter<'_> {
        ColumnIter::new(self.as_slice())
    }

    /// Iterate over the values mutably; promotes shared storage
    pub fn iter_mut(&mut self) -> ColumnIterMut<'_> {
        ColumnIterMut::new(self.storage.make_mut().iter_mut())
    }

    /// Append one value, promoting to growable storage if needed
    pub(crate) fn push(&mut self, value: f64) {
        self.storage.make_growable().push(value);
        self.sync_image_shape();
    }

    /// Append all values from an iterator
    pub(crate) fn extend_values(&mut self, values: impl IntoIterator<Item = f64>) {
        self.storage.make_growable().extend(values);
        self.sync_image_shape();
    }

    /// Zero-pad or truncate the column to the given row count
    pub(crate) fn resize(&mut self, rows: usize) {
        self.storage.make_growable().resize(rows, 0.0);
        self.sync_image_shape();
    }

    /// Remove a single row, shifting subsequent rows down
    pub(crate) fn erase(&mut self, row: usize) -> Result<()> {
        let rows = self.rows();
        if row >= rows {
            return Err(StoreError::OutOfRange { index: row, rows });
        }
        self.storage.make_growable().remove(row);
        self.sync_image_shape();
        Ok(())
    }

    /// Remove the half-open row range `start..end`
    pub(crate) fn erase_range(&mut self, start: usize, end: usize) -> Result<()> {
        let rows = self.rows();
        if start > end || end > rows {
            return Err(StoreError::RangeOutOfRange { start, end, rows });
        }
        self.storage.make_growable().drain(start..end);
        self.sync_image_shape();
        Ok(())
    }

    /// An image column whose row count no longer matches `width * height`
    /// degrades to a flat column.
    fn sync_image_shape(&mut self) {
        if self.image_width > 0 && self.rows() != self.image_width * self.image_height {
            self.image_width = 0;
            self.image_height = 0;
        }
    }
}
