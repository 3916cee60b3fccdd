//! The column store owning all data series of a plot
//!
//! A [`DataStore`] maps stable integer [`ColumnId`] handles to [`Column`]
//! values. Ids are assigned from a monotonically increasing counter and are
//! never reused within a store's lifetime, so id order equals insertion
//! order; default iteration and export order follow it.
//!
//! The store is the sole owner of its columns. Graphs reference data purely
//! by column id, which keeps the plot description decoupled from the actual
//! buffers. All operations are synchronous in-process calls; concurrent use
//! requires external synchronization (in practice, Rust's borrow rules).

mod generators;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::column::{Column, IntoF64};
use crate::error::{Result, StoreError};
use crate::iter::{BackInserter, ColumnIter};

/// Stable handle to a column in a [`DataStore`]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnId(u32);

impl ColumnId {
    /// The raw integer value of this handle
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColumnId({})", self.0)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owning container for all columns in a plot's data context
#[derive(Debug, Default, Clone)]
pub struct DataStore {
    /// Id to column mapping; ids are monotonic, so iteration order is
    /// insertion order
    columns: BTreeMap<ColumnId, Column>,
    /// Next id to hand out, never decremented
    next_id: u32,
}

impl DataStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, column: Column) -> ColumnId {
        let id = ColumnId(self.next_id);
        self.next_id += 1;
        tracing::debug!(
            "added column {} ('{}', {} rows, {} storage)",
            id,
            column.name(),
            column.rows(),
            column.storage_mode()
        );
        self.columns.insert(id, column);
        id
    }

    fn require(&self, id: ColumnId) -> Result<&Column> {
        self.columns.get(&id).ok_or(StoreError::NotFound(id))
    }

    fn require_mut(&mut self, id: ColumnId) -> Result<&mut Column> {
        self.columns.get_mut(&id).ok_or(StoreError::NotFound(id))
    }

    // ----- column creation ------------------------------------------------

    /// Add a zero-initialized growable column with the given number of rows
    pub fn add_column(&mut self, rows: usize, name: impl Into<String>) -> ColumnId {
        self.insert(Column::from_vec(vec![0.0; rows], name))
    }

    /// Add a column taking ownership of a caller-allocated buffer. The
    /// store frees the buffer when it is dropped.
    pub fn add_owned_column(&mut self, buffer: Box<[f64]>, name: impl Into<String>) -> ColumnId {
        self.insert(Column::from_boxed(buffer, name))
    }

    /// Add a column referencing an externally owned buffer. The caller
    /// keeps its own handle and remains responsible for the buffer's
    /// lifetime; the store never writes to or frees the shared data.
    pub fn add_shared_column(&mut self, buffer: Arc<[f64]>, name: impl Into<String>) -> ColumnId {
        self.insert(Column::from_shared(buffer, name))
    }

    /// Deep-copy any sequence of numeric-convertible values into a new
    /// growable column
    pub fn add_copied_column<I>(&mut self, source: I, name: impl Into<String>) -> ColumnId
    where
        I: IntoIterator,
        I::Item: IntoF64,
    {
        let values: Vec<f64> = source.into_iter().map(IntoF64::into_f64).collect();
        self.insert(Column::from_vec(values, name))
    }

    /// Copy every `stride`-th element of a packed slice, starting at
    /// `offset`, into a new column
    pub fn add_copied_column_strided<T: IntoF64>(
        &mut self,
        source: &[T],
        stride: usize,
        offset: usize,
        name: impl Into<String>,
    ) -> Result<ColumnId> {
        if stride == 0 && source.len().saturating_sub(offset) > 1 {
            return Err(StoreError::invalid_argument(
                "stride must be nonzero when copying more than one element",
            ));
        }
        let values: Vec<f64> = if stride == 0 {
            source.get(offset).map(|v| v.into_f64()).into_iter().collect()
        } else {
            source
                .iter()
                .skip(offset)
                .step_by(stride)
                .map(IntoF64::into_f64)
                .collect()
        };
        Ok(self.insert(Column::from_vec(values, name)))
    }

    /// Copy only the entries whose mask matches the keep condition. The
    /// resulting row count equals the number of matches and may be zero.
    pub fn add_copied_column_masked<T: IntoF64>(
        &mut self,
        data: &[T],
        mask: &[bool],
        name: impl Into<String>,
        keep_if_mask_true: bool,
    ) -> Result<ColumnId> {
        if data.len() != mask.len() {
            return Err(StoreError::invalid_argument(format!(
                "data ({} entries) and mask ({} entries) must have equal length",
                data.len(),
                mask.len()
            )));
        }
        let values: Vec<f64> = data
            .iter()
            .zip(mask)
            .filter(|(_, &m)| m == keep_if_mask_true)
            .map(|(v, _)| v.into_f64())
            .collect();
        Ok(self.insert(Column::from_vec(values, name)))
    }

    /// Add a zero-filled image-shaped column with `width * height` rows in
    /// row-major layout
    pub fn add_image_column(
        &mut self,
        width: usize,
        height: usize,
        name: impl Into<String>,
    ) -> ColumnId {
        self.insert(Column::image_from_vec(
            vec![0.0; width * height],
            width,
            height,
            name,
        ))
    }

    /// Copy a row-major pixel buffer into a new image column. The height is
    /// inferred from `source.len() / width`, which must divide evenly.
    pub fn add_copied_image_column<T: IntoF64>(
        &mut self,
        source: &[T],
        width: usize,
        name: impl Into<String>,
    ) -> Result<ColumnId> {
        if width == 0 {
            return Err(StoreError::invalid_argument("image width must be nonzero"));
        }
        if source.len() % width != 0 {
            return Err(StoreError::invalid_argument(format!(
                "{} pixels cannot form an image of width {}",
                source.len(),
                width
            )));
        }
        let height = source.len() / width;
        let values: Vec<f64> = source.iter().map(IntoF64::into_f64).collect();
        Ok(self.insert(Column::image_from_vec(values, width, height, name)))
    }

    /// Copy a column-major `width x height` matrix into row-major storage,
    /// swapping the axes. The resulting image has width `height` and height
    /// `width`.
    pub fn add_copied_image_transposed<T: IntoF64>(
        &mut self,
        source: &[T],
        width: usize,
        height: usize,
        name: impl Into<String>,
    ) -> Result<ColumnId> {
        if source.len() != width * height {
            return Err(StoreError::invalid_argument(format!(
                "{} pixels do not match a {}x{} image",
                source.len(),
                width,
                height
            )));
        }
        let mut values = vec![0.0; width * height];
        for x in 0..width {
            for y in 0..height {
                values[x * height + y] = source[y * width + x].into_f64();
            }
        }
        Ok(self.insert(Column::image_from_vec(values, height, width, name)))
    }

    // ----- element access -------------------------------------------------

    /// Read the value at `(column, row)`
    pub fn get(&self, column: ColumnId, row: usize) -> Result<f64> {
        self.require(column)?.get(row)
    }

    /// Write the value at `(column, row)`
    pub fn set(&mut self, column: ColumnId, row: usize, value: f64) -> Result<()> {
        self.require_mut(column)?.set(row, value)
    }

    /// Shared access to a column
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(&id)
    }

    /// Mutable access to a column
    pub fn column_mut(&mut self, id: ColumnId) -> Option<&mut Column> {
        self.columns.get_mut(&id)
    }

    /// Iterate over a column's values by value
    pub fn column_iter(&self, id: ColumnId) -> Result<ColumnIter<'_>> {
        Ok(self.require(id)?.iter())
    }

    /// A back-insertion adapter appending to the given column
    pub fn back_inserter(&mut self, id: ColumnId) -> Result<BackInserter<'_>> {
        Ok(BackInserter::new(self.require_mut(id)?))
    }

    // ----- mutation -------------------------------------------------------

    /// Append one value, growing the row count. Columns that are not
    /// growable are promoted via a full copy first.
    pub fn append_to_column(&mut self, column: ColumnId, value: f64) -> Result<()> {
        self.require_mut(column)?.push(value);
        Ok(())
    }

    /// Append one value to each of two parallel columns. Nothing is
    /// appended unless both columns exist.
    pub fn append_to_columns(
        &mut self,
        column_a: ColumnId,
        column_b: ColumnId,
        value_a: f64,
        value_b: f64,
    ) -> Result<()> {
        if !self.columns.contains_key(&column_b) {
            return Err(StoreError::NotFound(column_b));
        }
        self.require_mut(column_a)?.push(value_a);
        self.require_mut(column_b)?.push(value_b);
        Ok(())
    }

    /// Append every value of a container to the given column
    pub fn append_from_container_to_column<I>(&mut self, column: ColumnId, source: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: IntoF64,
    {
        self.require_mut(column)?
            .extend_values(source.into_iter().map(IntoF64::into_f64));
        Ok(())
    }

    /// Grow (zero-padding) or shrink (truncating) a column to the given
    /// number of rows
    pub fn resize_column(&mut self, column: ColumnId, rows: usize) -> Result<()> {
        self.require_mut(column)?.resize(rows);
        Ok(())
    }

    /// Remove a single row, shifting subsequent rows down
    pub fn erase_from_column(&mut self, column: ColumnId, row: usize) -> Result<()> {
        self.require_mut(column)?.erase(row)
    }

    /// Remove the half-open row range `range.start..range.end`
    pub fn erase_range_from_column(
        &mut self,
        column: ColumnId,
        range: std::ops::Range<usize>,
    ) -> Result<()> {
        self.require_mut(column)?.erase_range(range.start, range.end)
    }

    /// Multiply every value of a column by the given factor
    pub fn scale_column_values(&mut self, column: ColumnId, factor: f64) -> Result<()> {
        self.require_mut(column)?.scale(factor);
        Ok(())
    }

    /// Add `delta` to the value at `(column, row)`
    pub fn inc(&mut self, column: ColumnId, row: usize, delta: f64) -> Result<()> {
        let col = self.require_mut(column)?;
        let value = col.get(row)?;
        col.set(row, value + delta)
    }

    /// Subtract `delta` from the value at `(column, row)`
    pub fn dec(&mut self, column: ColumnId, row: usize, delta: f64) -> Result<()> {
        self.inc(column, row, -delta)
    }

    // ----- neighbor search ------------------------------------------------

    /// Among all other rows of the column, find the row holding the
    /// greatest value strictly less than the value at `row`.
    ///
    /// Rows whose value equals the pivot are skipped. When several rows
    /// hold the qualifying value the lowest row index wins. Returns `None`
    /// if no strictly lesser value exists.
    pub fn get_next_lower_index(&self, column: ColumnId, row: usize) -> Result<Option<usize>> {
        let col = self.require(column)?;
        let pivot = col.get(row)?;
        let mut best: Option<(usize, f64)> = None;
        for (i, v) in col.as_slice().iter().copied().enumerate() {
            if i == row || !(v < pivot) {
                continue;
            }
            if best.map_or(true, |(_, bv)| v > bv) {
                best = Some((i, v));
            }
        }
        Ok(best.map(|(i, _)| i))
    }

    /// Among all other rows of the column, find the row holding the least
    /// value strictly greater than the value at `row`.
    ///
    /// The tie-breaking mirror of [`get_next_lower_index`](Self::get_next_lower_index).
    pub fn get_next_higher_index(&self, column: ColumnId, row: usize) -> Result<Option<usize>> {
        let col = self.require(column)?;
        let pivot = col.get(row)?;
        let mut best: Option<(usize, f64)> = None;
        for (i, v) in col.as_slice().iter().copied().enumerate() {
            if i == row || !(v > pivot) {
                continue;
            }
            if best.map_or(true, |(_, bv)| v < bv) {
                best = Some((i, v));
            }
        }
        Ok(best.map(|(i, _)| i))
    }

    // ----- introspection --------------------------------------------------

    /// Number of columns currently in the store
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True if the store holds no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The ids of all columns in insertion order
    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.columns.keys().copied().collect()
    }

    /// The ids of all columns as raw integers, insertion order
    pub fn column_ids_vec(&self) -> Vec<i32> {
        self.columns.keys().map(|id| id.0 as i32).collect()
    }

    /// The names of all columns in insertion order
    pub fn column_names(&self) -> Vec<String> {
        self.columns.values().map(|c| c.name().to_owned()).collect()
    }

    /// The name of one column, or `None` for an unknown id
    pub fn column_name(&self, id: ColumnId) -> Option<&str> {
        self.columns.get(&id).map(Column::name)
    }

    /// Copy of one column's values, or `None` for an unknown id
    pub fn get_data(&self, id: ColumnId) -> Option<Vec<f64>> {
        self.columns.get(&id).map(Column::copy_data)
    }

    /// Copy of one column's values together with its name
    pub fn get_data_named(&self, id: ColumnId) -> Option<(String, Vec<f64>)> {
        self.columns
            .get(&id)
            .map(|c| (c.name().to_owned(), c.copy_data()))
    }

    /// Copies of all columns and their names, insertion order
    pub fn get_all_data(&self) -> (Vec<String>, Vec<Vec<f64>>) {
        let names = self.column_names();
        let data = self.columns.values().map(Column::copy_data).collect();
        (names, data)
    }

    /// Iterate over `(id, column)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ColumnId, &Column)> {
        self.columns.iter().map(|(id, col)| (*id, col))
    }

    /// The maximum row count over all columns (0 for an empty store)
    pub fn max_rows(&self) -> usize {
        self.columns.values().map(Column::rows).max().unwrap_or(0)
    }

    /// The id of the first column with the given name
    pub fn find_column(&self, name: &str) -> Option<ColumnId> {
        self.columns
            .iter()
            .find(|(_, col)| col.name() == name)
            .map(|(id, _)| *id)
    }

    /// The id of the first column with the given name, creating an empty
    /// column of that name if none exists
    pub fn ensure_column(&mut self, name: &str) -> ColumnId {
        match self.find_column(name) {
            Some(id) => id,
            None => self.add_column(0, name),
        }
    }

    /// Drop all columns. Handed-out ids stay invalid; the id counter keeps
    /// increasing so ids are never reused.
    pub fn clear(&mut self) {
        tracing::debug!("clearing store ({} columns)", self.columns.len());
        self.columns.clear();
    }

    /// Delete every column with exactly the given name, returning how many
    /// were removed
    pub fn delete_all_columns(&mut self, name: &str) -> usize {
        let before = self.columns.len();
        self.columns.retain(|_, col| col.name() != name);
        before - self.columns.len()
    }

    /// Delete every column whose name starts with the given prefix,
    /// returning how many were removed
    pub fn delete_all_prefixed_columns(&mut self, prefix: &str) -> usize {
        let before = self.columns.len();
        self.columns.retain(|_, col| !col.name().starts_with(prefix));
        before - self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::StorageMode;

    #[test]
    fn test_ids_are_monotonic_and_never_reused() {
        let mut store = DataStore::new();
        let a = store.add_column(3, "a");
        let b = store.add_column(3, "b");
        assert!(b > a);

        store.clear();
        assert!(store.is_empty());
        let c = store.add_column(1, "c");
        assert!(c > b);
        assert!(store.column(a).is_none());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = DataStore::new();
        store.add_column(0, "first");
        store.add_column(0, "second");
        store.add_column(0, "third");
        assert_eq!(store.column_names(), vec!["first", "second", "third"]);
        assert_eq!(store.column_ids_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_add_copied_column_round_trip() {
        let mut store = DataStore::new();
        let source = vec![0.5, -1.5, 2.25];
        let id = store.add_copied_column(&source, "copy");
        assert_eq!(store.get_data(id).unwrap(), source);

        // integer containers convert at the boundary
        let id = store.add_copied_column(vec![1u16, 2, 3], "ints");
        assert_eq!(store.get_data(id).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_add_copied_column_strided() {
        let mut store = DataStore::new();
        let data = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let id = store
            .add_copied_column_strided(&data, 2, 1, "odd")
            .unwrap();
        assert_eq!(store.get_data(id).unwrap(), vec![1.0, 3.0, 5.0]);

        assert!(store.add_copied_column_strided(&data, 0, 0, "bad").is_err());
        // a zero stride is fine when at most one element is read
        let id = store
            .add_copied_column_strided(&data, 0, 6, "single")
            .unwrap();
        assert_eq!(store.get_data(id).unwrap(), vec![6.0]);
    }

    #[test]
    fn test_add_copied_column_masked() {
        let mut store = DataStore::new();
        let data = [1.1, 2.2, 3.3, 4.4];
        let mask = [false, true, true, false];
        let id = store
            .add_copied_column_masked(&data, &mask, "kept", true)
            .unwrap();
        assert_eq!(store.get_data(id).unwrap(), vec![2.2, 3.3]);

        let id = store
            .add_copied_column_masked(&data, &mask, "dropped", false)
            .unwrap();
        assert_eq!(store.get_data(id).unwrap(), vec![1.1, 4.4]);

        assert!(store
            .add_copied_column_masked(&data, &mask[..3], "bad", true)
            .is_err());

        let id = store
            .add_copied_column_masked(&data, &[false; 4], "empty", true)
            .unwrap();
        assert!(store.get_data(id).unwrap().is_empty());
    }

    #[test]
    fn test_image_columns() {
        let mut store = DataStore::new();
        let id = store.add_image_column(4, 3, "img");
        let col = store.column(id).unwrap();
        assert_eq!(col.rows(), 12);
        assert_eq!(col.image_width(), 4);
        assert_eq!(col.image_height(), 3);

        let pixels: Vec<f64> = (0..6).map(|i| i as f64).collect();
        let id = store.add_copied_image_column(&pixels, 3, "img2").unwrap();
        let col = store.column(id).unwrap();
        assert_eq!(col.image_height(), 2);
        assert_eq!(col.get_pixel(1, 1).unwrap(), 4.0);

        assert!(store.add_copied_image_column(&pixels, 4, "bad").is_err());
        assert!(store.add_copied_image_column(&pixels, 0, "bad").is_err());
    }

    #[test]
    fn test_image_transpose_swaps_axes() {
        let mut store = DataStore::new();
        // 3x2 row-major input:
        //   1 2 3
        //   4 5 6
        let input = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let id = store
            .add_copied_image_transposed(&input, 3, 2, "t")
            .unwrap();
        let col = store.column(id).unwrap();
        assert_eq!(col.image_width(), 2);
        assert_eq!(col.image_height(), 3);
        // transposed:
        //   1 4
        //   2 5
        //   3 6
        assert_eq!(col.copy_data(), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);

        assert!(store
            .add_copied_image_transposed(&input, 4, 2, "bad")
            .is_err());
    }

    #[test]
    fn test_append_promotes_shared_storage() {
        let mut store = DataStore::new();
        let buffer: Arc<[f64]> = Arc::from(vec![1.0, 2.0]);
        let id = store.add_shared_column(Arc::clone(&buffer), "shared");
        assert_eq!(store.column(id).unwrap().storage_mode(), StorageMode::Shared);

        store.append_to_column(id, 3.0).unwrap();
        let col = store.column(id).unwrap();
        assert_eq!(col.storage_mode(), StorageMode::Growable);
        assert_eq!(col.copy_data(), vec![1.0, 2.0, 3.0]);
        assert_eq!(&buffer[..], &[1.0, 2.0]);
    }

    #[test]
    fn test_append_to_columns_is_all_or_nothing() {
        let mut store = DataStore::new();
        let a = store.add_column(0, "a");
        let b = store.add_column(0, "b");
        store.append_to_columns(a, b, 1.0, 2.0).unwrap();
        assert_eq!(store.get_data(a).unwrap(), vec![1.0]);
        assert_eq!(store.get_data(b).unwrap(), vec![2.0]);

        store.clear();
        let c = store.add_column(0, "c");
        assert!(store.append_to_columns(c, b, 1.0, 2.0).is_err());
        assert!(store.get_data(c).unwrap().is_empty());
    }

    #[test]
    fn test_append_from_container() {
        let mut store = DataStore::new();
        let id = store.add_column(0, "c");
        store
            .append_from_container_to_column(id, vec![1u8, 2, 3])
            .unwrap();
        store
            .append_from_container_to_column(id, [4.0, 5.0])
            .unwrap();
        assert_eq!(store.get_data(id).unwrap(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_resize_column() {
        let mut store = DataStore::new();
        let id = store.add_copied_column([1.0, 2.0, 3.0], "c");
        store.resize_column(id, 5).unwrap();
        assert_eq!(store.get_data(id).unwrap(), vec![1.0, 2.0, 3.0, 0.0, 0.0]);
        store.resize_column(id, 2).unwrap();
        assert_eq!(store.get_data(id).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_erase_single_and_range() {
        let mut store = DataStore::new();
        let id = store.add_copied_column([1.0, 2.0, 3.0, 4.0, 5.0], "c");
        store.erase_from_column(id, 1).unwrap();
        assert_eq!(store.get_data(id).unwrap(), vec![1.0, 3.0, 4.0, 5.0]);
        assert!(store.erase_from_column(id, 4).is_err());

        let id = store.add_copied_column((0..7).map(|i| i as f64), "d");
        store.erase_range_from_column(id, 2..5).unwrap();
        assert_eq!(store.get_data(id).unwrap(), vec![0.0, 1.0, 5.0, 6.0]);
    }

    #[test]
    fn test_inc_dec_scale() {
        let mut store = DataStore::new();
        let id = store.add_copied_column([1.0, 2.0], "c");
        store.inc(id, 0, 2.5).unwrap();
        store.dec(id, 1, 0.5).unwrap();
        assert_eq!(store.get_data(id).unwrap(), vec![3.5, 1.5]);
        store.scale_column_values(id, 2.0).unwrap();
        assert_eq!(store.get_data(id).unwrap(), vec![7.0, 3.0]);
        assert!(store.inc(id, 5, 1.0).is_err());
    }

    #[test]
    fn test_next_lower_and_higher_index() {
        let mut store = DataStore::new();
        let id = store.add_copied_column([1.0, 3.0, 3.0, 7.0, 9.0], "c");

        // pivot 7: greatest strictly lesser value is 3, first occurrence wins
        assert_eq!(store.get_next_lower_index(id, 3).unwrap(), Some(1));
        // pivot 1 is the minimum
        assert_eq!(store.get_next_lower_index(id, 0).unwrap(), None);
        // pivot 3 (row 1): equal value at row 2 is skipped, 1.0 qualifies
        assert_eq!(store.get_next_lower_index(id, 1).unwrap(), Some(0));

        // pivot 7: least strictly greater value is 9
        assert_eq!(store.get_next_higher_index(id, 3).unwrap(), Some(4));
        // pivot 9 is the maximum
        assert_eq!(store.get_next_higher_index(id, 4).unwrap(), None);
        // pivot 3 (row 2): the equal value at row 1 is skipped
        assert_eq!(store.get_next_higher_index(id, 2).unwrap(), Some(3));

        assert!(store.get_next_lower_index(id, 17).is_err());
    }

    #[test]
    fn test_find_and_ensure_column() {
        let mut store = DataStore::new();
        let a = store.add_column(2, "x");
        store.add_column(2, "x");
        assert_eq!(store.find_column("x"), Some(a));
        assert_eq!(store.find_column("y"), None);

        let y = store.ensure_column("y");
        assert_eq!(store.find_column("y"), Some(y));
        assert_eq!(store.ensure_column("y"), y);
        assert_eq!(store.column(y).unwrap().rows(), 0);
    }

    #[test]
    fn test_delete_by_name_and_prefix() {
        let mut store = DataStore::new();
        store.add_column(0, "tmp_a");
        store.add_column(0, "tmp_b");
        store.add_column(0, "keep");
        assert_eq!(store.delete_all_columns("tmp_a"), 1);
        assert_eq!(store.delete_all_prefixed_columns("tmp_"), 1);
        assert_eq!(store.column_names(), vec!["keep"]);
    }

    #[test]
    fn test_introspection_unknown_id_is_soft() {
        let mut store = DataStore::new();
        let id = store.add_column(1, "c");
        store.clear();
        assert!(store.column_name(id).is_none());
        assert!(store.get_data(id).is_none());
        assert!(store.get_data_named(id).is_none());
        // mutating the same id is a hard error
        assert!(matches!(
            store.append_to_column(id, 1.0),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_max_rows() {
        let mut store = DataStore::new();
        assert_eq!(store.max_rows(), 0);
        store.add_column(3, "a");
        store.add_column(7, "b");
        assert_eq!(store.max_rows(), 7);
    }
}
