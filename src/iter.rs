//! Iterator and inserter adapters over column values
//!
//! [`ColumnIter`] walks a column front to back (or back to front) yielding
//! `f64` by value, with random access through the standard `nth`/`skip`
//! adapters. [`ColumnIterMut`] yields mutable references for
//! assignment-through. [`BackInserter`] appends a value on every push,
//! equivalent to repeated
//! [`append_to_column`](crate::DataStore::append_to_column).

use crate::column::Column;
use crate::column::IntoF64;

/// Borrowing iterator over a column's values
#[derive(Debug, Clone)]
pub struct ColumnIter<'a> {
    data: &'a [f64],
    front: usize,
    back: usize,
}

impl<'a> ColumnIter<'a> {
    pub(crate) fn new(data: &'a [f64]) -> Self {
        Self {
            data,
            front: 0,
            back: data.len(),
        }
    }

    /// The row index the iterator will yield next
    pub fn row(&self) -> usize {
        self.front
    }
}

impl Iterator for ColumnIter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        let value = self.data[self.front];
        self.front += 1;
        Some(value)
    }

    fn nth(&mut self, n: usize) -> Option<f64> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for ColumnIter<'_> {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.data[self.back])
    }
}

impl ExactSizeIterator for ColumnIter<'_> {}
impl std::iter::FusedIterator for ColumnIter<'_> {}

/// Mutable iterator over a column's values
#[derive(Debug)]
pub struct ColumnIterMut<'a> {
    inner: std::slice::IterMut<'a, f64>,
}

impl<'a> ColumnIterMut<'a> {
    pub(crate) fn new(inner: std::slice::IterMut<'a, f64>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for ColumnIterMut<'a> {
    type Item = &'a mut f64;

    fn next(&mut self) -> Option<&'a mut f64> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for ColumnIterMut<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for ColumnIterMut<'_> {}
impl std::iter::FusedIterator for ColumnIterMut<'_> {}

/// Back-insertion adapter that appends to a column on every push
#[derive(Debug)]
pub struct BackInserter<'a> {
    column: &'a mut Column,
}

impl<'a> BackInserter<'a> {
    pub(crate) fn new(column: &'a mut Column) -> Self {
        Self { column }
    }

    /// Append one value to the column
    pub fn push(&mut self, value: impl IntoF64) {
        self.column.push(value.into_f64());
    }
}

impl Extend<f64> for BackInserter<'_> {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        self.column.extend_values(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_column() -> Column {
        Column::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0], "c")
    }

    #[test]
    fn test_forward_iteration() {
        let col = sample_column();
        let collected: Vec<f64> = col.iter().collect();
        assert_eq!(collected, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(col.iter().len(), 5);
    }

    #[test]
    fn test_random_access() {
        let col = sample_column();
        let mut it = col.iter();
        assert_eq!(it.nth(2), Some(3.0));
        assert_eq!(it.next(), Some(4.0));
        // advancing past the end is guarded, not undefined
        assert_eq!(it.nth(100), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_reverse_iteration() {
        let col = sample_column();
        let collected: Vec<f64> = col.iter().rev().collect();
        assert_eq!(collected, vec![5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_meet_in_the_middle() {
        let col = sample_column();
        let mut it = col.iter();
        assert_eq!(it.next(), Some(1.0));
        assert_eq!(it.next_back(), Some(5.0));
        assert_eq!(it.next(), Some(2.0));
        assert_eq!(it.next_back(), Some(4.0));
        assert_eq!(it.next(), Some(3.0));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_assignment_through() {
        let mut col = sample_column();
        for value in col.iter_mut() {
            *value *= 10.0;
        }
        assert_eq!(col.copy_data(), vec![10.0, 20.0, 30.0, 40.0, 50.0]);
    }

    #[test]
    fn test_back_inserter() {
        let mut col = Column::from_vec(vec![], "c");
        let mut inserter = BackInserter::new(&mut col);
        inserter.push(1.0);
        inserter.push(2u8);
        inserter.extend(vec![3.0, 4.0]);
        assert_eq!(col.copy_data(), vec![1.0, 2.0, 3.0, 4.0]);
    }
}
