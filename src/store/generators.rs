//! Generated and derived column constructors
//!
//! These build columns from closed-form rules (linear, logarithmic and
//! decade-logarithmic spacing, rectangular grids), from user-supplied
//! per-index/per-pixel functions, or from existing columns. Calculated
//! columns are evaluated once, eagerly, at creation time; they do not
//! re-evaluate when their sources change later.

use super::{ColumnId, DataStore};
use crate::column::Column;
use crate::error::{Result, StoreError};

/// Value of the `i`-th of `n` evenly spaced samples between `a` and `b`
fn linear_sample(i: usize, n: usize, a: f64, b: f64) -> f64 {
    if n <= 1 {
        a
    } else {
        a + i as f64 * (b - a) / (n - 1) as f64
    }
}

impl DataStore {
    /// Add a column of `rows` evenly spaced values from `start` to `end`
    /// (both inclusive). A single-row column holds `start`, zero rows give
    /// an empty column.
    pub fn add_linear_column(
        &mut self,
        rows: usize,
        start: f64,
        end: f64,
        name: impl Into<String>,
    ) -> ColumnId {
        let values: Vec<f64> = (0..rows)
            .map(|i| linear_sample(i, rows, start, end))
            .collect();
        self.insert(Column::from_vec(values, name))
    }

    /// Add a column of `rows` geometrically spaced values from `start` to
    /// `end` (both inclusive). Both endpoints must be positive.
    pub fn add_log_column(
        &mut self,
        rows: usize,
        start: f64,
        end: f64,
        name: impl Into<String>,
    ) -> Result<ColumnId> {
        if start <= 0.0 || end <= 0.0 {
            return Err(StoreError::invalid_argument(format!(
                "logarithmic spacing requires positive endpoints (got {start} and {end})"
            )));
        }
        let ratio = end / start;
        let values: Vec<f64> = (0..rows)
            .map(|i| {
                if rows <= 1 {
                    start
                } else {
                    start * ratio.powf(i as f64 / (rows - 1) as f64)
                }
            })
            .collect();
        Ok(self.insert(Column::from_vec(values, name)))
    }

    /// Add a column of `rows` values spaced evenly in decades, from
    /// `10^start_exponent` to `10^end_exponent`
    pub fn add_decade_log_column(
        &mut self,
        rows: usize,
        start_exponent: f64,
        end_exponent: f64,
        name: impl Into<String>,
    ) -> ColumnId {
        let values: Vec<f64> = (0..rows)
            .map(|i| 10f64.powf(linear_sample(i, rows, start_exponent, end_exponent)))
            .collect();
        self.insert(Column::from_vec(values, name))
    }

    /// Add two parallel columns of length `nx * ny` enumerating the
    /// rectangular grid `[x0, x1] x [y0, y1]` in row-major order (x varies
    /// fastest)
    #[allow(clippy::too_many_arguments)]
    pub fn add_linear_grid_columns(
        &mut self,
        nx: usize,
        x0: f64,
        x1: f64,
        ny: usize,
        y0: f64,
        y1: f64,
        name_x: impl Into<String>,
        name_y: impl Into<String>,
    ) -> (ColumnId, ColumnId) {
        let mut xs = Vec::with_capacity(nx * ny);
        let mut ys = Vec::with_capacity(nx * ny);
        for iy in 0..ny {
            let y = linear_sample(iy, ny, y0, y1);
            for ix in 0..nx {
                xs.push(linear_sample(ix, nx, x0, x1));
                ys.push(y);
            }
        }
        let id_x = self.insert(Column::from_vec(xs, name_x));
        let id_y = self.insert(Column::from_vec(ys, name_y));
        (id_x, id_y)
    }

    /// Add a column whose values are computed by calling `f` for every row
    /// index, once, at creation time
    pub fn add_calculated_column(
        &mut self,
        rows: usize,
        mut f: impl FnMut(usize) -> f64,
        name: impl Into<String>,
    ) -> ColumnId {
        let values: Vec<f64> = (0..rows).map(&mut f).collect();
        self.insert(Column::from_vec(values, name))
    }

    /// Like [`add_calculated_column`](Self::add_calculated_column), with
    /// the store itself passed to `f` so the function can read other
    /// columns
    pub fn add_calculated_column_with_store(
        &mut self,
        rows: usize,
        f: impl Fn(usize, &DataStore) -> f64,
        name: impl Into<String>,
    ) -> ColumnId {
        let this: &DataStore = self;
        let values: Vec<f64> = (0..rows).map(|i| f(i, this)).collect();
        self.insert(Column::from_vec(values, name))
    }

    /// Add an image column whose pixels are computed by calling `f(x, y)`
    /// for every coordinate, once, at creation time
    pub fn add_calculated_image_column(
        &mut self,
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> f64,
        name: impl Into<String>,
    ) -> ColumnId {
        let mut values = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        self.insert(Column::image_from_vec(values, width, height, name))
    }

    /// Add a column computed by applying `f` to every value of an existing
    /// column. The result has exactly the source's row count.
    pub fn add_calculated_column_from_column(
        &mut self,
        source: ColumnId,
        f: impl FnMut(f64) -> f64,
        name: impl Into<String>,
    ) -> Result<ColumnId> {
        let values: Vec<f64> = self
            .require(source)?
            .as_slice()
            .iter()
            .copied()
            .map(f)
            .collect();
        Ok(self.insert(Column::from_vec(values, name)))
    }

    /// Add a column computed by applying `f` pairwise to two existing
    /// columns. The result has the row count of the shorter input.
    pub fn add_calculated_column_from_columns(
        &mut self,
        column_a: ColumnId,
        column_b: ColumnId,
        mut f: impl FnMut(f64, f64) -> f64,
        name: impl Into<String>,
    ) -> Result<ColumnId> {
        let a = self.require(column_a)?.as_slice();
        let b = self.require(column_b)?.as_slice();
        let values: Vec<f64> = a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect();
        Ok(self.insert(Column::from_vec(values, name)))
    }

    /// Deep-copy an existing column (values and image shape) into a new
    /// growable column
    pub fn copy_column(&mut self, source: ColumnId, name: impl Into<String>) -> Result<ColumnId> {
        let col = self.require(source)?;
        let values = col.copy_data();
        let column = if col.is_image() {
            Column::image_from_vec(values, col.image_width(), col.image_height(), name)
        } else {
            Column::from_vec(values, name)
        };
        Ok(self.insert(column))
    }

    /// Copy every `stride`-th row of an existing column, starting at
    /// `start`, into a new flat column
    pub fn copy_column_strided(
        &mut self,
        source: ColumnId,
        start: usize,
        stride: usize,
        name: impl Into<String>,
    ) -> Result<ColumnId> {
        if stride == 0 {
            return Err(StoreError::invalid_argument("stride must be nonzero"));
        }
        let values: Vec<f64> = self
            .require(source)?
            .as_slice()
            .iter()
            .copied()
            .skip(start)
            .step_by(stride)
            .collect();
        Ok(self.insert(Column::from_vec(values, name)))
    }
}
