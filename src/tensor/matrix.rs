use std::fmt;

use ndarray::{Array2, ArrayView2, ArrayViewMut2};

use super::{MAX_MATRIX_COLS, MAX_MATRIX_ROWS, RandomFill, check_dim};
use crate::{NetErr, Result};

/// A bounded 2-D tensor stored row-major in one contiguous buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Option<Array2<f64>>,
}

impl Matrix {
    /// Allocates a new matrix.
    ///
    /// # Arguments
    /// * `rows` - The amount of rows, in `1..=MAX_MATRIX_ROWS`.
    /// * `cols` - The amount of columns, in `1..=MAX_MATRIX_COLS`.
    /// * `fill` - If given, the matrix is filled with bounded random values right away.
    ///
    /// # Returns
    /// The new matrix or an error if either dimension is out of bounds. Nothing is allocated
    /// when the dimensions are rejected.
    pub fn allocate(rows: usize, cols: usize, fill: Option<&RandomFill>) -> Result<Self> {
        check_dim("matrix rows", rows, MAX_MATRIX_ROWS)?;
        check_dim("matrix cols", cols, MAX_MATRIX_COLS)?;

        let mut matrix = Self {
            rows,
            cols,
            values: None,
        };
        matrix.values = Some(Array2::zeros((rows, cols)));

        if let Some(fill) = fill {
            fill.fill_matrix(&mut matrix)?;
        }

        Ok(matrix)
    }

    /// Allocates a matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::allocate(rows, cols, None)
    }

    /// Creates a matrix from row-major values.
    ///
    /// # Returns
    /// `ShapeMismatch` if `values` does not hold exactly `rows * cols` elements.
    pub fn from_shape_vec(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self> {
        check_dim("matrix rows", rows, MAX_MATRIX_ROWS)?;
        check_dim("matrix cols", cols, MAX_MATRIX_COLS)?;

        let got = values.len();
        let values =
            Array2::from_shape_vec((rows, cols), values).map_err(|_| NetErr::ShapeMismatch {
                what: "matrix values",
                got,
                expected: rows * cols,
            })?;

        Ok(Self {
            rows,
            cols,
            values: Some(values),
        })
    }

    /// Creates a matrix from its rows, all of which must have the same length.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self> {
        let cols = rows.first().map(|r| r.len()).unwrap_or_default();

        if let Some(row) = rows.iter().find(|r| r.len() != cols) {
            return Err(NetErr::ShapeMismatch {
                what: "matrix row",
                got: row.len(),
                expected: cols,
            });
        }

        let values = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::from_shape_vec(rows.len(), cols, values)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_released(&self) -> bool {
        self.values.is_none()
    }

    /// Gives a view of the values of this matrix.
    ///
    /// # Returns
    /// A read-only view or `NullTensor` if the matrix was released.
    pub fn view(&self) -> Result<ArrayView2<'_, f64>> {
        self.values
            .as_ref()
            .map(|m| m.view())
            .ok_or(NetErr::NullTensor { what: "matrix" })
    }

    /// Gives a mutable view of the values of this matrix.
    pub fn view_mut(&mut self) -> Result<ArrayViewMut2<'_, f64>> {
        self.values
            .as_mut()
            .map(|m| m.view_mut())
            .ok_or(NetErr::NullTensor { what: "matrix" })
    }

    /// Frees the backing storage of this matrix.
    ///
    /// # Returns
    /// `NullTensor` if the storage was already released.
    pub fn release(&mut self) -> Result<()> {
        self.values
            .take()
            .map(drop)
            .ok_or(NetErr::NullTensor { what: "matrix" })
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(values) = &self.values else {
            return write!(f, "<released>");
        };

        for (i, row) in values.rows().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{x:.4}")?;
            }
        }

        Ok(())
    }
}
