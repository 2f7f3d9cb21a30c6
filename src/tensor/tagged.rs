use std::fmt;

use super::{Matrix, RandomFill, Vector};
use crate::{NetErr, Result};

/// A tensor is either a vector or a matrix, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Tensor {
    Vector(Vector),
    Matrix(Matrix),
}

impl Tensor {
    /// Allocates a new vector tensor, see `Vector::allocate`.
    pub fn vector(len: usize, fill: Option<&RandomFill>) -> Result<Self> {
        Vector::allocate(len, fill).map(Self::Vector)
    }

    /// Allocates a new matrix tensor, see `Matrix::allocate`.
    pub fn matrix(rows: usize, cols: usize, fill: Option<&RandomFill>) -> Result<Self> {
        Matrix::allocate(rows, cols, fill).map(Self::Matrix)
    }

    /// Returns the rank of this tensor: 1 for vectors, 2 for matrices.
    pub fn rank(&self) -> usize {
        match self {
            Self::Vector(_) => 1,
            Self::Matrix(_) => 2,
        }
    }

    /// Returns the amount of cells this tensor declares.
    pub fn size(&self) -> usize {
        match self {
            Self::Vector(v) => v.len(),
            Self::Matrix(m) => m.rows() * m.cols(),
        }
    }

    pub fn is_released(&self) -> bool {
        match self {
            Self::Vector(v) => v.is_released(),
            Self::Matrix(m) => m.is_released(),
        }
    }

    /// Returns the vector form of this tensor.
    ///
    /// # Returns
    /// `ShapeMismatch` on the rank if this is a matrix.
    pub fn as_vector(&self) -> Result<&Vector> {
        match self {
            Self::Vector(v) => Ok(v),
            Self::Matrix(_) => Err(rank_mismatch(2, 1)),
        }
    }

    pub fn as_vector_mut(&mut self) -> Result<&mut Vector> {
        match self {
            Self::Vector(v) => Ok(v),
            Self::Matrix(_) => Err(rank_mismatch(2, 1)),
        }
    }

    /// Returns the matrix form of this tensor.
    ///
    /// # Returns
    /// `ShapeMismatch` on the rank if this is a vector.
    pub fn as_matrix(&self) -> Result<&Matrix> {
        match self {
            Self::Matrix(m) => Ok(m),
            Self::Vector(_) => Err(rank_mismatch(1, 2)),
        }
    }

    pub fn as_matrix_mut(&mut self) -> Result<&mut Matrix> {
        match self {
            Self::Matrix(m) => Ok(m),
            Self::Vector(_) => Err(rank_mismatch(1, 2)),
        }
    }

    /// Refills this tensor with bounded random values, reseeding the generator first.
    pub fn random_fill(&mut self, fill: &RandomFill) -> Result<()> {
        match self {
            Self::Vector(v) => fill.fill_vector(v),
            Self::Matrix(m) => fill.fill_matrix(m),
        }
    }

    /// Frees the backing storage of this tensor.
    pub fn release(&mut self) -> Result<()> {
        match self {
            Self::Vector(v) => v.release(),
            Self::Matrix(m) => m.release(),
        }
    }
}

fn rank_mismatch(got: usize, expected: usize) -> NetErr {
    NetErr::ShapeMismatch {
        what: "tensor rank",
        got,
        expected,
    }
}

impl From<Vector> for Tensor {
    fn from(value: Vector) -> Self {
        Self::Vector(value)
    }
}

impl From<Matrix> for Tensor {
    fn from(value: Matrix) -> Self {
        Self::Matrix(value)
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector(v) => v.fmt(f),
            Self::Matrix(m) => m.fmt(f),
        }
    }
}
