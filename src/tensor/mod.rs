mod init;
mod matrix;
mod tagged;
mod vector;

pub use init::{DEFAULT_FACTOR, DEFAULT_RANGE, RandomFill, SeedStrategy};
pub use matrix::Matrix;
pub use tagged::Tensor;
pub use vector::Vector;

use crate::{NetErr, Result};

/// Maximum length of a vector.
pub const MAX_VECTOR_LEN: usize = 200;

/// Maximum amount of rows of a matrix.
pub const MAX_MATRIX_ROWS: usize = 200;

/// Maximum amount of columns of a matrix.
pub const MAX_MATRIX_COLS: usize = 200;

/// Checks a declared dimension against its admission bounds.
///
/// # Arguments
/// * `what` - The name of the dimension, used in the error.
/// * `got` - The declared dimension.
/// * `max` - The inclusive ceiling for this dimension.
///
/// # Returns
/// `InvalidDimension` if `got` is zero, `DimensionLimitExceeded` if it is above `max`.
pub(crate) fn check_dim(what: &'static str, got: usize, max: usize) -> Result<()> {
    if got == 0 {
        return Err(NetErr::InvalidDimension { what, got });
    }

    if got > max {
        return Err(NetErr::DimensionLimitExceeded { what, got, max });
    }

    Ok(())
}
