use ndarray::ArrayView1;

use super::{Mae, Mse};
use crate::{NetErr, Result, tensor::Vector};

pub trait LossFn {
    /// Reduces the error between two vectors of the same length to a single value.
    ///
    /// # Arguments
    /// * `actual` - The expected values.
    /// * `predicted` - The values produced by the network.
    ///
    /// # Returns
    /// The loss, `NullTensor` if either vector was released or `ShapeMismatch` if their lengths
    /// differ.
    fn loss(&self, actual: &Vector, predicted: &Vector) -> Result<f64>;
}

/// The loss function selected by a topology.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Loss {
    Mse(Mse),
    Mae(Mae),
}

impl Loss {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mse(_) => "mse",
            Self::Mae(_) => "mae",
        }
    }
}

impl LossFn for Loss {
    fn loss(&self, actual: &Vector, predicted: &Vector) -> Result<f64> {
        match self {
            Self::Mse(l) => l.loss(actual, predicted),
            Self::Mae(l) => l.loss(actual, predicted),
        }
    }
}

/// Gives views of both operands of a loss once they are known to line up.
pub(super) fn paired_views<'a>(
    actual: &'a Vector,
    predicted: &'a Vector,
) -> Result<(ArrayView1<'a, f64>, ArrayView1<'a, f64>)> {
    let a = actual.view()?;
    let p = predicted.view()?;

    if a.len() != p.len() {
        return Err(NetErr::ShapeMismatch {
            what: "loss operands",
            got: p.len(),
            expected: a.len(),
        });
    }

    Ok((a, p))
}
