use super::{LossFn, loss_fn::paired_views};
use crate::{Result, tensor::Vector};

/// Mean absolute error loss function.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Mae;

impl Mae {
    /// Returns a new `Mae`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mae {
    fn loss(&self, actual: &Vector, predicted: &Vector) -> Result<f64> {
        let (a, p) = paired_views(actual, predicted)?;

        Ok((&a - &p).mapv(f64::abs).mean().unwrap_or_default())
    }
}
