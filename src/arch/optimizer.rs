use log::trace;

use crate::{Result, network::LayerSet};

/// Plain gradient descent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GradientDescent;

impl GradientDescent {
    pub fn new() -> Self {
        Self
    }

    // TODO: update weights and biases once backward propagation produces gradients.
    fn step(&self, _layers: &mut LayerSet, learning_rate: f64) -> Result<()> {
        trace!(learning_rate = learning_rate; "no gradients to descend, parameters left untouched");
        Ok(())
    }
}

/// The optimization algorithm selected by a topology.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Optimizer {
    GradientDescent(GradientDescent),
}

impl Optimizer {
    pub fn gradient_descent() -> Self {
        Self::GradientDescent(GradientDescent::new())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::GradientDescent(_) => "gradient_descent",
        }
    }

    /// Updates the parameters in `layers` with the last computed gradients.
    ///
    /// # Arguments
    /// * `layers` - The layers whose weights and biases get updated.
    /// * `learning_rate` - The step size.
    pub fn step(&self, layers: &mut LayerSet, learning_rate: f64) -> Result<()> {
        match self {
            Self::GradientDescent(o) => o.step(layers, learning_rate),
        }
    }
}
