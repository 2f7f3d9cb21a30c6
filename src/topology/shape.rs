use crate::arch::{
    Optimizer,
    activations::{ActFn, OutputFn},
    loss::Loss,
};

/// A validated network shape.
///
/// Can only be obtained through `validate`, so every width is within its limits and every
/// function is resolved. It cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    pub(super) input_dense: usize,
    pub(super) hidden_dense: usize,
    pub(super) output_dense: usize,
    pub(super) hidden_layers: usize,
    pub(super) act_fn: ActFn,
    pub(super) output_fn: OutputFn,
    pub(super) loss: Loss,
    pub(super) optimizer: Optimizer,
}

impl Topology {
    pub fn input_dense(&self) -> usize {
        self.input_dense
    }

    pub fn hidden_dense(&self) -> usize {
        self.hidden_dense
    }

    pub fn output_dense(&self) -> usize {
        self.output_dense
    }

    pub fn hidden_layers(&self) -> usize {
        self.hidden_layers
    }

    pub fn act_fn(&self) -> ActFn {
        self.act_fn
    }

    pub fn output_fn(&self) -> OutputFn {
        self.output_fn
    }

    pub fn loss(&self) -> Loss {
        self.loss
    }

    pub fn optimizer(&self) -> Optimizer {
        self.optimizer
    }

    /// Returns the amount of layers, counting input and output.
    pub fn layer_count(&self) -> usize {
        self.hidden_layers + 2
    }

    /// Returns the amount of weight matrices connecting the layers.
    pub fn weight_count(&self) -> usize {
        self.layer_count() - 1
    }

    /// Returns the width of the layer at `idx`, `0` being the input layer.
    pub fn layer_width(&self, idx: usize) -> Option<usize> {
        match idx {
            0 => Some(self.input_dense),
            i if i <= self.hidden_layers => Some(self.hidden_dense),
            i if i == self.hidden_layers + 1 => Some(self.output_dense),
            _ => None,
        }
    }

    /// Returns the `(rows, cols)` shape of the weight matrix at `idx`.
    ///
    /// The matrix maps the layer at `idx` onto the layer at `idx + 1`, so it has one row per
    /// destination neuron and one column per source neuron.
    pub fn weight_shape(&self, idx: usize) -> Option<(usize, usize)> {
        let rows = self.layer_width(idx + 1)?;
        let cols = self.layer_width(idx)?;
        Some((rows, cols))
    }
}
