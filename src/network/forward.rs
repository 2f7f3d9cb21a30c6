use log::trace;

use super::Network;
use crate::{
    Result,
    arch::activations::ActFn,
    linalg::dot_product,
    tensor::{Matrix, Vector},
};

impl Network {
    /// Runs a forward pass from the input layer to the output layer.
    ///
    /// Each stage replaces the destination layer with the product of the source layer and the
    /// stage's weights, adds the stage's bias if the config enables biases, and then activates it
    /// in place. Hidden layers use the topology's activation and the output layer its output
    /// activation.
    ///
    /// # Returns
    /// `NullNetwork` if the network or any of its tensors was released.
    pub fn forward(&mut self) -> Result<()> {
        let act_fn = self.topology().act_fn();
        let output_fn = self.topology().output_fn();
        let use_biases = self.config().use_biases;

        let layers = self.layers_mut()?;
        layers.ensure_live()?;

        let last = layers.hidden.len();

        for stage in 0..last {
            let src = match stage {
                0 => &layers.input,
                k => &layers.hidden[k - 1],
            };

            let bias = use_biases.then_some(&layers.biases);
            let next = stage_output(src, &layers.weights[stage], bias, stage, act_fn)?;

            trace!(stage = stage, len = next.len(); "hidden layer computed");
            layers.hidden[stage] = next;
        }

        let bias = use_biases.then_some(&layers.biases);
        let mut output = transform(&layers.hidden[last - 1], &layers.weights[last], bias, last)?;
        output_fn.apply(&mut output)?;

        trace!(stage = last, len = output.len(); "output layer computed");
        layers.output = output;

        Ok(())
    }

    /// Propagates the error backwards through the network.
    ///
    /// Gradients are not computed yet, so this leaves the network untouched.
    ///
    /// # Returns
    /// `NullNetwork` if the network was released.
    pub fn backward(&mut self) -> Result<()> {
        self.layers()?;
        trace!("backward pass is a no-op");
        Ok(())
    }
}

fn stage_output(
    src: &Vector,
    weights: &Matrix,
    biases: Option<&Vector>,
    stage: usize,
    act_fn: ActFn,
) -> Result<Vector> {
    let mut next = transform(src, weights, biases, stage)?;
    act_fn.apply(&mut next)?;
    Ok(next)
}

fn transform(
    src: &Vector,
    weights: &Matrix,
    biases: Option<&Vector>,
    stage: usize,
) -> Result<Vector> {
    let mut next = dot_product(src, weights)?;

    if let Some(biases) = biases {
        let bias = biases.view()?[stage];
        next.view_mut()?.mapv_inplace(|x| x + bias);
    }

    Ok(next)
}
