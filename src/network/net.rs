use log::debug;

use super::NetworkConfig;
use crate::{
    NetErr, Result,
    arch::loss::LossFn,
    tensor::{Matrix, Vector},
    topology::Topology,
};

/// Every tensor a network owns.
///
/// The amount of tensors and their shapes always follow the network's topology.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSet {
    pub(super) input: Vector,
    pub(super) hidden: Vec<Vector>,
    pub(super) output: Vector,
    pub(super) weights: Vec<Matrix>,
    pub(super) biases: Vector,
}

impl LayerSet {
    pub fn input(&self) -> &Vector {
        &self.input
    }

    pub fn hidden(&self) -> &[Vector] {
        &self.hidden
    }

    pub fn output(&self) -> &Vector {
        &self.output
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn biases(&self) -> &Vector {
        &self.biases
    }

    /// Fails with `NullNetwork` if any tensor lost its backing storage.
    pub(super) fn ensure_live(&self) -> Result<()> {
        let mut vectors = [&self.input, &self.output, &self.biases]
            .into_iter()
            .chain(&self.hidden);

        let any_released = vectors.any(Vector::is_released)
            || self.weights.iter().any(Matrix::is_released);

        if any_released {
            return Err(NetErr::NullNetwork);
        }

        Ok(())
    }

    /// Releases every tensor, stopping at the first one that was already released.
    ///
    /// The order is fixed: weights, hidden layers, biases, output and finally input.
    fn release(&mut self) -> Result<()> {
        for w in &mut self.weights {
            w.release()?;
        }

        for h in &mut self.hidden {
            h.release()?;
        }

        self.biases.release()?;
        self.output.release()?;
        self.input.release()
    }
}

/// A feed-forward network with dense layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    topology: Topology,
    config: NetworkConfig,
    layers: Option<LayerSet>,
}

impl Network {
    pub(super) fn new(topology: Topology, config: NetworkConfig, layers: LayerSet) -> Self {
        Self {
            topology,
            config,
            layers: Some(layers),
        }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn is_released(&self) -> bool {
        self.layers.is_none()
    }

    /// Gives access to the tensors of this network.
    ///
    /// # Returns
    /// `NullNetwork` if the network was released.
    pub fn layers(&self) -> Result<&LayerSet> {
        self.layers.as_ref().ok_or(NetErr::NullNetwork)
    }

    pub(super) fn layers_mut(&mut self) -> Result<&mut LayerSet> {
        self.layers.as_mut().ok_or(NetErr::NullNetwork)
    }

    pub fn input(&self) -> Result<&Vector> {
        Ok(self.layers()?.input())
    }

    pub fn hidden(&self) -> Result<&[Vector]> {
        Ok(self.layers()?.hidden())
    }

    pub fn output(&self) -> Result<&Vector> {
        Ok(self.layers()?.output())
    }

    pub fn weights(&self) -> Result<&[Matrix]> {
        Ok(self.layers()?.weights())
    }

    pub fn biases(&self) -> Result<&Vector> {
        Ok(self.layers()?.biases())
    }

    /// Replaces the input layer.
    ///
    /// # Arguments
    /// * `input` - A vector of exactly `input_dense` values.
    ///
    /// # Returns
    /// `NullTensor` if `input` was released, `ShapeMismatch` if its length is not the input
    /// width or `NullNetwork` if the network was released.
    pub fn set_input(&mut self, input: Vector) -> Result<()> {
        let width = self.topology.input_dense();
        let layers = self.layers_mut()?;

        layers.input = checked_vector("input vector", input, width)?;
        Ok(())
    }

    /// Replaces the output layer, see `set_input`.
    pub fn set_output(&mut self, output: Vector) -> Result<()> {
        let width = self.topology.output_dense();
        let layers = self.layers_mut()?;

        layers.output = checked_vector("output vector", output, width)?;
        Ok(())
    }

    /// Replaces the weight matrix at `idx`.
    ///
    /// # Arguments
    /// * `idx` - Which matrix to replace, `0` being the one fed by the input layer.
    /// * `weights` - A matrix with one row per destination neuron and one column per source
    ///   neuron.
    ///
    /// # Returns
    /// `ShapeMismatch` if `idx` is out of range or the matrix has the wrong shape.
    pub fn set_weights(&mut self, idx: usize, weights: Matrix) -> Result<()> {
        let Some((rows, cols)) = self.topology.weight_shape(idx) else {
            return Err(NetErr::ShapeMismatch {
                what: "weight index",
                got: idx,
                expected: self.topology.weight_count(),
            });
        };

        weights.view()?;

        if weights.rows() != rows {
            return Err(NetErr::ShapeMismatch {
                what: "weight rows",
                got: weights.rows(),
                expected: rows,
            });
        }

        if weights.cols() != cols {
            return Err(NetErr::ShapeMismatch {
                what: "weight cols",
                got: weights.cols(),
                expected: cols,
            });
        }

        self.layers_mut()?.weights[idx] = weights;
        Ok(())
    }

    /// Replaces the biases, one value per weight matrix.
    pub fn set_biases(&mut self, biases: Vector) -> Result<()> {
        let len = self.topology.weight_count();
        let layers = self.layers_mut()?;

        layers.biases = checked_vector("bias vector", biases, len)?;
        Ok(())
    }

    /// Evaluates the topology's loss function between `expected` and the current output.
    ///
    /// # Returns
    /// The loss or `ShapeMismatch` if `expected` is not as long as the output layer.
    pub fn loss(&self, expected: &Vector) -> Result<f64> {
        let output = self.output()?;
        self.topology.loss().loss(expected, output)
    }

    /// Sets `input` and runs a forward pass.
    ///
    /// # Returns
    /// The resulting output layer.
    pub fn predict(&mut self, input: Vector) -> Result<&Vector> {
        self.set_input(input)?;
        self.forward()?;
        self.output()
    }

    /// Runs one step of the topology's optimizer over this network's parameters.
    pub fn optimize(&mut self) -> Result<()> {
        let optimizer = self.topology.optimizer();
        let learning_rate = self.config.learning_rate;

        optimizer.step(self.layers_mut()?, learning_rate)
    }

    /// Releases every tensor of this network.
    ///
    /// Afterwards every operation on the network fails with `NullNetwork`, including releasing
    /// it again.
    pub fn release(&mut self) -> Result<()> {
        let mut layers = self.layers.take().ok_or(NetErr::NullNetwork)?;
        layers.release()?;

        debug!(hidden_layers = self.topology.hidden_layers(); "released network");
        Ok(())
    }
}

fn checked_vector(what: &'static str, vector: Vector, expected: usize) -> Result<Vector> {
    vector.view()?;

    if vector.len() != expected {
        return Err(NetErr::ShapeMismatch {
            what,
            got: vector.len(),
            expected,
        });
    }

    Ok(vector)
}
