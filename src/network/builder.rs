use log::debug;

use super::{LayerSet, Network, NetworkConfig};
use crate::{
    NetErr, Result,
    specs::{NetworkSpec, TopologySpec},
    tensor::{Matrix, RandomFill, Vector},
    topology::{Topology, validate},
};

/// Builds `Network`s given a topology.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkBuilder {
    fill: RandomFill,
}

impl NetworkBuilder {
    /// Creates a new `NetworkBuilder` filling tensors with clock-seeded random values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `NetworkBuilder` that fills tensors with `fill`.
    pub fn with_fill(fill: RandomFill) -> Self {
        Self { fill }
    }

    /// Creates a new `NetworkBuilder` whose fills are reseeded with `seed` every time.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_fill(RandomFill::seeded(seed))
    }

    /// Builds a new `Network` from a spec document.
    ///
    /// # Returns
    /// `NullTopology` if the document has no topology, or whatever building the topology fails
    /// with.
    pub fn from_spec(spec: &NetworkSpec) -> Result<Network> {
        let topology = spec.topology.as_ref().ok_or(NetErr::NullTopology)?;

        let builder = match spec.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };

        builder.build(topology, spec.config)
    }

    /// Validates `spec` and builds a new `Network` following it.
    ///
    /// # Arguments
    /// * `spec` - The requested topology.
    /// * `config` - The hyperparameters, `NetworkConfig::DEFAULT` if not given.
    ///
    /// # Returns
    /// The new network, or the validation error if the topology is invalid. Nothing is
    /// allocated for an invalid topology.
    pub fn build(&self, spec: &TopologySpec, config: Option<NetworkConfig>) -> Result<Network> {
        let topology = validate(spec)?;
        self.build_validated(topology, config)
    }

    /// Builds a new `Network` from an already validated topology.
    pub fn build_validated(
        &self,
        topology: Topology,
        config: Option<NetworkConfig>,
    ) -> Result<Network> {
        let config = config.unwrap_or(NetworkConfig::DEFAULT);
        let layers = self.allocate_layers(&topology)?;

        debug!(
            layers = topology.layer_count(),
            act_fn = topology.act_fn().name(),
            output_fn = topology.output_fn().name(),
            loss = topology.loss().name(),
            use_biases = config.use_biases;
            "built network"
        );

        Ok(Network::new(topology, config, layers))
    }

    fn allocate_layers(&self, topology: &Topology) -> Result<LayerSet> {
        let fill = Some(&self.fill);

        let input = Vector::allocate(topology.input_dense(), fill)?;
        let hidden = (0..topology.hidden_layers())
            .map(|_| Vector::allocate(topology.hidden_dense(), fill))
            .collect::<Result<Vec<_>>>()?;
        let output = Vector::allocate(topology.output_dense(), fill)?;

        let weights = (0..topology.weight_count())
            .map(|idx| self.allocate_weights(topology, idx))
            .collect::<Result<Vec<_>>>()?;
        let biases = Vector::allocate(topology.weight_count(), fill)?;

        Ok(LayerSet {
            input,
            hidden,
            output,
            weights,
            biases,
        })
    }

    fn allocate_weights(&self, topology: &Topology, idx: usize) -> Result<Matrix> {
        let (rows, cols) = topology
            .weight_shape(idx)
            .ok_or(NetErr::ShapeMismatch {
                what: "weight index",
                got: idx,
                expected: topology.weight_count(),
            })?;

        Matrix::allocate(rows, cols, Some(&self.fill))
    }
}

/// Validates `spec` and builds a new `Network` with clock-seeded random values.
pub fn build(spec: &TopologySpec, config: Option<NetworkConfig>) -> Result<Network> {
    NetworkBuilder::new().build(spec, config)
}
