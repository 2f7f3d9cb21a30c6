use serde::{Deserialize, Serialize};

use crate::{NetErr, Result, arch::activations::ELU_ALPHA, network::NetworkConfig};

fn default_alpha() -> f64 {
    ELU_ALPHA
}

/// Serializable choice of `ActFn`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnSpec {
    Relu,
    Elu {
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
    Sigmoid,
    Tanh,
}

/// Serializable choice of `OutputFn`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFnSpec {
    Softmax,
    Linear,
}

/// Serializable choice of `Loss`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossFnSpec {
    Mse,
    Mae,
}

/// Serializable choice of `Optimizer`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizerSpec {
    GradientDescent,
}

/// The requested shape of a network, prior to validation.
///
/// Widths are signed and every function is optional here, the validator rejects non-positive
/// widths and missing functions by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologySpec {
    pub input_dense: i64,
    pub hidden_dense: i64,
    pub output_dense: i64,
    pub hidden_layers: i64,
    pub act_fn: Option<ActFnSpec>,
    pub output_act_fn: Option<OutputFnSpec>,
    pub loss: Option<LossFnSpec>,
    pub optimizer: Option<OptimizerSpec>,
}

impl TopologySpec {
    /// Creates a topology spec with the given widths and no functions selected.
    pub fn new(
        input_dense: i64,
        hidden_dense: i64,
        output_dense: i64,
        hidden_layers: i64,
    ) -> Self {
        Self {
            input_dense,
            hidden_dense,
            output_dense,
            hidden_layers,
            act_fn: None,
            output_act_fn: None,
            loss: None,
            optimizer: None,
        }
    }

    pub fn with_act_fn(mut self, act_fn: ActFnSpec) -> Self {
        self.act_fn = Some(act_fn);
        self
    }

    pub fn with_output_act_fn(mut self, output_act_fn: OutputFnSpec) -> Self {
        self.output_act_fn = Some(output_act_fn);
        self
    }

    pub fn with_loss(mut self, loss: LossFnSpec) -> Self {
        self.loss = Some(loss);
        self
    }

    pub fn with_optimizer(mut self, optimizer: OptimizerSpec) -> Self {
        self.optimizer = Some(optimizer);
        self
    }

    /// Parses a topology spec from JSON.
    ///
    /// # Returns
    /// `NullTopology` if the document is `null`, `Spec` if it is not a valid topology.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str::<Option<Self>>(json)?.ok_or(NetErr::NullTopology)
    }
}

/// Serializable description of a whole `Network`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub topology: Option<TopologySpec>,
    pub config: Option<NetworkConfig>,
    pub seed: Option<u64>,
}

impl NetworkSpec {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
