use serde::{Deserialize, Serialize};

/// Hyperparameters of a network.
///
/// Every field missing from a serialized config takes its value from `NetworkConfig::DEFAULT`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub learning_rate: f64,
    pub dropout: bool,
    pub epochs: usize,
    /// Whether forward propagation adds each stage's bias before activating.
    pub use_biases: bool,
}

impl NetworkConfig {
    /// The configuration used by networks built without one.
    pub const DEFAULT: Self = Self {
        learning_rate: 0.2549,
        dropout: false,
        epochs: 5,
        use_biases: false,
    };

    /// Returns this config with `use_biases` set.
    pub fn with_biases(self, use_biases: bool) -> Self {
        Self { use_biases, ..self }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
