mod shape;
mod validate;

pub use shape::Topology;
pub use validate::validate;

/// Maximum width of the input layer.
pub const MAX_INPUT_DENSE: usize = 200;

/// Maximum width of every hidden layer.
pub const MAX_HIDDEN_DENSE: usize = 200;

/// Maximum width of the output layer.
pub const MAX_OUTPUT_DENSE: usize = 200;

/// Maximum amount of hidden layers.
pub const MAX_HIDDEN_LAYERS: usize = 10;

/// Minimum amount of hidden layers.
pub const MIN_HIDDEN_LAYERS: usize = 2;
