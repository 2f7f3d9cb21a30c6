pub mod activations;
pub mod loss;
mod optimizer;

pub use optimizer::{GradientDescent, Optimizer};
