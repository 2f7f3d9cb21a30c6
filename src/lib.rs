pub mod arch;
pub mod error;
pub mod linalg;
pub mod network;
pub mod specs;
pub mod tensor;
mod test;
pub mod topology;

pub use error::{FunctionKind, NetErr, Result};
pub use network::{Network, NetworkBuilder, NetworkConfig, build};
