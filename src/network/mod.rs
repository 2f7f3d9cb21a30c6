mod builder;
mod config;
mod dump;
mod forward;
mod net;

pub use builder::{NetworkBuilder, build};
pub use config::NetworkConfig;
pub use net::{LayerSet, Network};
