use std::{env, fs};

use anyhow::Context;
use log::info;

use dense_net::{
    NetworkBuilder,
    specs::{ActFnSpec, LossFnSpec, NetworkSpec, OptimizerSpec, OutputFnSpec, TopologySpec},
};

fn demo_spec() -> NetworkSpec {
    let topology = TopologySpec::new(5, 4, 3, 2)
        .with_act_fn(ActFnSpec::Relu)
        .with_output_act_fn(OutputFnSpec::Softmax)
        .with_loss(LossFnSpec::Mse)
        .with_optimizer(OptimizerSpec::GradientDescent);

    NetworkSpec {
        topology: Some(topology),
        config: None,
        seed: None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let spec = match env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            info!("loaded network spec from {path}");
            NetworkSpec::from_json(&json)?
        }
        None => demo_spec(),
    };

    let mut net = NetworkBuilder::from_spec(&spec)?;
    net.forward()?;
    println!("{net}");

    net.release()?;
    Ok(())
}
