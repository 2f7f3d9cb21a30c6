use log::debug;

use super::{
    MAX_HIDDEN_DENSE, MAX_HIDDEN_LAYERS, MAX_INPUT_DENSE, MAX_OUTPUT_DENSE, MIN_HIDDEN_LAYERS,
    Topology,
};
use crate::{
    FunctionKind, NetErr, Result,
    arch::{
        Optimizer,
        activations::{ActFn, OutputFn},
        loss::{Loss, Mae, Mse},
    },
    specs::{ActFnSpec, LossFnSpec, OptimizerSpec, OutputFnSpec, TopologySpec},
};

/// Validates a topology spec, resolving its functions.
///
/// Checks run in a fixed order and the first failure is returned: widths must be positive and
/// there must be at least `MIN_HIDDEN_LAYERS` hidden layers, then every width and the depth must
/// be within their limits, then the activation, output activation, loss and optimizer must be set.
///
/// # Arguments
/// * `spec` - The requested topology.
///
/// # Returns
/// The validated topology or the first rule it breaks.
pub fn validate(spec: &TopologySpec) -> Result<Topology> {
    check_params(spec)?;
    check_limits(spec)?;

    let act_fn = resolve_act_fn(spec.act_fn)?;
    let output_fn = resolve_output_fn(spec.output_act_fn)?;
    let loss = resolve_loss(spec.loss)?;
    let optimizer = resolve_optimizer(spec.optimizer)?;

    debug!(
        input_dense = spec.input_dense,
        hidden_dense = spec.hidden_dense,
        output_dense = spec.output_dense,
        hidden_layers = spec.hidden_layers;
        "validated topology"
    );

    Ok(Topology {
        input_dense: width(spec.input_dense),
        hidden_dense: width(spec.hidden_dense),
        output_dense: width(spec.output_dense),
        hidden_layers: width(spec.hidden_layers),
        act_fn,
        output_fn,
        loss,
        optimizer,
    })
}

impl TryFrom<&TopologySpec> for Topology {
    type Error = NetErr;

    fn try_from(spec: &TopologySpec) -> Result<Self> {
        validate(spec)
    }
}

fn check_params(spec: &TopologySpec) -> Result<()> {
    let widths = [
        ("input_dense", spec.input_dense),
        ("hidden_dense", spec.hidden_dense),
        ("output_dense", spec.output_dense),
    ];

    if let Some(&(what, got)) = widths.iter().find(|(_, w)| *w <= 0) {
        return Err(NetErr::InvalidTopologyParams { what, got });
    }

    if spec.hidden_layers < MIN_HIDDEN_LAYERS as i64 {
        return Err(NetErr::InvalidTopologyParams {
            what: "hidden_layers",
            got: spec.hidden_layers,
        });
    }

    Ok(())
}

fn check_limits(spec: &TopologySpec) -> Result<()> {
    let limits = [
        ("input_dense", width(spec.input_dense), MAX_INPUT_DENSE),
        ("hidden_dense", width(spec.hidden_dense), MAX_HIDDEN_DENSE),
        ("output_dense", width(spec.output_dense), MAX_OUTPUT_DENSE),
        ("hidden_layers", width(spec.hidden_layers), MAX_HIDDEN_LAYERS),
    ];

    match limits.iter().find(|(_, got, max)| got > max) {
        Some(&(what, got, max)) => Err(NetErr::DimensionLimitExceeded { what, got, max }),
        None => Ok(()),
    }
}

/// Only called on positive values, anything that does not fit saturates above every limit.
fn width(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn resolve_act_fn(spec: Option<ActFnSpec>) -> Result<ActFn> {
    let Some(spec) = spec else {
        return Err(NetErr::MissingFunction(FunctionKind::Activation));
    };

    let act_fn = match spec {
        ActFnSpec::Relu => ActFn::relu(),
        ActFnSpec::Elu { alpha } => ActFn::elu(alpha),
        ActFnSpec::Sigmoid => ActFn::sigmoid(),
        ActFnSpec::Tanh => ActFn::tanh(),
    };

    Ok(act_fn)
}

fn resolve_output_fn(spec: Option<OutputFnSpec>) -> Result<OutputFn> {
    match spec {
        Some(OutputFnSpec::Softmax) => Ok(OutputFn::softmax()),
        Some(OutputFnSpec::Linear) => Ok(OutputFn::linear()),
        None => Err(NetErr::MissingFunction(FunctionKind::OutputActivation)),
    }
}

fn resolve_loss(spec: Option<LossFnSpec>) -> Result<Loss> {
    match spec {
        Some(LossFnSpec::Mse) => Ok(Loss::Mse(Mse::new())),
        Some(LossFnSpec::Mae) => Ok(Loss::Mae(Mae::new())),
        None => Err(NetErr::MissingFunction(FunctionKind::Loss)),
    }
}

fn resolve_optimizer(spec: Option<OptimizerSpec>) -> Result<Optimizer> {
    match spec {
        Some(OptimizerSpec::GradientDescent) => Ok(Optimizer::gradient_descent()),
        None => Err(NetErr::MissingFunction(FunctionKind::Optimizer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(input: i64, hidden: i64, output: i64, layers: i64) -> TopologySpec {
        TopologySpec::new(input, hidden, output, layers)
            .with_act_fn(ActFnSpec::Relu)
            .with_output_act_fn(OutputFnSpec::Softmax)
            .with_loss(LossFnSpec::Mse)
            .with_optimizer(OptimizerSpec::GradientDescent)
    }

    #[test]
    fn one_hidden_layer_is_rejected() {
        let res = validate(&complete(5, 4, 3, 1));
        assert!(matches!(
            res,
            Err(NetErr::InvalidTopologyParams {
                what: "hidden_layers",
                got: 1
            })
        ));
    }

    #[test]
    fn two_hidden_layers_are_accepted() {
        let topology = validate(&complete(5, 4, 3, 2)).unwrap();

        assert_eq!(topology.hidden_layers(), 2);
        assert_eq!(topology.act_fn(), ActFn::relu());
        assert_eq!(topology.output_fn(), OutputFn::softmax());
    }

    #[test]
    fn zero_widths_are_rejected() {
        assert!(matches!(
            validate(&complete(0, 4, 3, 2)),
            Err(NetErr::InvalidTopologyParams { what: "input_dense", .. })
        ));
        assert!(matches!(
            validate(&complete(5, 4, 0, 2)),
            Err(NetErr::InvalidTopologyParams { what: "output_dense", .. })
        ));
    }

    #[test]
    fn negative_widths_are_invalid_params() {
        assert!(matches!(
            validate(&complete(5, -4, 3, 2)),
            Err(NetErr::InvalidTopologyParams {
                what: "hidden_dense",
                got: -4
            })
        ));
        assert!(matches!(
            validate(&complete(5, 4, 3, -2)),
            Err(NetErr::InvalidTopologyParams {
                what: "hidden_layers",
                got: -2
            })
        ));
    }

    #[test]
    fn negative_widths_from_json_are_invalid_params() {
        let json = r#"{
            "input_dense": -1,
            "hidden_dense": 4,
            "output_dense": 3,
            "hidden_layers": 2,
            "act_fn": "relu",
            "output_act_fn": "softmax",
            "loss": "mse",
            "optimizer": "gradient_descent"
        }"#;

        let spec = TopologySpec::from_json(json).unwrap();
        assert!(matches!(
            validate(&spec),
            Err(NetErr::InvalidTopologyParams {
                what: "input_dense",
                got: -1
            })
        ));
    }

    #[test]
    fn limits_are_checked_per_dimension() {
        assert!(matches!(
            validate(&complete(5, MAX_HIDDEN_DENSE as i64 + 1, 3, 2)),
            Err(NetErr::DimensionLimitExceeded { what: "hidden_dense", .. })
        ));
        assert!(matches!(
            validate(&complete(5, 4, 3, MAX_HIDDEN_LAYERS as i64 + 1)),
            Err(NetErr::DimensionLimitExceeded {
                what: "hidden_layers",
                got: 11,
                max: 10
            })
        ));
        assert!(validate(&complete(200, 200, 200, 10)).is_ok());
    }

    #[test]
    fn params_are_checked_before_limits() {
        let res = validate(&complete(MAX_INPUT_DENSE as i64 + 1, 4, 3, 1));
        assert!(matches!(res, Err(NetErr::InvalidTopologyParams { .. })));
    }

    #[test]
    fn missing_functions_are_named_in_order() {
        let spec = TopologySpec::new(5, 4, 3, 2);
        assert!(matches!(
            validate(&spec),
            Err(NetErr::MissingFunction(FunctionKind::Activation))
        ));

        let spec = spec.with_act_fn(ActFnSpec::Tanh);
        assert!(matches!(
            validate(&spec),
            Err(NetErr::MissingFunction(FunctionKind::OutputActivation))
        ));

        let spec = spec.with_output_act_fn(OutputFnSpec::Linear);
        assert!(matches!(
            validate(&spec),
            Err(NetErr::MissingFunction(FunctionKind::Loss))
        ));

        let spec = spec.with_loss(LossFnSpec::Mae);
        assert!(matches!(
            validate(&spec),
            Err(NetErr::MissingFunction(FunctionKind::Optimizer))
        ));

        let spec = spec.with_optimizer(OptimizerSpec::GradientDescent);
        assert!(Topology::try_from(&spec).is_ok());
    }

    #[test]
    fn weight_shapes_map_source_to_destination() {
        let topology = validate(&complete(5, 4, 3, 3)).unwrap();

        assert_eq!(topology.weight_count(), 4);
        assert_eq!(topology.weight_shape(0), Some((4, 5)));
        assert_eq!(topology.weight_shape(1), Some((4, 4)));
        assert_eq!(topology.weight_shape(2), Some((4, 4)));
        assert_eq!(topology.weight_shape(3), Some((3, 4)));
        assert_eq!(topology.weight_shape(4), None);
    }
}
