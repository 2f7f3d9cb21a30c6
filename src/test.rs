#![cfg(test)]

use crate::{
    FunctionKind, NetErr, NetworkBuilder, NetworkConfig,
    arch::loss::{LossFn, Mse},
    specs::{ActFnSpec, LossFnSpec, NetworkSpec, OptimizerSpec, OutputFnSpec, TopologySpec},
    tensor::{Matrix, Vector},
};

fn demo_topology() -> TopologySpec {
    TopologySpec::new(5, 4, 3, 2)
        .with_act_fn(ActFnSpec::Relu)
        .with_output_act_fn(OutputFnSpec::Softmax)
        .with_loss(LossFnSpec::Mse)
        .with_optimizer(OptimizerSpec::GradientDescent)
}

#[test]
fn test_demo_network_end_to_end() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut net = NetworkBuilder::with_seed(2549)
        .build(&demo_topology(), None)
        .unwrap();

    let input = Vector::from_vec(vec![0.1, 0.2, 0.3, 0.4, 0.5]).unwrap();
    let output = net.predict(input).unwrap().to_vec().unwrap();

    assert_eq!(output.len(), 3);
    assert!(output.iter().all(|&p| (0. ..=1.).contains(&p)));
    assert!((output.iter().sum::<f64>() - 1.).abs() < 1e-5);

    let expected = Vector::from_vec(vec![1., 0., 0.]).unwrap();
    let loss = net.loss(&expected).unwrap();
    assert_eq!(loss, Mse.loss(&expected, net.output().unwrap()).unwrap());

    net.backward().unwrap();
    net.optimize().unwrap();
    net.release().unwrap();
}

#[test]
fn test_hand_computed_forward_pass() {
    let spec = TopologySpec::new(3, 3, 3, 2)
        .with_act_fn(ActFnSpec::Relu)
        .with_output_act_fn(OutputFnSpec::Linear)
        .with_loss(LossFnSpec::Mae)
        .with_optimizer(OptimizerSpec::GradientDescent);
    let mut net = NetworkBuilder::with_seed(0).build(&spec, None).unwrap();

    let m = || Matrix::from_rows(&[&[1., 2., 3.], &[2., 3., 4.], &[3., 5., 6.]]).unwrap();
    let halve = Matrix::from_rows(&[&[0.5, 0., 0.], &[0., 0.5, 0.], &[0., 0., 0.5]]).unwrap();
    let negate = Matrix::from_rows(&[&[-1., 0., 0.], &[0., 1., 0.], &[0., 0., -1.]]).unwrap();

    net.set_weights(0, m()).unwrap();
    net.set_weights(1, halve).unwrap();
    net.set_weights(2, negate).unwrap();

    let output = net
        .predict(Vector::from_vec(vec![2., 4., 8.]).unwrap())
        .unwrap()
        .to_vec()
        .unwrap();

    // [34, 48, 74] halved, then the linear output negates the outer values
    assert_eq!(output, vec![-17., 24., -37.]);
}

#[test]
fn test_json_spec_with_config() {
    let json = r#"{
        "topology": {
            "input_dense": 4,
            "hidden_dense": 6,
            "output_dense": 2,
            "hidden_layers": 3,
            "act_fn": "tanh",
            "output_act_fn": "softmax",
            "loss": "mae",
            "optimizer": "gradient_descent"
        },
        "config": { "learning_rate": 0.01, "use_biases": true },
        "seed": 7
    }"#;

    let spec = NetworkSpec::from_json(json).unwrap();
    let a = NetworkBuilder::from_spec(&spec).unwrap();
    let b = NetworkBuilder::from_spec(&spec).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.config().learning_rate, 0.01);
    assert_eq!(a.config().epochs, NetworkConfig::DEFAULT.epochs);
    assert!(a.config().use_biases);
    assert_eq!(a.weights().unwrap().len(), 4);
}

#[test]
fn test_incomplete_json_spec_names_the_missing_function() {
    let json = r#"{
        "topology": {
            "input_dense": 4,
            "hidden_dense": 6,
            "output_dense": 2,
            "hidden_layers": 3,
            "act_fn": "relu",
            "output_act_fn": "linear"
        }
    }"#;

    let spec = NetworkSpec::from_json(json).unwrap();
    assert!(matches!(
        NetworkBuilder::from_spec(&spec),
        Err(NetErr::MissingFunction(FunctionKind::Loss))
    ));
}
