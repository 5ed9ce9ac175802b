use std::fs;

use burn::prelude::*;

use qnet::config::CpuBackend;
use qnet::{Activation, EvalLogger, Forward, QNetError, QNetwork, QNetworkConfig};

type B = CpuBackend;

/// Generic over the evaluation seam, the way downstream agents consume it.
fn observation_values<M: Forward<B = B>>(model: &M, obs: Tensor<B, 1>) -> Vec<f32> {
    model.forward(obs).into_data().to_vec().unwrap()
}

/// Spells fallible construction through the crate-level result alias, the
/// way library consumers do.
fn build_network(
    input_dim: usize,
    output_dim: usize,
    activation: Activation,
    hidden_dims: Vec<usize>,
) -> qnet::Result<QNetwork<B>> {
    QNetworkConfig::new(input_dim, output_dim, activation)
        .with_hidden_dims(hidden_dims)
        .init::<B>(&Default::default())
}

#[test]
fn test_batch_evaluation_pipeline() {
    // 1. Network
    // Observation width 4, two discrete actions, one hidden junction
    let device = Default::default();
    let net = QNetworkConfig::new(4, 2, Activation::Relu)
        .with_hidden_dims(vec![8])
        .init::<B>(&device)
        .expect("Failed to build network");
    assert_eq!(net.num_layers(), 2);

    // 2. Batch scoring
    let x = Tensor::<B, 2>::zeros([32, 4], &device);
    let q = net.forward(x);
    assert_eq!(q.dims(), [32, 2]);

    // 3. Single observation through the generic seam
    let obs = Tensor::<B, 1>::from_floats([0.1, -0.4, 2.0, 0.7], &device);
    let values = observation_values(&net, obs);
    assert_eq!(values.len(), 2);
    assert!(values.iter().all(|v| v.is_finite()));

    // 4. Independent parameters per init
    let twin = QNetworkConfig::new(4, 2, Activation::Relu)
        .with_hidden_dims(vec![8])
        .init::<B>(&device)
        .expect("Failed to build twin network");
    let same_input = Tensor::<B, 1>::ones([4], &device);
    assert_ne!(
        observation_values(&net, same_input.clone()),
        observation_values(&twin, same_input)
    );

    // 5. Export
    let base = std::env::temp_dir().join(format!("qnet_eval_it_{}", std::process::id()));
    let base_str = base.to_str().expect("temp dir is not valid utf-8");
    let mut logger = EvalLogger::new(base_str).expect("Failed to create logger");
    for batch in 0..3 {
        logger
            .log(batch, 32, 0.15, 0.92, -0.38)
            .expect("Failed to log batch record");
    }

    // 6. Verify
    // Header row plus one row per logged batch
    let csv_path = logger.run_dir().join("metadata.csv");
    let contents = fs::read_to_string(&csv_path).expect("Failed to read metadata.csv");
    assert_eq!(contents.lines().count(), 4);
    assert!(contents.starts_with("batch,batch_size,mean_q,max_q,min_q"));

    // 7. Every exported field parses back as a finite number
    for line in contents.lines().skip(1) {
        for field in line.split(',') {
            let value: f64 = field.parse().expect("Failed to parse exported field");
            assert!(value.is_finite());
        }
    }

    fs::remove_dir_all(&base).ok();
}

#[test]
fn test_construction_and_forward_contract() {
    // 1. One transform per adjacent pair of [input, hidden.., output]
    let device = Default::default();
    let net = build_network(4, 2, Activation::Relu, vec![8]).expect("Failed to build network");
    assert_eq!(net.num_layers(), 2);
    assert_eq!(net.layer_shapes(), vec![(4, 8), (8, 2)]);

    // 2. Batches map (32, 4) -> (32, 2)
    let x = Tensor::<B, 2>::zeros([32, 4], &device);
    assert_eq!(net.forward(x).dims(), [32, 2]);

    // 3. No hidden dims: a single transform, (1, 3) -> (1, 1)
    let minimal = build_network(3, 1, Activation::Tanh, vec![]).expect("Failed to build network");
    assert_eq!(minimal.num_layers(), 1);
    assert_eq!(minimal.layer_shapes(), vec![(3, 1)]);
    let x = Tensor::<B, 2>::zeros([1, 3], &device);
    assert_eq!(minimal.forward(x).dims(), [1, 1]);

    // 4. Zero dimensions and unknown activation symbols are rejected
    let err = build_network(0, 2, Activation::Relu, vec![]).unwrap_err();
    assert!(matches!(err, QNetError::InvalidDimension { .. }));
    let err = "sigmoid".parse::<Activation>().unwrap_err();
    assert!(matches!(err, QNetError::InvalidActivation { .. }));
}
