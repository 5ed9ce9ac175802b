use std::error::Error;

use burn::prelude::*;
use kdam::tqdm;
use log::info;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_xoshiro::Xoshiro256PlusPlus;

use qnet::config::{CpuBackend, CpuDevice, EvalParams};
use qnet::{Activation, EvalLogger, Forward, QNetworkConfig};

/// Draws one flat batch of standard-normal observations.
fn synth_batch(rng: &mut Xoshiro256PlusPlus, batch_size: usize, input_dim: usize) -> Vec<f32> {
    (0..batch_size * input_dim)
        .map(|_| rng.sample(StandardNormal))
        .collect()
}

/// Scores synthetic observation batches with a freshly built network and
/// exports per-batch value statistics.
fn run_eval(
    activation: Activation,
    params: &EvalParams,
    device: &CpuDevice,
) -> Result<(), Box<dyn Error>> {
    let net = QNetworkConfig::new(params.input_dim, params.output_dim, activation)
        .with_hidden_dims(params.hidden_dims.clone())
        .init::<CpuBackend>(device)?;
    info!(
        "evaluating {} network {:?} with {} parameters",
        net.activation(),
        net.layer_shapes(),
        net.num_params(),
    );

    let mut logger = EvalLogger::new(&format!("./data/qnet_eval_{}", net.activation()))?;
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(params.rng_seed);
    let mut total_mean = 0.0;

    for batch in tqdm!(0..params.num_batches) {
        let flat = synth_batch(&mut rng, params.batch_size, params.input_dim);
        let x: Tensor<CpuBackend, 2> = Tensor::<CpuBackend, 1>::from_floats(flat.as_slice(), device)
            .reshape([params.batch_size, params.input_dim]);

        let q = net.forward(x);
        let mean_q = q.clone().mean().into_scalar();
        let max_q = q.clone().max().into_scalar();
        let min_q = q.min().into_scalar();
        total_mean += mean_q;

        logger.log(batch, params.batch_size, mean_q, max_q, min_q)?;
    }

    println!("Mean Q : {:.3}", total_mean / params.num_batches as f32);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let params = EvalParams::default();
    let device = CpuDevice::default();
    println!("Using device: {:?}", device);

    for symbol in ["relu", "tanh"] {
        let activation: Activation = symbol.parse()?;
        run_eval(activation, &params, &device)?;
    }
    Ok(())
}
