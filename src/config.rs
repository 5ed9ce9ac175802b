use burn::backend::NdArray;
use burn::prelude::Backend;
/**
* -------------------------------------------------------------------------
* BACKEND AND DEVICE INITIALIZATION
* -------------------------------------------------------------------------
*/
pub type CpuBackend = NdArray;
pub type CpuDevice = <CpuBackend as Backend>::Device;

/**
* -------------------------------------------------------------------------
* EVALUATION RUN PARAMETERS
* -------------------------------------------------------------------------
*/
pub struct EvalParams {
    // network architecture
    pub input_dim: usize,
    pub output_dim: usize,
    pub hidden_dims: Vec<usize>,

    // synthetic observation batches
    pub batch_size: usize,
    pub num_batches: usize,

    // RNG
    pub rng_seed: u64,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            // network architecture
            input_dim: 4,
            output_dim: 2,
            hidden_dims: vec![128, 64],

            // synthetic observation batches
            batch_size: 32,
            num_batches: 200,

            // RNG
            rng_seed: 42,
        }
    }
}
