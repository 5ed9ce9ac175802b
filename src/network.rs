use std::iter;

use burn::config::Config;
use burn::module::Ignored;
use burn::nn;
use burn::prelude::*;
use log::debug;

use crate::activation::Activation;
use crate::error::QNetError;

/// Evaluation seam shared by every value network in this crate.
///
/// Rank-generic so one implementation scores a single observation
/// (`Tensor<B, 1>`) as well as a batch with arbitrary leading dimensions.
pub trait Forward {
    type B: Backend;

    /// Maps inputs with trailing dimension `input_dim` to outputs with
    /// trailing dimension `output_dim`, leaving every other dimension as is.
    ///
    /// # Panics
    /// The backend matrix multiply panics when the trailing dimension of
    /// `input` does not match the network's `input_dim`.
    fn forward<const D: usize>(&self, input: Tensor<Self::B, D>) -> Tensor<Self::B, D>;
}

/// Configuration for a [`QNetwork`].
#[derive(Config, Debug)]
pub struct QNetworkConfig {
    /// Width of the consumed feature vector, typically the observation size.
    pub input_dim: usize,
    /// Width of the produced value vector, typically the action count.
    pub output_dim: usize,
    /// Nonlinearity applied after every transform except the last.
    pub activation: Activation,
    /// Hidden widths ordered from input side to output side.
    #[config(default = "Vec::new()")]
    pub hidden_dims: Vec<usize>,
    /// Accepted for call-site compatibility; construction never reads it.
    pub hidden_num: Option<usize>,
}

impl QNetworkConfig {
    /// Builds the network on `device`.
    ///
    /// One affine transform is allocated per adjacent pair of
    /// `[input_dim, hidden_dims.., output_dim]`, each owning its own weight
    /// matrix and bias vector.
    ///
    /// # Errors
    /// [`QNetError::InvalidDimension`] when any declared width is zero.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Result<QNetwork<B>, QNetError> {
        if self.input_dim < 1 {
            return Err(QNetError::InvalidDimension {
                what: "input_dim",
                got: self.input_dim,
            });
        }
        if self.output_dim < 1 {
            return Err(QNetError::InvalidDimension {
                what: "output_dim",
                got: self.output_dim,
            });
        }
        if self.hidden_dims.iter().any(|&width| width < 1) {
            return Err(QNetError::InvalidDimension {
                what: "hidden_dims",
                got: 0,
            });
        }

        let mut hidden = Vec::with_capacity(self.hidden_dims.len());
        let mut input_size = self.input_dim;

        for &hidden_size in &self.hidden_dims {
            let layer = nn::LinearConfig::new(input_size, hidden_size).with_bias(true).init(device);
            hidden.push(layer);
            input_size = hidden_size;
        }

        let output = nn::LinearConfig::new(input_size, self.output_dim).with_bias(true).init(device);

        debug!(
            "built q-network {} -> {:?} -> {} with {} transforms ({})",
            self.input_dim,
            self.hidden_dims,
            self.output_dim,
            self.hidden_dims.len() + 1,
            self.activation,
        );

        Ok(QNetwork {
            hidden,
            output,
            activation: Ignored(self.activation),
        })
    }
}

/// Feedforward action-value approximator.
///
/// A stack of affine transforms with a fixed nonlinearity at every hidden
/// junction; the final transform stays linear so the estimated values are
/// unbounded.
#[derive(Module, Debug)]
pub struct QNetwork<B: Backend> {
    hidden: Vec<nn::Linear<B>>,
    output: nn::Linear<B>,
    activation: Ignored<Activation>,
}

impl<B: Backend> QNetwork<B> {
    /// Number of affine transforms, `hidden_dims.len() + 1`.
    pub fn num_layers(&self) -> usize {
        self.hidden.len() + 1
    }

    /// `(fan_in, fan_out)` of every affine transform, in forward order.
    pub fn layer_shapes(&self) -> Vec<(usize, usize)> {
        self.hidden
            .iter()
            .chain(iter::once(&self.output))
            .map(|layer| {
                let [d_input, d_output] = layer.weight.val().dims();
                (d_input, d_output)
            })
            .collect()
    }

    /// Trailing dimension expected on inputs.
    pub fn input_dim(&self) -> usize {
        let first = self.hidden.first().unwrap_or(&self.output);
        first.weight.val().dims()[0]
    }

    /// Trailing dimension of produced outputs.
    pub fn output_dim(&self) -> usize {
        self.output.weight.val().dims()[1]
    }

    /// Nonlinearity applied at hidden junctions.
    pub fn activation(&self) -> Activation {
        self.activation.0
    }
}

impl<B: Backend> Forward for QNetwork<B> {
    type B = B;

    fn forward<const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D> {
        let mut x = input;
        for layer in &self.hidden {
            x = self.activation.forward(layer.forward(x));
        }
        self.output.forward(x)
    }
}
