use std::fmt;
use std::str::FromStr;

use burn::prelude::*;
use burn::tensor::activation;
use serde::{Deserialize, Serialize};

use crate::error::QNetError;

/// Nonlinearity applied between the affine transforms of a network.
///
/// The output layer stays linear; activations only sit at hidden junctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// `max(0, x)` elementwise.
    Relu,
    /// Hyperbolic tangent elementwise.
    Tanh,
}

impl Activation {
    /// Applies the nonlinearity elementwise, preserving shape.
    pub fn forward<B: Backend, const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D> {
        match self {
            Activation::Relu => activation::relu(input),
            Activation::Tanh => activation::tanh(input),
        }
    }
}

impl FromStr for Activation {
    type Err = QNetError;

    /// Accepts exactly `"relu"` and `"tanh"`, with no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relu" => Ok(Activation::Relu),
            "tanh" => Ok(Activation::Tanh),
            other => Err(QNetError::InvalidActivation {
                got: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Relu => write!(f, "relu"),
            Activation::Tanh => write!(f, "tanh"),
        }
    }
}
