//! Feedforward Q-value networks on top of burn.
//!
//! The crate builds multi-layer perceptrons for value-based reinforcement
//! learning: a stack of affine transforms with a ReLU or tanh nonlinearity
//! at each hidden junction and a linear output layer producing one unbounded
//! estimate per discrete action. Construction and forward evaluation live
//! here; training loops, replay buffers and exploration policies belong to
//! the caller.

pub mod activation;
pub mod config;
pub mod error;
pub mod exports;
pub mod network;

pub use activation::Activation;
pub use error::{QNetError, Result};
pub use exports::{EvalLogger, EvalRecord};
pub use network::{Forward, QNetwork, QNetworkConfig};
