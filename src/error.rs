use std::fmt;

/// Result alias for fallible network construction.
pub type Result<T> = std::result::Result<T, QNetError>;

/// Errors raised while assembling a value network.
#[derive(Debug)]
pub enum QNetError {
    /// A declared layer width of zero.
    InvalidDimension {
        /// Which field carried the bad value.
        what: &'static str,
        /// The rejected width.
        got: usize,
    },
    /// An activation symbol outside the supported set.
    InvalidActivation {
        /// The rejected symbol.
        got: String,
    },
}

impl fmt::Display for QNetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QNetError::InvalidDimension { what, got } => {
                write!(f, "invalid {what}: got {got}, every dimension must be >= 1")
            }
            QNetError::InvalidActivation { got } => {
                write!(f, "unsupported activation {got:?}, expected \"relu\" or \"tanh\"")
            }
        }
    }
}

impl std::error::Error for QNetError {}
