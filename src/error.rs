//! Error type shared by the engine, the configuration layer and the report sink.

use std::fmt;
use std::io;

/// Errors produced while running a dot product scenario.
#[derive(Debug)]
pub enum Error {
    /// The two operand vectors do not have the same length.
    ShapeMismatch { left: usize, right: usize },
    /// An environment variable held a value that could not be parsed.
    InvalidConfig { key: &'static str, value: String },
    /// Writing a report line failed.
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShapeMismatch { left, right } => write!(
                f,
                "shape mismatch: left operand has {} elements, right operand has {}",
                left, right
            ),
            Error::InvalidConfig { key, value } => {
                write!(f, "invalid value {:?} for {}", value, key)
            }
            Error::Io(e) => write!(f, "failed to write report: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Fail with [`Error::ShapeMismatch`] unless both operands have the same length.
#[inline]
pub fn check_shape(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::ShapeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
