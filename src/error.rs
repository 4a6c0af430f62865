//! Crate-level error types.

use std::fmt;

/// Errors produced by the inax crate.
///
/// The numeric core is infallible by design — malformed configuration is
/// repaired by the `validate` methods, never rejected — so only the options
/// layer can fail.
#[derive(Debug)]
pub enum InaxError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for InaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for InaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for InaxError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
