//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input validation failures.
#[derive(Debug)]
pub enum Formula1Error {
    /// An error from the underlying API client.
    Api(ergast_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for Formula1Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Formula1Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<ergast_api::Error> for Formula1Error {
    fn from(e: ergast_api::Error) -> Self {
        Self::Api(e)
    }
}
