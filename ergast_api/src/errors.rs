//! Error types for the API client.

use crate::query::Field;

/// Errors that can occur when building queries or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A value was supplied for a field this query kind does not accept.
    #[error("{field} is not supported for this query")]
    UnsupportedParameter { field: Field },
    /// A field this query kind requires was not supplied.
    #[error("{field} is required for this query")]
    MissingRequiredParameter { field: Field },
    /// A supplied value has the wrong shape or is out of range.
    #[error("invalid {field} '{value}': {reason}")]
    InvalidParameterValue {
        field: Field,
        value: String,
        reason: String,
    },
    /// A filter key that is unknown or not legal for this query kind.
    #[error("filter '{filter}' is not supported for this query")]
    UnsupportedFilter { filter: String },
    /// The request could not be completed or returned a non-success status.
    /// `status` is `None` when no response was received at all.
    #[error("request failed{}: {message}", status_suffix(.status))]
    Transport {
        status: Option<u16>,
        message: String,
    },
    /// The response body was not the JSON document this query expects.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(status) => format!(" with status {}", status),
        None => String::new(),
    }
}

impl Error {
    pub fn unsupported_parameter(field: Field) -> Self {
        Self::UnsupportedParameter { field }
    }

    pub fn missing_required_parameter(field: Field) -> Self {
        Self::MissingRequiredParameter { field }
    }

    pub fn invalid_parameter_value(
        field: Field,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameterValue {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn unsupported_filter(filter: impl Into<String>) -> Self {
        Self::UnsupportedFilter {
            filter: filter.into(),
        }
    }

    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            status,
            message: message.into(),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// True for errors raised while validating a query, before any request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedParameter { .. }
                | Self::MissingRequiredParameter { .. }
                | Self::InvalidParameterValue { .. }
                | Self::UnsupportedFilter { .. }
        )
    }
}
