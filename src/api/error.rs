use serde::Deserialize;
use thiserror::Error;

/// One rejected form field from a 422 response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationCase {
    pub field: String,
    pub message: String,
}

/// Body of a 422 response: `{"validationErrors": [{field, message}, ...]}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidationErrorsBody {
    pub validation_errors: Vec<ValidationCase>,
}

/// Classified outcome of a failed API call.
///
/// Every non-200 response and every transport failure maps to exactly one
/// variant, so consumers switch on the kind instead of downcasting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401: the session is invalid or expired. The stored token has already
    /// been deleted by the time this error is observed.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// 404: the target entity does not exist on the server.
    #[error("resource not found: {message}")]
    ResourceNotFound { message: String },

    /// 422: the server rejected form input, with per-field cases.
    #[error("server validation failed ({} case(s))", cases.len())]
    Validation { cases: Vec<ValidationCase> },

    /// 500 or any status with no dedicated classification.
    #[error("general server error (status {status})")]
    Server { status: u16 },

    /// The request never produced a server verdict: connection refused,
    /// timeout, or a local I/O failure while handling the payload.
    #[error("network error: {message}")]
    Network { message: String },
}

impl ApiError {
    pub fn has_error_case(&self, field: &str) -> bool {
        self.error_case(field).is_some()
    }

    pub fn error_case(&self, field: &str) -> Option<&ValidationCase> {
        match self {
            ApiError::Validation { cases } => cases.iter().find(|case| case.field == field),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Network {
            message: error.to_string(),
        }
    }
}
