//! Typed failures of the article service client.

use thiserror::Error;

/// Status code the service uses for a missing resource.
pub const NOT_FOUND: u16 = 404;

/// Failure of a call to the article service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text, or a reason-phrase fallback.
        message: String,
    },
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// A JSON response body did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
    /// The request body could not be encoded.
    #[error("Serialize error: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Build the error for a non-success response.
    ///
    /// An empty body falls back to `API Error: <reason phrase>`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            let reason = http::StatusCode::from_u16(status)
                .ok()
                .and_then(|code| code.canonical_reason())
                .unwrap_or("Unknown Status");
            format!("API Error: {reason}")
        } else {
            body.to_string()
        };
        ApiError::Status {
            status,
            message,
        }
    }

    /// HTTP status carried by the error, if the service responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status {
                status, ..
            } => Some(*status),
            _ => None,
        }
    }

    /// True only for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(NOT_FOUND)
    }
}
