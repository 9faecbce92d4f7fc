use thiserror::Error;

/// Errors that can occur while sending a request
#[derive(Error, Debug)]
pub enum RequestError {
    /// The target URL could not be parsed
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The underlying client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(String),

    /// The per-call timeout elapsed
    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The server answered with a non-success status
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// The request body could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RequestError {
    /// HTTP status of the failed response, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
