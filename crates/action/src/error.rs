use starhunter_credential::CredentialError;
use starhunter_parameter::error::ParameterError;
use starhunter_request::RequestError;

/// Error type for all action operations.
///
/// Every variant fails exactly one input item. Whether the run stops or
/// records the failure and moves on is the node's continue-on-failure
/// decision, not the action's.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ActionError {
    /// The remote API answered with a non-empty `errors` array.
    ///
    /// Displays as the remote messages joined with `", "`.
    #[error("{message}")]
    RemoteApi {
        /// Joined error messages.
        message: String,
        /// The raw response body, kept for diagnostics.
        response: serde_json::Value,
    },

    /// Network failure or non-success HTTP status.
    #[error("{message}")]
    Transport {
        message: String,
        /// HTTP status, when the server answered.
        status: Option<u16>,
    },

    /// Input parameters failed resolution or were unusable.
    #[error("validation: {0}")]
    Validation(String),

    /// The credential record was missing or incomplete.
    #[error("credential: {0}")]
    Credential(String),

    /// No action is registered for the selected resource/operation.
    #[error("the operation `{operation}` is not supported for resource `{resource}`")]
    UnknownAction { resource: String, operation: String },

    /// Permanent failure with no better classification.
    #[error("fatal: {0}")]
    Fatal(String),
}

impl ActionError {
    /// Create a remote API error from the individual GraphQL messages.
    pub fn remote_api<I, S>(messages: I, response: serde_json::Value) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let message = messages
            .into_iter()
            .map(|m| m.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(", ");
        Self::RemoteApi { message, response }
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a fatal error.
    pub fn fatal(msg: impl Into<String>) -> Self {
        Self::Fatal(msg.into())
    }

    /// Short machine-readable classification for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RemoteApi { .. } => "remote_api",
            Self::Transport { .. } => "transport",
            Self::Validation(_) => "validation",
            Self::Credential(_) => "credential",
            Self::UnknownAction { .. } => "unknown_action",
            Self::Fatal(_) => "fatal",
        }
    }
}

impl From<RequestError> for ActionError {
    fn from(err: RequestError) -> Self {
        Self::Transport {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

impl From<ParameterError> for ActionError {
    fn from(err: ParameterError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<CredentialError> for ActionError {
    fn from(err: CredentialError) -> Self {
        Self::Credential(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remote_api_joins_messages() {
        let response = json!({ "errors": [{ "message": "A" }, { "message": "B" }] });
        let err = ActionError::remote_api(["A", "B"], response.clone());
        assert_eq!(err.to_string(), "A, B");
        assert_eq!(err.kind(), "remote_api");
        match err {
            ActionError::RemoteApi { response: r, .. } => assert_eq!(r, response),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn request_errors_become_transport() {
        let err: ActionError = RequestError::Status {
            status: 502,
            body: "bad gateway".into(),
        }
        .into();
        assert_eq!(
            err,
            ActionError::Transport {
                message: "request failed with status 502: bad gateway".into(),
                status: Some(502),
            }
        );
    }

    #[test]
    fn parameter_errors_become_validation() {
        let err: ActionError = ParameterError::MissingValue {
            key: "title".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "validation: missing value for required parameter `title`"
        );
    }

    #[test]
    fn credential_errors() {
        let err: ActionError = CredentialError::NotFound {
            key: "starhunterApi".into(),
        }
        .into();
        assert_eq!(err.kind(), "credential");
        assert_eq!(
            err.to_string(),
            "credential: credential `starhunterApi` is not configured"
        );
    }

    #[test]
    fn unknown_action_message() {
        let err = ActionError::UnknownAction {
            resource: "person".into(),
            operation: "delete".into(),
        };
        assert_eq!(
            err.to_string(),
            "the operation `delete` is not supported for resource `person`"
        );
    }
}
