use starhunter_parameter::error::ParameterError;

/// Errors raised while loading or interpreting credential records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    /// No credential is stored under the requested type key.
    #[error("credential `{key}` is not configured")]
    NotFound { key: String },

    /// The record lacks a field its consumer needs.
    #[error("credential field `{field}` is missing")]
    MissingField { field: String },

    /// A field is present but unusable.
    #[error("credential field `{field}` is invalid: {reason}")]
    InvalidField { field: String, reason: String },

    /// Raw input did not satisfy the credential form.
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// The backing store failed.
    #[error("credential provider failed: {0}")]
    Provider(String),
}

impl CredentialError {
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    #[must_use]
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = CredentialError::NotFound {
            key: "starhunterApi".into(),
        };
        assert_eq!(err.to_string(), "credential `starhunterApi` is not configured");
        assert_eq!(
            CredentialError::missing_field("accessToken").to_string(),
            "credential field `accessToken` is missing"
        );
        assert_eq!(
            CredentialError::invalid_field("baseUrl", "relative URL").to_string(),
            "credential field `baseUrl` is invalid: relative URL"
        );
    }

    #[test]
    fn parameter_errors_pass_through() {
        let err: CredentialError = ParameterError::MissingValue {
            key: "accessToken".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "missing value for required parameter `accessToken`"
        );
    }
}
