/// Error type for parameter operations.
///
/// Raised while resolving caller input against a parameter collection and
/// when actions read typed values back out of a resolved set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    /// Value type does not match the expected parameter type.
    #[error("invalid type for `{key}`: expected {expected_type}, got {actual_details}")]
    InvalidType {
        key: String,
        expected_type: String,
        actual_details: String,
    },

    /// Value is present but invalid for the parameter's constraints.
    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },

    /// A required parameter has no value.
    #[error("missing value for required parameter `{key}`")]
    MissingValue { key: String },
}

impl ParameterError {
    /// Key of the parameter the error refers to.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::InvalidType { key, .. }
            | Self::InvalidValue { key, .. }
            | Self::MissingValue { key } => key,
        }
    }

    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::InvalidType { .. } => "type",
            Self::InvalidValue { .. } | Self::MissingValue { .. } => "value",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidType { .. } => "PARAM_INVALID_TYPE",
            Self::InvalidValue { .. } => "PARAM_INVALID_VALUE",
            Self::MissingValue { .. } => "PARAM_MISSING_VALUE",
        }
    }

    pub(crate) fn invalid_type(key: &str, expected: &str, actual: &serde_json::Value) -> Self {
        Self::InvalidType {
            key: key.to_owned(),
            expected_type: expected.to_owned(),
            actual_details: describe(actual),
        }
    }
}

fn describe(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_owned(),
        serde_json::Value::Bool(b) => format!("boolean {b}"),
        serde_json::Value::Number(n) => format!("number {n}"),
        serde_json::Value::String(s) => format!("string {s:?}"),
        serde_json::Value::Array(_) => "array".to_owned(),
        serde_json::Value::Object(_) => "object".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_messages() {
        let err = ParameterError::invalid_type("limit", "number", &json!("abc"));
        assert_eq!(
            err.to_string(),
            "invalid type for `limit`: expected number, got string \"abc\""
        );

        let err = ParameterError::InvalidValue {
            key: "limit".into(),
            reason: "must be at most 1000".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for `limit`: must be at most 1000"
        );

        let err = ParameterError::MissingValue {
            key: "title".into(),
        };
        assert_eq!(
            err.to_string(),
            "missing value for required parameter `title`"
        );
    }

    #[test]
    fn codes_and_categories() {
        let err = ParameterError::MissingValue { key: "to".into() };
        assert_eq!(err.code(), "PARAM_MISSING_VALUE");
        assert_eq!(err.category(), "value");
        assert_eq!(err.key(), "to");

        let err = ParameterError::invalid_type("useToday", "boolean", &json!(1));
        assert_eq!(err.code(), "PARAM_INVALID_TYPE");
        assert_eq!(err.category(), "type");
    }
}
