use serde::{Deserialize, Serialize};

/// The kind of a parameter, determining its UI widget and value semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Text,
    Textarea,
    Secret,
    Number,
    Checkbox,
    Select,
    DateTime,
}

impl ParameterKind {
    /// Name of the JSON type a value of this kind must have.
    #[must_use]
    pub fn expected_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Textarea | Self::Secret | Self::DateTime => "string",
            Self::Number => "number",
            Self::Checkbox => "boolean",
            Self::Select => "any",
        }
    }

    /// Whether a JSON value has the shape this kind expects.
    #[must_use]
    pub fn accepts(&self, value: &serde_json::Value) -> bool {
        match self {
            Self::Text | Self::Textarea | Self::Secret | Self::DateTime => value.is_string(),
            Self::Number => value.is_number(),
            Self::Checkbox => value.is_boolean(),
            Self::Select => true,
        }
    }
}
