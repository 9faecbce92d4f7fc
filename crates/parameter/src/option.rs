use serde::{Deserialize, Serialize};

/// A single option in a select parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Machine-readable identifier.
    pub key: String,

    /// Human-readable display label.
    pub name: String,

    /// The value produced when this option is selected.
    pub value: serde_json::Value,

    /// Optional tooltip or help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Action label shown by hosts that render operation pickers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl SelectOption {
    /// Create a new option with the given key, name, and value.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            value,
            description: None,
            action: None,
        }
    }

    /// Shorthand for an option whose key and value are the same string.
    #[must_use]
    pub fn keyed(key: &str, name: impl Into<String>) -> Self {
        Self::new(key, name, serde_json::Value::String(key.to_owned()))
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keyed_uses_key_as_value() {
        let opt = SelectOption::keyed("getById", "Get by ID");
        assert_eq!(opt.key, "getById");
        assert_eq!(opt.value, json!("getById"));
        assert!(opt.description.is_none());
    }

    #[test]
    fn builders_fill_optional_fields() {
        let opt = SelectOption::keyed("search", "Search")
            .with_description("Search persons by name")
            .with_action("Search persons");
        assert_eq!(opt.description.as_deref(), Some("Search persons by name"));
        assert_eq!(opt.action.as_deref(), Some("Search persons"));
    }
}
