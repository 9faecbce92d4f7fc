use serde::{Deserialize, Serialize};

use crate::display::ParameterDisplay;
use crate::metadata::ParameterMetadata;
use crate::option::SelectOption;

/// Options specific to select parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOptions {
    /// Hide the field when only one option is available.
    #[serde(default)]
    pub no_data_expression: bool,
}

/// A single-choice dropdown parameter.
///
/// Option membership is not enforced during resolution: callers may pass
/// values the host produced dynamically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectParameter {
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    /// The available choices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_options: Option<SelectOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<ParameterDisplay>,
}

impl SelectParameter {
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ParameterMetadata::new(key, name),
            default: None,
            options: Vec::new(),
            select_options: None,
            display: None,
        }
    }

    #[must_use]
    pub fn with_option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<serde_json::Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Mark the selector as a fixed choice that never takes an expression.
    #[must_use]
    pub fn no_data_expression(mut self) -> Self {
        self.select_options = Some(SelectOptions {
            no_data_expression: true,
        });
        self
    }

    /// Find the option carrying `value`.
    #[must_use]
    pub fn option_for(&self, value: &serde_json::Value) -> Option<&SelectOption> {
        self.options.iter().find(|o| &o.value == value)
    }
}

super::metadata_builders!(SelectParameter);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn options_keep_insertion_order() {
        let p = SelectParameter::new("resource", "Resource")
            .with_option(SelectOption::keyed("candidate", "Candidate"))
            .with_option(SelectOption::keyed("person", "Person"))
            .with_default("person");

        let keys: Vec<&str> = p.options.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["candidate", "person"]);
        assert_eq!(p.default, Some(json!("person")));
        assert_eq!(p.option_for(&json!("person")).unwrap().name, "Person");
        assert!(p.option_for(&json!("task")).is_none());
    }
}
