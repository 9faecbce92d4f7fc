use serde::{Deserialize, Serialize};

use crate::display::ParameterDisplay;
use crate::metadata::ParameterMetadata;

/// Options specific to text parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOptions {
    /// Maximum allowed character count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// A single-line text input parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextParameter {
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<TextOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<ParameterDisplay>,
}

impl TextParameter {
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ParameterMetadata::new(key, name),
            default: None,
            options: None,
            display: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.options
            .get_or_insert_with(TextOptions::default)
            .max_length = Some(max_length);
        self
    }
}

super::metadata_builders!(TextParameter);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayRuleSet;

    #[test]
    fn new_creates_minimal_text() {
        let p = TextParameter::new("name", "Name");
        assert_eq!(p.metadata.key, "name");
        assert!(p.default.is_none());
        assert!(p.options.is_none());
        assert!(p.display.is_none());
    }

    #[test]
    fn builders_accumulate() {
        let p = TextParameter::new("personId", "Person ID")
            .required()
            .with_description("The ID of the person")
            .show_when(DisplayRuleSet::equals("resource", "person"))
            .show_when(DisplayRuleSet::equals("resource", "candidate"));

        assert!(p.metadata.required);
        assert_eq!(
            p.metadata.description.as_deref(),
            Some("The ID of the person")
        );
        assert_eq!(p.display.unwrap().show_when.len(), 2);
    }
}
