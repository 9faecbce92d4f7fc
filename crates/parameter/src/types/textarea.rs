use serde::{Deserialize, Serialize};

use crate::display::ParameterDisplay;
use crate::metadata::ParameterMetadata;

/// Options specific to textarea parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextareaOptions {
    /// Number of visible text rows in the UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

/// A multi-line text input parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextareaParameter {
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<TextareaOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<ParameterDisplay>,
}

impl TextareaParameter {
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
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.options = Some(TextareaOptions { rows: Some(rows) });
        self
    }
}

super::metadata_builders!(TextareaParameter);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_serialize_under_options() {
        let p = TextareaParameter::new("body", "Body").with_rows(4);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["options"]["rows"], 4);
        assert_eq!(json["key"], "body");
    }
}
