use serde::{Deserialize, Serialize};

use crate::display::ParameterDisplay;
use crate::metadata::ParameterMetadata;

/// A masked text input for sensitive values like access tokens.
///
/// Always sets `metadata.sensitive = true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretParameter {
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<ParameterDisplay>,
}

impl SecretParameter {
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        let mut metadata = ParameterMetadata::new(key, name);
        metadata.sensitive = true;
        Self {
            metadata,
            display: None,
        }
    }
}

super::metadata_builders!(SecretParameter);
