use serde::{Deserialize, Serialize};
use starhunter_parameter::collection::ParameterCollection;
use starhunter_parameter::values::ParameterValues;

use crate::data::CredentialData;
use crate::error::CredentialError;
use crate::secret::SecretString;

/// Declarative description of a credential type: its key and the form the
/// host renders to collect it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDescription {
    /// Type key nodes reference, e.g. `starhunterApi`.
    pub key: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    /// Form fields.
    pub properties: ParameterCollection,
}

impl CredentialDescription {
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            documentation_url: None,
            properties: ParameterCollection::new(),
        }
    }

    #[must_use]
    pub fn with_documentation_url(mut self, url: impl Into<String>) -> Self {
        self.documentation_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_properties(mut self, properties: ParameterCollection) -> Self {
        self.properties = properties;
        self
    }

    /// Build a record from raw form input.
    ///
    /// The input is resolved against [`properties`](Self::properties), so
    /// defaults apply and required fields are enforced. Sensitive fields
    /// land in the secret half of the record.
    pub fn parse(&self, input: &ParameterValues) -> Result<CredentialData, CredentialError> {
        let resolved = self.properties.resolve(input)?;
        let mut data = CredentialData::new();

        for def in &self.properties {
            let Some(value) = resolved.get(def.key()) else {
                continue;
            };
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            data = if def.is_sensitive() {
                data.with_secret(def.key(), SecretString::new(text))
            } else {
                data.with_field(def.key(), text)
            };
        }

        tracing::debug!(credential = %self.key, "parsed credential record");
        Ok(data)
    }
}
