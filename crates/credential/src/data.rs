use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CredentialError;
use crate::secret::SecretString;

/// A resolved credential record.
///
/// Plain fields (URLs, account names) and secrets are kept apart so the
/// record can be logged or serialized without leaking the secrets, which
/// always render as `[REDACTED]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialData {
    #[serde(default)]
    fields: BTreeMap<String, String>,
    #[serde(default)]
    secrets: BTreeMap<String, SecretString>,
}

impl CredentialData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a plain field (builder-style).
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set a secret field (builder-style).
    #[must_use]
    pub fn with_secret(mut self, key: impl Into<String>, value: impl Into<SecretString>) -> Self {
        self.secrets.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn secret(&self, key: &str) -> Option<&SecretString> {
        self.secrets.get(key)
    }

    /// A plain field that must be present and non-blank.
    pub fn require_field(&self, key: &str) -> Result<&str, CredentialError> {
        self.field(key)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| CredentialError::missing_field(key))
    }

    /// A secret that must be present and non-empty.
    pub fn require_secret(&self, key: &str) -> Result<&SecretString, CredentialError> {
        self.secret(key)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CredentialError::missing_field(key))
    }
}
