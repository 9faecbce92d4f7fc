//! Credential provider port.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;

use crate::data::CredentialData;
use crate::error::CredentialError;

/// Port trait for providing credential records to nodes.
///
/// Implemented by the host to resolve the record bound to a credential
/// type key without coupling nodes to the storage backend.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Retrieve the record stored for `key`.
    async fn get(&self, key: &str) -> Result<CredentialData, CredentialError>;
}

/// In-memory provider backed by a fixed map of records.
#[derive(Default, Clone)]
pub struct StaticCredentialProvider {
    records: HashMap<String, CredentialData>,
}

impl StaticCredentialProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record under a credential type key (builder-style).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, data: CredentialData) -> Self {
        self.records.insert(key.into(), data);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn get(&self, key: &str) -> Result<CredentialData, CredentialError> {
        self.records
            .get(key)
            .cloned()
            .ok_or_else(|| CredentialError::NotFound {
                key: key.to_owned(),
            })
    }
}

impl fmt::Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.records.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("StaticCredentialProvider")
            .field("keys", &keys)
            .finish()
    }
}
