use serde::{Deserialize, Serialize};

use crate::def::ParameterDef;
use crate::display::DisplayContext;
use crate::error::ParameterError;
use crate::values::{ParameterValues, is_blank};

/// An ordered collection of parameter definitions.
///
/// Order matters: display rules are evaluated against the values of the
/// parameters that precede them, so selectors (`resource`, `operation`)
/// must come before the fields they gate. Several definitions may share a
/// key as long as at most one of them is visible for any input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterCollection {
    parameters: Vec<ParameterDef>,
}

impl ParameterCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter definition to the collection.
    pub fn add(&mut self, param: impl Into<ParameterDef>) -> &mut Self {
        self.parameters.push(param.into());
        self
    }

    /// Add a parameter definition (builder-style, consuming).
    #[must_use]
    pub fn with(mut self, param: impl Into<ParameterDef>) -> Self {
        self.parameters.push(param.into());
        self
    }

    /// Append every definition of `other`.
    pub fn extend(&mut self, other: Self) {
        self.parameters.extend(other.parameters);
    }

    /// Get the first parameter with the given key.
    #[must_use]
    pub fn get_by_key(&self, key: &str) -> Option<&ParameterDef> {
        self.parameters.iter().find(|p| p.key() == key)
    }

    /// Check whether a parameter with the given key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.parameters.iter().any(|p| p.key() == key)
    }

    /// Iterate over all parameter keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(ParameterDef::key)
    }

    /// The number of parameters in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Iterate over all parameter definitions.
    pub fn iter(&self) -> impl Iterator<Item = &ParameterDef> {
        self.parameters.iter()
    }

    /// Resolve raw caller input into the values an action reads.
    ///
    /// Definitions are walked in order. Hidden ones are skipped; visible
    /// ones take the supplied value or fall back to their default. A
    /// required parameter left blank fails with
    /// [`ParameterError::MissingValue`]. Keys that no visible definition
    /// claims are dropped.
    pub fn resolve(&self, supplied: &ParameterValues) -> Result<ParameterValues, ParameterError> {
        let mut resolved = ParameterValues::new();
        let mut context = DisplayContext::new();

        for def in &self.parameters {
            let key = def.key();
            if resolved.contains(key) || !def.is_visible(&context) {
                continue;
            }

            let value = supplied
                .get(key)
                .filter(|v| !v.is_null())
                .cloned()
                .or_else(|| def.default_value());

            match value {
                Some(value) if !(def.is_required() && is_blank(&value)) => {
                    def.check(&value)?;
                    context.insert(key, value.clone());
                    resolved.set(key, value);
                }
                _ if def.is_required() => {
                    return Err(ParameterError::MissingValue {
                        key: key.to_owned(),
                    });
                }
                _ => {}
            }
        }

        Ok(resolved)
    }
}

impl<'a> IntoIterator for &'a ParameterCollection {
    type Item = &'a ParameterDef;
    type IntoIter = std::slice::Iter<'a, ParameterDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

impl FromIterator<ParameterDef> for ParameterCollection {
    fn from_iter<I: IntoIterator<Item = ParameterDef>>(iter: I) -> Self {
        Self {
            parameters: iter.into_iter().collect(),
        }
    }
}
