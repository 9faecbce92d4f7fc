use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Whether a value counts as "not supplied": null or a whitespace-only string.
#[must_use]
pub fn is_blank(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// A set of parameter values, keyed by parameter key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterValues {
    #[serde(flatten)]
    values: HashMap<String, serde_json::Value>,
}

impl ParameterValues {
    /// Create an empty value set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value (builder-style, consuming).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Get a value by parameter key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// Set a value for a parameter key.
    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.values.insert(key.into(), value);
    }

    /// Remove a value by key, returning it if it existed.
    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.values.remove(key)
    }

    /// Check whether a value exists for the given key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over all keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The number of values stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Try to get a value as a string reference.
    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.values.get(key)?.as_str()
    }

    /// Get a string value, treating blank strings as absent.
    #[must_use]
    pub fn get_non_blank(&self, key: &str) -> Option<&str> {
        self.get_string(key).filter(|s| !s.trim().is_empty())
    }

    /// Try to get a value as f64.
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.values.get(key)?.as_f64()
    }

    /// Try to get a value as an integer.
    ///
    /// Floats with no fractional part (`50.0`) are accepted, since numeric
    /// defaults are stored as `f64`.
    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        let value = self.values.get(key)?;
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        })
    }

    /// Try to get a value as bool.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key)?.as_bool()
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut values = self.values.clone();
        values.extend(other.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { values }
    }

    /// Iterate over all key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for ParameterValues {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            values: map.into_iter().collect(),
        }
    }
}

impl FromIterator<(String, serde_json::Value)> for ParameterValues {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn typed_getters() {
        let values = ParameterValues::new()
            .with("name", "Ada")
            .with("limit", 50)
            .with("useToday", true);

        assert_eq!(values.get_string("name"), Some("Ada"));
        assert_eq!(values.get_i64("limit"), Some(50));
        assert_eq!(values.get_f64("limit"), Some(50.0));
        assert_eq!(values.get_bool("useToday"), Some(true));
        assert_eq!(values.get_bool("name"), None);
        assert_eq!(values.get_string("missing"), None);
    }

    #[test]
    fn integral_float_reads_as_integer() {
        let values = ParameterValues::new().with("limit", 50.0).with("ratio", 0.5);
        assert_eq!(values.get_i64("limit"), Some(50));
        assert_eq!(values.get_i64("ratio"), None);
    }

    #[test]
    fn non_blank_filters_whitespace() {
        let values = ParameterValues::new()
            .with("candidateId", "")
            .with("name", "   ")
            .with("status", "open");
        assert_eq!(values.get_non_blank("candidateId"), None);
        assert_eq!(values.get_non_blank("name"), None);
        assert_eq!(values.get_non_blank("status"), Some("open"));
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!("")));
        assert!(is_blank(&json!(" \t")));
        assert!(!is_blank(&json!("x")));
        assert!(!is_blank(&json!(0)));
        assert!(!is_blank(&json!(false)));
    }

    #[test]
    fn merged_prefers_overlay() {
        let base = ParameterValues::new().with("resource", "person").with("limit", 10);
        let overlay = ParameterValues::new().with("limit", 20);
        let merged = base.merged(&overlay);
        assert_eq!(merged.get_string("resource"), Some("person"));
        assert_eq!(merged.get_i64("limit"), Some(20));
    }

    #[test]
    fn deserializes_from_flat_object() {
        let values: ParameterValues =
            serde_json::from_value(json!({ "resource": "task", "title": "Call back" })).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values.get_string("title"), Some("Call back"));
    }
}
