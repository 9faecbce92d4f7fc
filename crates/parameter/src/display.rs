use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Test applied to one field's resolved value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "condition", rename_all = "snake_case")]
pub enum DisplayCondition {
    Equals { value: Value },
    NotEquals { value: Value },
    OneOf { values: Vec<Value> },
    IsTrue,
    IsFalse,
    /// The field resolved to anything but null.
    IsSet,
    /// Null, a blank string, or an empty array.
    IsEmpty,
    IsNotEmpty,
}

impl DisplayCondition {
    #[must_use]
    pub fn evaluate(&self, value: &Value) -> bool {
        match self {
            Self::Equals { value: expected } => value == expected,
            Self::NotEquals { value: expected } => value != expected,
            Self::OneOf { values } => values.contains(value),
            Self::IsTrue => value.as_bool() == Some(true),
            Self::IsFalse => value.as_bool() == Some(false),
            Self::IsSet => !value.is_null(),
            Self::IsEmpty => is_empty(value),
            Self::IsNotEmpty => !is_empty(value),
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Values resolved so far, keyed by parameter key.
///
/// Rules only see fields that come earlier in the collection; a field not
/// yet resolved reads as null.
#[derive(Debug, Clone, Default)]
pub struct DisplayContext {
    values: HashMap<String, Value>,
}

impl DisplayContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }
}

/// `field` checked against `condition`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRule {
    pub field: String,
    pub condition: DisplayCondition,
}

impl DisplayRule {
    #[must_use]
    pub fn evaluate(&self, context: &DisplayContext) -> bool {
        self.condition
            .evaluate(context.get(&self.field).unwrap_or(&Value::Null))
    }
}

/// A rule tree. Operation fields are typically scoped with
/// `All[resource == r, operation == o]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "logic", rename_all = "snake_case")]
pub enum DisplayRuleSet {
    Single(DisplayRule),
    All { rules: Vec<DisplayRuleSet> },
    Any { rules: Vec<DisplayRuleSet> },
    Not { rule: Box<DisplayRuleSet> },
}

impl DisplayRuleSet {
    #[must_use]
    pub fn when(field: impl Into<String>, condition: DisplayCondition) -> Self {
        Self::Single(DisplayRule {
            field: field.into(),
            condition,
        })
    }

    /// `field == value`
    #[must_use]
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::when(field, DisplayCondition::Equals { value: value.into() })
    }

    /// `field` is any of `values`
    #[must_use]
    pub fn one_of<V: Into<Value>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        Self::when(field, DisplayCondition::OneOf { values })
    }

    #[must_use]
    pub fn evaluate(&self, context: &DisplayContext) -> bool {
        match self {
            Self::Single(rule) => rule.evaluate(context),
            Self::All { rules } => rules.iter().all(|r| r.evaluate(context)),
            Self::Any { rules } => rules.iter().any(|r| r.evaluate(context)),
            Self::Not { rule } => !rule.evaluate(context),
        }
    }
}

/// When a parameter is shown.
///
/// A hidden parameter is skipped during resolution: no default, no
/// required check, no value in the output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterDisplay {
    /// Shown if any of these match. Empty means always shown.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub show_when: Vec<DisplayRuleSet>,

    /// Hidden if any of these match. Checked first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hide_when: Vec<DisplayRuleSet>,
}

impl ParameterDisplay {
    #[must_use]
    pub fn should_display(&self, context: &DisplayContext) -> bool {
        !self.hide_when.iter().any(|r| r.evaluate(context))
            && (self.show_when.is_empty() || self.show_when.iter().any(|r| r.evaluate(context)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.show_when.is_empty() && self.hide_when.is_empty()
    }
}
