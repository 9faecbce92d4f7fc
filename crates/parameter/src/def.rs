use serde::{Deserialize, Serialize};

use crate::display::{DisplayContext, DisplayRuleSet, ParameterDisplay};
use crate::error::ParameterError;
use crate::kind::ParameterKind;
use crate::metadata::ParameterMetadata;
use crate::types::*;

/// A concrete parameter definition, tagged by type.
///
/// Each variant wraps a specific parameter type struct. The `type` field
/// in JSON determines which variant is used during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterDef {
    Text(TextParameter),
    Textarea(TextareaParameter),
    Secret(SecretParameter),
    Number(NumberParameter),
    Checkbox(CheckboxParameter),
    Select(SelectParameter),
    DateTime(DateTimeParameter),
}

macro_rules! delegate {
    ($self:ident, $p:ident => $body:expr) => {
        match $self {
            Self::Text($p) => $body,
            Self::Textarea($p) => $body,
            Self::Secret($p) => $body,
            Self::Number($p) => $body,
            Self::Checkbox($p) => $body,
            Self::Select($p) => $body,
            Self::DateTime($p) => $body,
        }
    };
}

impl ParameterDef {
    /// The key identifying this parameter.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.metadata().key
    }

    /// The human-readable display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata().name
    }

    /// The parameter kind (determines UI widget and value semantics).
    #[must_use]
    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::Text(_) => ParameterKind::Text,
            Self::Textarea(_) => ParameterKind::Textarea,
            Self::Secret(_) => ParameterKind::Secret,
            Self::Number(_) => ParameterKind::Number,
            Self::Checkbox(_) => ParameterKind::Checkbox,
            Self::Select(_) => ParameterKind::Select,
            Self::DateTime(_) => ParameterKind::DateTime,
        }
    }

    /// Access the full metadata for this parameter.
    #[must_use]
    pub fn metadata(&self) -> &ParameterMetadata {
        delegate!(self, p => &p.metadata)
    }

    /// Whether this parameter is required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.metadata().required
    }

    /// Whether this parameter's value should be masked in UI and logs.
    #[must_use]
    pub fn is_sensitive(&self) -> bool {
        self.metadata().sensitive
    }

    /// Access the display configuration, if any.
    #[must_use]
    pub fn display(&self) -> Option<&ParameterDisplay> {
        delegate!(self, p => p.display.as_ref())
    }

    /// Restrict an already-built definition to contexts where `rule` matches,
    /// on top of any show rules it already carries.
    ///
    /// Nodes use this to scope an action's fields to the resource and
    /// operation that select it.
    #[must_use]
    pub fn scoped_to(mut self, rule: DisplayRuleSet) -> Self {
        let this = &mut self;
        let display = delegate!(this, p => &mut p.display).get_or_insert_with(Default::default);
        let existing = std::mem::take(&mut display.show_when);
        let scoped = match existing.len() {
            0 => rule,
            1 => DisplayRuleSet::All {
                rules: [vec![rule], existing].concat(),
            },
            _ => DisplayRuleSet::All {
                rules: vec![rule, DisplayRuleSet::Any { rules: existing }],
            },
        };
        display.show_when.push(scoped);
        self
    }

    /// Whether the parameter is visible given the values resolved so far.
    #[must_use]
    pub fn is_visible(&self, context: &DisplayContext) -> bool {
        self.display().is_none_or(|d| d.should_display(context))
    }

    /// The default value as JSON, if one is declared.
    #[must_use]
    pub fn default_value(&self) -> Option<serde_json::Value> {
        match self {
            Self::Text(p) => p.default.clone().map(Into::into),
            Self::Textarea(p) => p.default.clone().map(Into::into),
            Self::Secret(_) => None,
            Self::Number(p) => p.default.map(Into::into),
            Self::Checkbox(p) => p.default.map(Into::into),
            Self::Select(p) => p.default.clone(),
            Self::DateTime(p) => p.default.clone().map(Into::into),
        }
    }

    /// Check a supplied, non-null value against this definition's type and constraints.
    pub fn check(&self, value: &serde_json::Value) -> Result<(), ParameterError> {
        let kind = self.kind();
        if !kind.accepts(value) {
            return Err(ParameterError::invalid_type(
                self.key(),
                kind.expected_type(),
                value,
            ));
        }

        match self {
            Self::Number(p) => {
                let number = value.as_f64().unwrap_or_default();
                p.check_bounds(number)
                    .map_err(|reason| ParameterError::InvalidValue {
                        key: self.key().to_owned(),
                        reason,
                    })
            }
            Self::Text(p) => {
                let max = p.options.as_ref().and_then(|o| o.max_length);
                let len = value.as_str().map_or(0, |s| s.chars().count());
                match max {
                    Some(max) if len > max => Err(ParameterError::InvalidValue {
                        key: self.key().to_owned(),
                        reason: format!("longer than {max} characters"),
                    }),
                    _ => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for ParameterDef {
                fn from(p: $ty) -> Self {
                    Self::$variant(p)
                }
            }
        )*
    };
}

impl_from!(
    Text(TextParameter),
    Textarea(TextareaParameter),
    Secret(SecretParameter),
    Number(NumberParameter),
    Checkbox(CheckboxParameter),
    Select(SelectParameter),
    DateTime(DateTimeParameter),
);
