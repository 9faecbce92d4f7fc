use serde::{Deserialize, Serialize};

use crate::display::ParameterDisplay;
use crate::metadata::ParameterMetadata;

/// Options specific to number parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberOptions {
    /// Minimum allowed value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Maximum allowed value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Number of decimal places; `Some(0)` means integers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,
}

/// A numeric input parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberParameter {
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<NumberOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<ParameterDisplay>,
}

impl NumberParameter {
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
    pub fn with_default(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.options.get_or_insert_with(NumberOptions::default).min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.options.get_or_insert_with(NumberOptions::default).max = Some(max);
        self
    }

    /// Only accept whole numbers.
    #[must_use]
    pub fn integer(mut self) -> Self {
        self.options
            .get_or_insert_with(NumberOptions::default)
            .precision = Some(0);
        self
    }

    /// Check `value` against the configured bounds and precision.
    pub(crate) fn check_bounds(&self, value: f64) -> Result<(), String> {
        let Some(options) = &self.options else {
            return Ok(());
        };
        if options.precision == Some(0) && value.fract() != 0.0 {
            return Err(format!("{value} is not a whole number"));
        }
        if let Some(min) = options.min
            && value < min
        {
            return Err(format!("must be at least {min}"));
        }
        if let Some(max) = options.max
            && value > max
        {
            return Err(format!("must be at most {max}"));
        }
        Ok(())
    }
}

super::metadata_builders!(NumberParameter);
