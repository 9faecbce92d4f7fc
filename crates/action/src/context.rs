use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use starhunter_credential::CredentialProvider;
use starhunter_parameter::error::ParameterError;
use starhunter_parameter::values::ParameterValues;
use starhunter_request::HttpClient;

use crate::clock::{Clock, SystemClock};
use crate::error::ActionError;

/// What a node does when an item selects a resource/operation pair that
/// has no registered action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownActionPolicy {
    /// Emit nothing for the item and log a warning.
    #[default]
    Skip,
    /// Fail the item with [`ActionError::UnknownAction`].
    Fail,
}

/// Host seams shared by every item of one node run.
///
/// Constructed by the host before the run. Cloning is cheap; every seam is
/// behind an `Arc`.
#[derive(Clone)]
#[non_exhaustive]
pub struct ExecutionContext {
    /// Resolves credential records by type key.
    pub credentials: Arc<dyn CredentialProvider>,
    /// Sends the authenticated requests.
    pub http: Arc<dyn HttpClient>,
    /// Source of "now" for date-deriving actions.
    pub clock: Arc<dyn Clock>,
    /// Record per-item failures as output instead of aborting the run.
    pub continue_on_fail: bool,
    /// Handling of unregistered resource/operation pairs.
    pub unknown_action: UnknownActionPolicy,
}

impl ExecutionContext {
    /// Create a context using the system clock, failing fast on errors.
    pub fn new(credentials: Arc<dyn CredentialProvider>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            credentials,
            http,
            clock: Arc::new(SystemClock),
            continue_on_fail: false,
            unknown_action: UnknownActionPolicy::default(),
        }
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Set continue-on-failure.
    pub fn with_continue_on_fail(mut self, enabled: bool) -> Self {
        self.continue_on_fail = enabled;
        self
    }

    /// Set the unknown-action policy.
    pub fn with_unknown_action(mut self, policy: UnknownActionPolicy) -> Self {
        self.unknown_action = policy;
        self
    }

    /// Build the per-item context handed to an action.
    pub fn item(&self, item_index: usize, parameters: ParameterValues) -> ActionContext {
        ActionContext {
            item_index,
            parameters,
            clock: Arc::clone(&self.clock),
        }
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("clock", &self.clock)
            .field("continue_on_fail", &self.continue_on_fail)
            .field("unknown_action", &self.unknown_action)
            .finish()
    }
}

/// Everything an action may read while handling one input item.
///
/// Parameters have already been resolved: defaults applied, hidden fields
/// dropped and required fields checked. Blank optional strings are still
/// present; [`optional_str`](Self::optional_str) filters them out.
#[derive(Clone)]
pub struct ActionContext {
    /// Zero-based index of the input item.
    pub item_index: usize,
    parameters: ParameterValues,
    clock: Arc<dyn Clock>,
}

impl ActionContext {
    /// Create a context directly, mainly for tests and embedders.
    pub fn new(item_index: usize, parameters: ParameterValues, clock: Arc<dyn Clock>) -> Self {
        Self {
            item_index,
            parameters,
            clock,
        }
    }

    /// The resolved parameter values.
    pub fn parameters(&self) -> &ParameterValues {
        &self.parameters
    }

    /// A string parameter that must be present and non-blank.
    pub fn required_str(&self, key: &str) -> Result<&str, ActionError> {
        self.parameters.get_non_blank(key).ok_or_else(|| {
            ParameterError::MissingValue {
                key: key.to_owned(),
            }
            .into()
        })
    }

    /// A string parameter, or `None` when absent or blank.
    pub fn optional_str(&self, key: &str) -> Option<&str> {
        self.parameters.get_non_blank(key)
    }

    /// An integer parameter with a fallback.
    pub fn i64_or(&self, key: &str, default: i64) -> i64 {
        self.parameters.get_i64(key).unwrap_or(default)
    }

    /// A boolean parameter with a fallback.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.parameters.get_bool(key).unwrap_or(default)
    }

    /// The current instant.
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }

    /// The current local date.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

impl fmt::Debug for ActionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionContext")
            .field("item_index", &self.item_index)
            .field("parameters", &self.parameters.keys().collect::<Vec<_>>())
            .finish()
    }
}
