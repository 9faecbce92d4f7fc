//! Declarative parameter schemas for Starhunter actions.
//!
//! A [`ParameterCollection`](collection::ParameterCollection) describes the
//! fields a caller fills in, how they are rendered, and when they are
//! visible. The same collection resolves raw caller input into a validated
//! [`ParameterValues`](values::ParameterValues) set, applying defaults and
//! required-field checks for the parameters that are visible.

pub mod collection;
pub mod def;
pub mod display;
pub mod error;
pub mod kind;
pub mod metadata;
pub mod option;
pub mod types;
pub mod values;

pub mod prelude {
    pub use crate::collection::ParameterCollection;
    pub use crate::def::ParameterDef;
    pub use crate::display::{
        DisplayCondition, DisplayContext, DisplayRule, DisplayRuleSet, ParameterDisplay,
    };
    pub use crate::error::ParameterError;
    pub use crate::kind::ParameterKind;
    pub use crate::metadata::ParameterMetadata;
    pub use crate::option::SelectOption;
    pub use crate::values::ParameterValues;

    pub use crate::types::*;
}
