//! # Starhunter Action
//!
//! The contract every Starhunter action implements, and the runtime
//! pieces a node needs to drive it:
//!
//! - [`Action`]: identity and parameter schema
//! - [`ActionContext`]: resolved parameters and the clock for one input item
//! - [`ExecutionContext`]: the host seams (credentials, HTTP, clock) for a run
//! - [`ActionOutput`] / [`ItemOutput`]: records tagged with their source item
//! - [`ActionRegistry`]: keyed lookup from a dispatch key to an action
//! - [`ActionError`]: everything that can fail an item

pub mod action;
pub mod clock;
pub mod context;
pub mod error;
pub mod metadata;
pub mod output;
pub mod registry;

pub use action::Action;
pub use clock::{Clock, FixedClock, SystemClock};
pub use context::{ActionContext, ExecutionContext, UnknownActionPolicy};
pub use error::ActionError;
pub use metadata::ActionMetadata;
pub use output::{ActionOutput, ItemOutput, PairedItem};
pub use registry::ActionRegistry;

pub mod prelude {
    pub use crate::{
        Action, ActionContext, ActionError, ActionMetadata, ActionOutput, ActionRegistry, Clock,
        ExecutionContext, ItemOutput,
    };
}
