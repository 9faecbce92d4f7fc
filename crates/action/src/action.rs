use crate::metadata::ActionMetadata;

/// Base trait for all actions.
///
/// Provides identity and the parameter schema. How an action talks to the
/// outside world is defined by sub-traits in the integration crates.
///
/// # Object Safety
///
/// This trait is object-safe; registries store actions as `Arc<dyn _>`.
pub trait Action: Send + Sync + 'static {
    /// Static metadata describing this action.
    fn metadata(&self) -> &ActionMetadata;
}
