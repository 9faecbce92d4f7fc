use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::action::Action;
use crate::metadata::ActionMetadata;

/// Keyed registry for discovering and retrieving actions.
///
/// Nodes populate this at construction and use it to resolve the dispatch
/// key read from each input item to a concrete implementation. A miss is
/// an explicit `None`, never a panic.
///
/// Actions are stored as `Arc<A>` so `A` can be a trait object
/// (`dyn SomeAction`) shared across runs.
///
/// ```rust
/// use std::sync::Arc;
/// use starhunter_action::{Action, ActionMetadata, ActionRegistry};
///
/// struct NoOp(ActionMetadata);
/// impl Action for NoOp {
///     fn metadata(&self) -> &ActionMetadata { &self.0 }
/// }
///
/// let mut registry: ActionRegistry<&str> = ActionRegistry::new();
/// registry.register("noop", Arc::new(NoOp(ActionMetadata::new("noop", "No-Op", "Does nothing"))));
///
/// assert!(registry.get(&"noop").is_some());
/// assert!(registry.get(&"unknown").is_none());
/// assert_eq!(registry.len(), 1);
/// ```
pub struct ActionRegistry<K, A: ?Sized = dyn Action> {
    actions: HashMap<K, Arc<A>>,
}

impl<K, A: ?Sized> Default for ActionRegistry<K, A> {
    fn default() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }
}

impl<K, A> ActionRegistry<K, A>
where
    K: Eq + Hash,
    A: Action + ?Sized,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action. Returns the action previously stored under `key`.
    pub fn register(&mut self, key: K, action: Arc<A>) -> Option<Arc<A>> {
        self.actions.insert(key, action)
    }

    /// Register an action (builder-style).
    pub fn with(mut self, key: K, action: Arc<A>) -> Self {
        self.actions.insert(key, action);
        self
    }

    /// Look up an action by its key.
    pub fn get(&self, key: &K) -> Option<&Arc<A>> {
        self.actions.get(key)
    }

    /// Check whether an action with the given key is registered.
    pub fn contains(&self, key: &K) -> bool {
        self.actions.contains_key(key)
    }

    /// Return metadata for all registered actions.
    pub fn list(&self) -> Vec<&ActionMetadata> {
        self.actions.values().map(|a| a.metadata()).collect()
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate over all registered `(key, action)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Arc<A>)> {
        self.actions.iter()
    }
}

impl<K: fmt::Debug, A: ?Sized> fmt::Debug for ActionRegistry<K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("count", &self.actions.len())
            .field("keys", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}
