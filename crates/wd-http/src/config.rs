//! Dispatch configuration.
//!
//! The configuration seam the middleware reads at resolution time: an
//! optional globally configured adapter consulted by
//! [`find_best_adapter`](crate::adapter::find_best_adapter) between the
//! per-call override and the built-in default.

use std::sync::Arc;

use crate::adapter::ActionAdapter;

/// Dispatch configuration.
///
/// Holds the optionally configured global [`ActionAdapter`]. Built once at
/// startup and shared by reference; resolution reads it fresh on every
/// call.
#[derive(Debug, Clone, Default)]
pub struct Config {
    action_adapter: Option<Arc<dyn ActionAdapter>>,
}

impl Config {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the globally configured adapter.
    #[must_use]
    pub fn with_action_adapter(mut self, adapter: Arc<dyn ActionAdapter>) -> Self {
        self.action_adapter = Some(adapter);
        self
    }

    /// Returns the globally configured adapter, if any.
    #[must_use]
    pub fn action_adapter(&self) -> Option<&dyn ActionAdapter> {
        self.action_adapter.as_deref()
    }
}
