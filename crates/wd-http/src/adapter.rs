//! Action adapters and adapter resolution.
//!
//! An adapter is the strategy that turns an [`HttpAction`] into side
//! effects on a native response. Most deployments use
//! [`DefaultActionAdapter`]; integrations can override it per call site or
//! globally through [`Config`].

use std::fmt::Debug;

use crate::action::{ActionPayload, HttpAction};
use crate::config::Config;
use crate::context::ResponseContext;
use crate::error::{HttpError, Result};

/// Name of the redirect target header.
pub const LOCATION_HEADER: &str = "Location";

/// Strategy for translating an [`HttpAction`] into a concrete response.
///
/// Implementations must be stateless and idempotent: adapting the same
/// action twice produces the same side effects, and a single instance is
/// safely shared across threads.
pub trait ActionAdapter: Send + Sync + Debug {
    /// Applies `action` to `context`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::MissingAction`] when `action` is `None`, and
    /// [`HttpError::Transport`] when the underlying response sink fails.
    fn adapt(&self, action: Option<&HttpAction>, context: &mut dyn ResponseContext)
        -> Result<()>;
}

/// The built-in adapter.
///
/// Applies the action's status code (a plain status below 400, the
/// error-signaling path at 400 and above), then its payload: a `Location`
/// header for redirect-class actions, a body write for content-bearing
/// ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultActionAdapter;

/// Shared instance used as the resolution fallback.
static INSTANCE: DefaultActionAdapter = DefaultActionAdapter;

impl ActionAdapter for DefaultActionAdapter {
    fn adapt(
        &self,
        action: Option<&HttpAction>,
        context: &mut dyn ResponseContext,
    ) -> Result<()> {
        let action = action.ok_or(HttpError::MissingAction)?;

        tracing::debug!(code = action.code(), "adapting http action");

        if action.is_error() {
            context.signal_error(action.code())?;
        } else {
            context.set_status(action.code());
        }

        // Location before Content; the variants are mutually exclusive.
        match action.payload() {
            ActionPayload::Location(uri) => {
                context.set_header(LOCATION_HEADER, uri);
            }
            ActionPayload::Content(Some(body)) => {
                context.write_body(body)?;
            }
            ActionPayload::Content(None) | ActionPayload::None => {}
        }

        Ok(())
    }
}

/// Returns the most appropriate adapter: the local one if defined, else the
/// configured one if defined, else the built-in default.
///
/// Pure and evaluated fresh on every call; nothing is cached, so the result
/// depends only on which references are set at call time.
#[must_use]
pub fn find_best_adapter<'a>(
    local: Option<&'a dyn ActionAdapter>,
    config: &'a Config,
) -> &'a dyn ActionAdapter {
    local.or_else(|| config.action_adapter()).unwrap_or(&INSTANCE)
}
