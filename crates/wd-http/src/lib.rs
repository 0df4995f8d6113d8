//! # wd-http
//!
//! HTTP action dispatch for Warden.
//!
//! Authentication flows produce an abstract [`HttpAction`] — "redirect
//! there", "401", "200 with this body" — that the surrounding web runtime
//! must turn into a concrete response. This crate owns that translation:
//!
//! - [`action`] - the action model (status code plus an optional payload)
//! - [`adapter`] - the [`ActionAdapter`] strategy, the built-in dispatch,
//!   and adapter resolution
//! - [`config`] - the seam for a globally configured adapter
//! - [`context`] - the native-response abstraction and a buffered
//!   implementation convertible into an `axum` response
//! - [`error`] - error types
//!
//! ## NIST 800-53 Rev5 Controls
//!
//! - SI-11: Transport failures propagate to the caller, never swallowed

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod action;
pub mod adapter;
pub mod config;
pub mod context;
pub mod error;

pub use action::{ActionPayload, HttpAction};
pub use adapter::{find_best_adapter, ActionAdapter, DefaultActionAdapter, LOCATION_HEADER};
pub use config::Config;
pub use context::{ResponseContext, WebResponseContext};
pub use error::{HttpError, Result};
