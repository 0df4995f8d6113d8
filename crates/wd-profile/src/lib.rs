//! # wd-profile
//!
//! User-profile attribute materialization for Warden.
//!
//! Identity providers hand back claim sets whose values nest arbitrarily.
//! This crate normalizes such data into a flat, queryable [`Profile`]:
//!
//! - [`attribute`] - attribute locations and the [`AttributeSink`] base
//!   write
//! - [`profile`] - the flat profile store
//! - [`materializer`] - recursive flattening with an optional
//!   retain-nested policy
//! - [`error`] - error types

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod attribute;
pub mod error;
pub mod materializer;
pub mod profile;

pub use attribute::{AttributeLocation, AttributeSink};
pub use error::{ProfileError, Result};
pub use materializer::{AttributeMaterializer, MAX_NESTING_DEPTH};
pub use profile::Profile;
