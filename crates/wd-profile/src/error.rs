//! Error handling for profile materialization.

use thiserror::Error;

/// Result type alias using the profile error type.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Errors raised while materializing attributes.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The raw attribute tree nests deeper than the recursion ceiling.
    ///
    /// Well-formed provider data never comes close; hitting this means the
    /// input is pathological and processing is refused outright.
    #[error("attribute structure nests deeper than {limit} levels")]
    NestingTooDeep {
        /// The recursion ceiling that was exceeded.
        limit: usize,
    },
}
