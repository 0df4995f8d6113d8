//! Error handling for action dispatch.
//!
//! ## NIST 800-53 Rev5: SI-11 (Error Handling)
//!
//! Dispatch failures are fatal to the current dispatch and surface to the
//! caller; nothing is logged-and-swallowed at this layer.

use thiserror::Error;

/// Result type alias using the dispatch error type.
pub type Result<T> = std::result::Result<T, HttpError>;

/// Errors raised while translating an action into a response.
#[derive(Debug, Error)]
pub enum HttpError {
    /// No action was provided to the adapter.
    ///
    /// An integration error: flow logic must always produce an action
    /// before dispatching.
    #[error("no action provided")]
    MissingAction,

    /// The underlying transport failed while writing the response.
    ///
    /// Not retryable at this layer; a partially written HTTP response
    /// cannot be rolled back.
    #[error("transport failure: {0}")]
    Transport(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_action_message() {
        let error = HttpError::MissingAction;
        assert_eq!(error.to_string(), "no action provided");
    }

    #[test]
    fn transport_wraps_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "peer went away");
        let error = HttpError::from(io_error);

        assert!(matches!(error, HttpError::Transport(_)));
        assert_eq!(error.to_string(), "transport failure: peer went away");
    }
}
