//! The HTTP action model.
//!
//! An action is the abstract result of an authentication step: a status
//! code plus at most one payload (a redirect target or a response body).
//! Flow logic constructs actions; an [`ActionAdapter`](crate::ActionAdapter)
//! turns them into side effects on a native response.

use serde::{Deserialize, Serialize};

/// Status codes at or above this value are error responses.
const ERROR_THRESHOLD: u16 = 400;

/// Payload carried by an [`HttpAction`].
///
/// The variants are mutually exclusive by construction: an action carries a
/// redirect target, a body, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPayload {
    /// No payload; the action is status-only.
    None,
    /// A redirect target URI, passed through verbatim.
    Location(String),
    /// A response body; `None` means the body was intentionally omitted.
    Content(Option<String>),
}

/// Abstract result of an authentication step.
///
/// The status code is fixed at construction. Codes below 400 are
/// success/neutral (including 3xx redirects); codes at or above 400 are
/// errors and go through the error-signaling path at dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpAction {
    code: u16,
    payload: ActionPayload,
}

impl HttpAction {
    /// Creates an action from a code and an explicit payload.
    #[must_use]
    pub const fn new(code: u16, payload: ActionPayload) -> Self {
        Self { code, payload }
    }

    /// Creates a status-only action.
    #[must_use]
    pub const fn status(code: u16) -> Self {
        Self::new(code, ActionPayload::None)
    }

    /// Creates an action carrying a response body.
    #[must_use]
    pub fn with_content(code: u16, content: impl Into<String>) -> Self {
        Self::new(code, ActionPayload::Content(Some(content.into())))
    }

    /// Creates a 200 OK action.
    #[must_use]
    pub const fn ok() -> Self {
        Self::status(200)
    }

    /// Creates a 204 No Content action.
    #[must_use]
    pub const fn no_content() -> Self {
        Self::status(204)
    }

    /// Creates a 302 Found redirect to `location`.
    #[must_use]
    pub fn found(location: impl Into<String>) -> Self {
        Self::new(302, ActionPayload::Location(location.into()))
    }

    /// Creates a 303 See Other redirect to `location`.
    #[must_use]
    pub fn see_other(location: impl Into<String>) -> Self {
        Self::new(303, ActionPayload::Location(location.into()))
    }

    /// Creates a 307 Temporary Redirect to `location`.
    #[must_use]
    pub fn temporary_redirect(location: impl Into<String>) -> Self {
        Self::new(307, ActionPayload::Location(location.into()))
    }

    /// Creates a 400 Bad Request action.
    #[must_use]
    pub const fn bad_request() -> Self {
        Self::status(400)
    }

    /// Creates a 401 Unauthorized action.
    #[must_use]
    pub const fn unauthorized() -> Self {
        Self::status(401)
    }

    /// Creates a 403 Forbidden action.
    #[must_use]
    pub const fn forbidden() -> Self {
        Self::status(403)
    }

    /// Creates a 500 Internal Server Error action.
    #[must_use]
    pub const fn internal_error() -> Self {
        Self::status(500)
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Returns the payload.
    #[must_use]
    pub const fn payload(&self) -> &ActionPayload {
        &self.payload
    }

    /// Returns the redirect target, if this is a redirect-class action.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match &self.payload {
            ActionPayload::Location(uri) => Some(uri),
            ActionPayload::Content(_) | ActionPayload::None => None,
        }
    }

    /// Returns the response body, if one is present.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match &self.payload {
            ActionPayload::Content(Some(body)) => Some(body),
            ActionPayload::Content(None) | ActionPayload::Location(_) | ActionPayload::None => {
                None
            }
        }
    }

    /// Returns whether this action represents an error response.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.code >= ERROR_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_action_has_no_payload() {
        let action = HttpAction::status(204);

        assert_eq!(action.code(), 204);
        assert_eq!(action.payload(), &ActionPayload::None);
        assert!(action.location().is_none());
        assert!(action.content().is_none());
    }

    #[test]
    fn redirect_constructors_carry_location() {
        let found = HttpAction::found("https://idp.example.com/login");
        assert_eq!(found.code(), 302);
        assert_eq!(found.location(), Some("https://idp.example.com/login"));

        assert_eq!(HttpAction::see_other("/done").code(), 303);
        assert_eq!(HttpAction::temporary_redirect("/retry").code(), 307);
    }

    #[test]
    fn content_action_carries_body() {
        let action = HttpAction::with_content(200, "{\"ok\":true}");

        assert_eq!(action.code(), 200);
        assert_eq!(action.content(), Some("{\"ok\":true}"));
        assert!(action.location().is_none());
    }

    #[test]
    fn omitted_content_is_distinct_from_no_payload() {
        let omitted = HttpAction::new(200, ActionPayload::Content(None));

        assert_eq!(omitted.payload(), &ActionPayload::Content(None));
        assert!(omitted.content().is_none());
        assert_ne!(omitted, HttpAction::ok());
    }

    #[test]
    fn error_threshold_is_400() {
        assert!(!HttpAction::status(399).is_error());
        assert!(HttpAction::bad_request().is_error());
        assert!(HttpAction::unauthorized().is_error());
        assert!(HttpAction::forbidden().is_error());
        assert!(HttpAction::internal_error().is_error());
        assert!(!HttpAction::found("/").is_error());
    }
}
