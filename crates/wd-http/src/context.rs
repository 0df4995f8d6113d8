//! Native-response abstractions.
//!
//! The dispatcher never touches a framework response type directly; it
//! writes through [`ResponseContext`], which the surrounding runtime
//! implements over its native response object. [`WebResponseContext`] is
//! the built-in implementation: it buffers status, headers, and body in
//! memory and converts into an `axum` response once dispatch completes.

use std::io;

use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Sink for the side effects of action dispatch.
///
/// The two fallible operations report transport failures as [`io::Error`];
/// the adapter wraps them into
/// [`HttpError::Transport`](crate::error::HttpError::Transport). All
/// operations are synchronous and single-shot; timeouts and cancellation
/// belong to the surrounding request-handling framework.
pub trait ResponseContext {
    /// Sets the response status code.
    fn set_status(&mut self, code: u16);

    /// Signals an error status (`code >= 400`) on the response.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the transport fails.
    fn signal_error(&mut self, code: u16) -> io::Result<()>;

    /// Sets the response header `name` to `value`, replacing any previous
    /// value.
    fn set_header(&mut self, name: &str, value: &str);

    /// Writes `content` to the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the transport fails.
    fn write_body(&mut self, content: &str) -> io::Result<()>;
}

/// Buffered [`ResponseContext`] that assembles an `axum` response.
///
/// Status, headers, and body accumulate in memory; nothing touches a
/// socket, so the fallible sink operations never fail here. After dispatch
/// the context converts through [`IntoResponse`]: an unset or out-of-range
/// status falls back to 200, and headers that are not valid HTTP header
/// names or values are skipped.
#[derive(Debug, Default)]
pub struct WebResponseContext {
    status: Option<u16>,
    headers: Vec<(String, String)>,
    body: String,
}

impl WebResponseContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded status code, if one was set.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the recorded value of header `name`, if set.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the buffered body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl IntoResponse for WebResponseContext {
    fn into_response(self) -> Response {
        let status = self
            .status
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::OK);

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        for (name, value) in self.headers {
            let name = HeaderName::try_from(name.as_str());
            let value = HeaderValue::try_from(value.as_str());
            if let (Ok(name), Ok(value)) = (name, value) {
                response.headers_mut().insert(name, value);
            }
        }

        response
    }
}

impl ResponseContext for WebResponseContext {
    // The buffered operations cannot fail; the io::Result signatures exist
    // for contexts that write straight to a transport.
    fn set_status(&mut self, code: u16) {
        self.status = Some(code);
    }

    fn signal_error(&mut self, code: u16) -> io::Result<()> {
        // No error page here; rendering error bodies is the framework's job.
        self.status = Some(code);
        Ok(())
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(header, _)| header != name);
        self.headers.push((name.to_string(), value.to_string()));
    }

    fn write_body(&mut self, content: &str) -> io::Result<()> {
        self.body.push_str(content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_status_and_headers() {
        let mut context = WebResponseContext::new();
        context.set_status(302);
        context.set_header("Location", "https://idp.example.com/login");

        assert_eq!(context.status(), Some(302));
        assert_eq!(
            context.header("Location"),
            Some("https://idp.example.com/login")
        );
        assert_eq!(context.header("Content-Type"), None);
    }

    #[test]
    fn setting_a_header_twice_replaces_the_value() {
        let mut context = WebResponseContext::new();
        context.set_header("Location", "/first");
        context.set_header("Location", "/second");

        assert_eq!(context.header("Location"), Some("/second"));
    }

    #[test]
    fn body_writes_accumulate() {
        let mut context = WebResponseContext::new();
        context.write_body("hello ").unwrap();
        context.write_body("world").unwrap();

        assert_eq!(context.body(), "hello world");
    }

    #[test]
    fn signal_error_records_the_status() {
        let mut context = WebResponseContext::new();
        context.signal_error(401).unwrap();

        assert_eq!(context.status(), Some(401));
    }

    #[test]
    fn unset_status_falls_back_to_ok() {
        let response = WebResponseContext::new().into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn converts_into_axum_response() {
        let mut context = WebResponseContext::new();
        context.set_status(201);
        context.set_header("Location", "/resource/42");
        context.write_body("created").unwrap();

        let response = context.into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get("Location").unwrap(),
            &HeaderValue::from_static("/resource/42")
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"created");
    }

    #[test]
    fn invalid_header_names_are_skipped() {
        let mut context = WebResponseContext::new();
        context.set_header("bad header name", "value");

        let response = context.into_response();
        assert!(response.headers().is_empty());
    }
}
