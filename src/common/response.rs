use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::borrow::Cow;

/// Plain-text result returned by controller handlers
///
/// A `Reply` is immutable once built: the status and body are fixed at
/// construction time and handed to the dispatcher as-is.
///
/// # Example
/// ```
/// use trellis::common::Reply;
///
/// async fn root() -> Reply {
///     Reply::ok("I am the Home, hello world!")
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    status: StatusCode,
    body: Cow<'static, str>,
}

impl Reply {
    /// Create a successful reply carrying `body`
    ///
    /// Defaults to HTTP 200 OK.
    pub fn ok(body: impl Into<Cow<'static, str>>) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    /// Create a reply with an explicit status code
    pub fn with_status(status: StatusCode, body: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 404 reply used by the dispatcher for unmatched paths
    pub fn not_found(path: &str) -> Self {
        Self::with_status(StatusCode::NOT_FOUND, format!("No route matches {}", path))
    }

    pub fn internal_error(message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.body.into_owned(),
        )
            .into_response()
    }
}
