use crate::common::Reply;
use crate::controller::{BoxedHandler, PathParams};
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path, Request};
use axum::http::Uri;
use axum::response::{IntoResponse, Response};

/// Extract path captures and invoke the bound handler
pub(crate) async fn dispatch(handler: BoxedHandler, request: Request) -> Response {
    let (mut parts, body) = request.into_parts();

    // Routes without captures have nothing to extract.
    let params = match Path::<PathParams>::from_request_parts(&mut parts, &()).await {
        Ok(Path(params)) => params,
        Err(PathRejection::MissingPathParams(_)) => PathParams::new(),
        Err(rejection) => {
            tracing::debug!("Rejected captures of {}: {}", parts.uri, rejection);
            return rejection.into_response();
        }
    };

    tracing::debug!("Dispatching {} {} {:?}", parts.method, parts.uri, params);
    handler(Request::from_parts(parts, body), params).await
}

pub(crate) async fn not_found(uri: Uri) -> Reply {
    tracing::debug!("No route for {}", uri.path());
    Reply::not_found(uri.path())
}
