use axum::response::{IntoResponse, Response};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Incoming request handed to handlers
pub type Request = axum::extract::Request;

/// Keyword parameters captured from the matched path pattern
pub type PathParams = HashMap<String, String>;

pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// A handler bound to its controller instance, with the return type erased
pub type BoxedHandler = Arc<dyn Fn(Request, PathParams) -> HandlerFuture + Send + Sync>;

/// Route declarations collected from a controller
///
/// Paths are relative to the controller's mount prefix; the route table
/// composes the full path when the controller is mounted.
#[derive(Default)]
pub struct Routes {
    bindings: Vec<(String, BoxedHandler)>,
}

impl Routes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` at `path`, invoking it on `controller` for every request
    pub fn bind<C, F, Fut, R>(&mut self, path: impl Into<String>, controller: &Arc<C>, handler: F) -> &mut Self
    where
        C: Send + Sync + 'static,
        F: Fn(Arc<C>, Request, PathParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + 'static,
    {
        let controller = Arc::clone(controller);
        let handler: BoxedHandler = Arc::new(move |request: Request, params: PathParams| -> HandlerFuture {
            let fut = handler(Arc::clone(&controller), request, params);
            Box::pin(async move { fut.await.into_response() })
        });
        self.bindings.push((path.into(), handler));
        self
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(path, _)| path.as_str())
    }

    pub(crate) fn into_bindings(self) -> Vec<(String, BoxedHandler)> {
        self.bindings
    }
}
