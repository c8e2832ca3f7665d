//! Controller capability
//!
//! A controller groups request handlers under a common mount prefix.
//! Loaders only ever see `Arc<dyn Controller>`, so any type implementing
//! the trait can be registered without the loader knowing its concrete
//! type.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use trellis::prelude::*;
//!
//! pub struct Home {
//!     state: ControllerState,
//! }
//!
//! impl Home {
//!     async fn root(self: Arc<Self>, _request: Request, _params: PathParams) -> Reply {
//!         Reply::ok("I am the Home, hello world!")
//!     }
//! }
//!
//! impl Controller for Home {
//!     fn name(&self) -> &str {
//!         "Home"
//!     }
//!
//!     fn route_prefix(&self) -> &str {
//!         "/home"
//!     }
//!
//!     fn state(&self) -> &ControllerState {
//!         &self.state
//!     }
//!
//!     fn routes(self: Arc<Self>, routes: &mut Routes) {
//!         routes.bind("/", &self, Self::root);
//!     }
//! }
//! ```

mod routes;
mod state;

pub use routes::{BoxedHandler, HandlerFuture, PathParams, Request, Routes};
pub use state::ControllerState;

use std::sync::Arc;

/// Capability every controller declares conformance to
pub trait Controller: Send + Sync + 'static {
    /// Identifier of the controller, unique per application
    fn name(&self) -> &str;

    /// Mount path under which the controller's routes are registered
    fn route_prefix(&self) -> &str;

    fn state(&self) -> &ControllerState;

    /// Declare the controller's handlers, relative to [`route_prefix`](Self::route_prefix)
    fn routes(self: Arc<Self>, routes: &mut Routes);

    /// Whether a route table has accepted all of this controller's routes
    fn is_loaded(&self) -> bool {
        self.state().is_loaded()
    }
}
