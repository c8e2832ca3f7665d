//! # Trellis
//!
//! Controller runtime and controller scaffolding for axum applications.
//!
//! A controller is a long-lived object that declares a mount prefix and a set
//! of handlers relative to it. During bootstrap every controller is mounted
//! into an explicit [`RouteTable`](routing::RouteTable), owned by the
//! application, which then becomes an axum router.
//!
//! The [`scaffold`] module generates new controllers from a fixed skeleton;
//! the `trellis` binary exposes it on the command line.
//!
//! ## Quick Start
//!
//! ```rust,no_run
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
//!
//! #[tokio::main]
//! async fn main() -> trellis::Result<()> {
//!     let app = Application::builder()
//!         .controller(Arc::new(Home { state: ControllerState::new() }))
//!         .build()?;
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     app.serve(listener).await
//! }
//! ```

pub mod common;
pub mod config;
pub mod controller;
pub mod error;
pub mod lifecycle;
pub mod module;
pub mod routing;
pub mod scaffold;

// Re-export core types
pub use common::Reply;
pub use controller::{Controller, ControllerState, PathParams, Routes};
pub use error::{Result, TrellisError};
pub use lifecycle::{Application, ApplicationBuilder};
pub use module::Module;
pub use routing::RouteTable;

// Re-export commonly used types from dependencies
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use trellis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::common::Reply;
    pub use crate::config::ConfigService;
    pub use crate::controller::{Controller, ControllerState, PathParams, Request, Routes};
    pub use crate::error::{Result, TrellisError};
    pub use crate::lifecycle::{Application, ApplicationBuilder, shutdown_signal};
    pub use crate::module::Module;
    pub use crate::routing::RouteTable;
    pub use axum::{Router, http::StatusCode};
    pub use std::sync::Arc;
}
