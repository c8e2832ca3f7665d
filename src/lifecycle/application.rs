//! Application Bootstrap
//!
//! Provides a high-level API for loading controllers into a route table
//! and serving them.

use super::shutdown_signal;
use crate::config::ConfigService;
use crate::controller::Controller;
use crate::error::Result;
use crate::module::Module;
use crate::routing::{RouteTable, log_request};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

/// A bootstrapped application: every controller loaded, routes fixed
///
/// # Example
///
/// ```rust,ignore
/// use trellis::lifecycle::Application;
///
/// #[tokio::main]
/// async fn main() -> trellis::Result<()> {
///     let app = Application::builder()
///         .controller(Arc::new(Home::new()))
///         .module(&AppModule)
///         .build()?;
///
///     app.serve_from_config(&ConfigService::from_env()).await
/// }
/// ```
pub struct Application {
    routes: RouteTable,
    controllers: Vec<Arc<dyn Controller>>,
}

impl Application {
    /// Create a new application builder
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Controllers in registration order
    pub fn controllers(&self) -> &[Arc<dyn Controller>] {
        &self.controllers
    }

    /// Axum router dispatching to every loaded controller, with request logging
    pub fn router(&self) -> Router {
        self.routes
            .clone()
            .into_router()
            .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(log_request)))
    }

    /// Bind the `HOST:PORT` address given by `config`
    pub async fn bind(config: &ConfigService) -> Result<TcpListener> {
        let addr = config.bind_address();
        let listener = TcpListener::bind(&addr).await.inspect_err(|e| {
            tracing::error!("Failed to bind {}: {}", addr, e);
        })?;
        Ok(listener)
    }

    /// Bind from `config` and serve until shutdown
    pub async fn serve_from_config(self, config: &ConfigService) -> Result<()> {
        let listener = Self::bind(config).await?;
        self.serve(listener).await
    }

    /// Serve until Ctrl+C or SIGTERM is received
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!("Serving {} routes on http://{}", self.routes.len(), addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async {
                shutdown_signal().await;
                tracing::info!("Initiating graceful shutdown...");
            })
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Builder for Application
#[derive(Default)]
pub struct ApplicationBuilder {
    controllers: Vec<Arc<dyn Controller>>,
}

impl ApplicationBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single controller instance
    pub fn controller(mut self, controller: Arc<dyn Controller>) -> Self {
        self.controllers.push(controller);
        self
    }

    /// Register every controller of a module
    pub fn module<M: Module>(mut self, module: &M) -> Self {
        self.controllers.extend(module.controllers());
        self
    }

    /// Mount every registered controller into a fresh route table
    ///
    /// This is the loader pass: each controller is marked loaded once its
    /// routes are accepted.
    ///
    /// # Errors
    ///
    /// Returns the first route conflict or malformed path encountered.
    pub fn build(self) -> Result<Application> {
        tracing::info!("Loading {} controllers...", self.controllers.len());

        let mut routes = RouteTable::new();
        for controller in &self.controllers {
            routes.mount(Arc::clone(controller)).inspect_err(|e| {
                tracing::error!("Failed to load controller {}: {}", controller.name(), e);
            })?;
        }

        tracing::info!("Application loaded ({} routes)", routes.len());
        Ok(Application {
            routes,
            controllers: self.controllers,
        })
    }
}
