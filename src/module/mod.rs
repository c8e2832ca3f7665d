use crate::controller::Controller;
use std::sync::Arc;

/// A group of controllers registered together
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use trellis::prelude::*;
///
/// pub struct AppModule;
///
/// impl Module for AppModule {
///     fn controllers(&self) -> Vec<Arc<dyn Controller>> {
///         // vec![Arc::new(Home::new()), Arc::new(Blog::new())]
///         Vec::new()
///     }
/// }
/// ```
pub trait Module {
    /// Controller instances owned by this module, created once each
    fn controllers(&self) -> Vec<Arc<dyn Controller>>;
}
