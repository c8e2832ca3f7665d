//! Application lifecycle
//!
//! ```text
//! 1. Controller construction (one instance per controller type)
//!    ↓
//! 2. Registration (ApplicationBuilder::controller / ::module)
//!    ↓
//! 3. Loading (RouteTable::mount, sets `loaded`)
//!    ↓
//! 4. Serving
//!    ↓
//! 5. Shutdown signal (SIGTERM/SIGINT), graceful drain
//! ```

mod application;
mod shutdown;

pub use application::{Application, ApplicationBuilder};
pub use shutdown::shutdown_signal;
