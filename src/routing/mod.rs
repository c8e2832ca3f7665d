//! Route table and dispatcher
//!
//! Controllers are mounted into a [`RouteTable`] during bootstrap. The table
//! is then turned into an axum [`Router`](axum::Router) that matches
//! incoming paths against the full paths of every binding, regardless of
//! HTTP method.

mod dispatch;
mod logging;
mod path;
mod table;

pub use logging::log_request;
pub use path::join;
pub use table::RouteTable;
