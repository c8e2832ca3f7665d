use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrellisError>;

#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("Route {path} is already bound to {existing}, cannot bind it to {incoming}")]
    RouteConflict {
        path: String,
        existing: String,
        incoming: String,
    },

    #[error("Invalid route path: {path}")]
    InvalidRoute { path: String },

    #[error("Controller registration failed: {message}")]
    RegistrationFailed { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
