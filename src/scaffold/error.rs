//! Scaffolding error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a controller
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The controller name has no identifier characters left after normalization
    #[error("{raw:?} is not a valid controller name")]
    InvalidName { raw: String },

    #[error(
        "the given email address {email} is not a valid RFC2822 email address, \
         check http://www.rfc-editor.org/rfc/rfc2822.txt for very extended details"
    )]
    InvalidEmail { email: String },

    /// The route cannot be embedded in generated source
    #[error("{route:?} is not a valid controller route")]
    InvalidRoute { route: String },

    #[error("template placeholder ${{{name}}} has no value")]
    UnknownPlaceholder { name: String },

    #[error(
        "make sure you are inside a trellis application root directory and then run \
         this command again ({} not found)",
        .path.display()
    )]
    NotInApplicationRoot { path: PathBuf },

    #[error("{} already exists, refusing to overwrite it", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
