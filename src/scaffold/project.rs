use super::error::{Result, ScaffoldError};
use crate::config::{APPLICATION_CONFIG, ApplicationConfig};
use std::path::{Path, PathBuf};

/// Directory, relative to the application root, holding controller sources
pub const CONTROLLER_DIR: &str = "application/controller";

/// Root directory of an application, identified by its descriptor
#[derive(Debug, Clone)]
pub struct ProjectRoot {
    path: PathBuf,
    config: ApplicationConfig,
}

impl ProjectRoot {
    /// Open `path` as an application root
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::NotInApplicationRoot`] when `path` has no
    /// `config/application.json`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let descriptor = path.join(APPLICATION_CONFIG);
        if !descriptor.is_file() {
            return Err(ScaffoldError::NotInApplicationRoot { path: descriptor });
        }
        let config = ApplicationConfig::load(&path)?;
        tracing::debug!("Found application {:?} at {}", config.name, path.display());
        Ok(Self { path, config })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &ApplicationConfig {
        &self.config
    }

    pub fn controller_dir(&self) -> PathBuf {
        self.path.join(CONTROLLER_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_outside_application_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectRoot::open(dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::NotInApplicationRoot { .. }));
        assert!(err.to_string().starts_with(
            "make sure you are inside a trellis application root directory"
        ));
    }

    #[test]
    fn test_open_application() {
        let dir = tempfile::tempdir().unwrap();
        fs_err::create_dir_all(dir.path().join("config")).unwrap();
        fs_err::write(dir.path().join(APPLICATION_CONFIG), r#"{"name": "dummy"}"#).unwrap();

        let root = ProjectRoot::open(dir.path()).unwrap();
        assert_eq!(root.config().name, "dummy");
        assert_eq!(root.controller_dir(), dir.path().join("application/controller"));
    }
}
