//! Controller scaffolding
//!
//! Renders the controller skeleton for a given name, route and author and
//! either prints it or writes it into an application's controller
//! directory.
//!
//! # Example
//!
//! ```rust
//! use trellis::config::ConfigService;
//! use trellis::scaffold::{ControllerOptions, ControllerScaffold};
//!
//! let config = ConfigService::from_pairs([("USER", "oscar")]);
//! let options = ControllerOptions::builder("home")
//!     .route("/home")
//!     .description("Home page")
//!     .build(&config)
//!     .unwrap();
//!
//! let source = ControllerScaffold::new(options).render(2026).unwrap();
//! assert!(source.contains(r#"Reply::ok("I am the Home, hello world!")"#));
//! ```

mod error;
mod options;
mod platform;
mod project;
mod template;

pub use error::{Result, ScaffoldError};
pub use options::{ControllerOptions, ControllerOptionsBuilder, camelize, normalize_filename};
pub use platform::Platform;
pub use project::{CONTROLLER_DIR, ProjectRoot};
pub use template::{CONTROLLER_TEMPLATE, Template, Variables};

use chrono::Datelike;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

/// Rendered in place of a missing synopsis
const NO_SYNOPSIS: &str = "None";

/// Year written into the copyright line
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// A controller ready to be rendered
#[derive(Debug, Clone)]
pub struct ControllerScaffold {
    options: ControllerOptions,
    template: Template,
}

impl ControllerScaffold {
    pub fn new(options: ControllerOptions) -> Self {
        Self {
            options,
            template: Template::controller(),
        }
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Placeholder values for the controller template
    pub fn variables(&self, year: i32) -> Variables {
        let options = &self.options;
        [
            ("controller_class", options.name.clone()),
            ("register_path", options.route.clone()),
            (
                "synopsis",
                options
                    .description
                    .clone()
                    .unwrap_or_else(|| NO_SYNOPSIS.to_string()),
            ),
            ("author", options.author.clone()),
            ("author_email", options.email.clone()),
            ("platforms", options.platforms.clone()),
            ("year", year.to_string()),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
    }

    pub fn render(&self, year: i32) -> Result<String> {
        self.template.render(&self.variables(year))
    }

    /// Write the rendered controller to `out`
    pub fn dump(&self, out: &mut impl Write, year: i32) -> Result<()> {
        let source = self.render(year)?;
        out.write_all(source.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Write the rendered controller into the application's controller directory
    ///
    /// Returns the path of the new file.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::AlreadyExists`] if a controller with the same file
    /// name is already present.
    pub fn write(&self, root: &ProjectRoot, year: i32) -> Result<PathBuf> {
        let source = self.render(year)?;
        let dir = root.controller_dir();
        fs_err::create_dir_all(&dir)?;

        let path = dir.join(format!("{}.rs", self.options.filename));
        let mut file = match fs_err::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ScaffoldError::AlreadyExists { path });
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(source.as_bytes())?;

        tracing::info!(
            "Created controller {} for {} at {}",
            self.options.name,
            root.config().name,
            path.display()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{APPLICATION_CONFIG, ConfigService};

    fn scaffold(raw: &str, route: &str) -> ControllerScaffold {
        let config = ConfigService::from_pairs([("USER", "oscar")]);
        let options = ControllerOptions::builder(raw)
            .route(route)
            .platforms("Linux")
            .build(&config)
            .unwrap();
        ControllerScaffold::new(options)
    }

    fn project() -> (tempfile::TempDir, ProjectRoot) {
        let dir = tempfile::tempdir().unwrap();
        fs_err::create_dir_all(dir.path().join("config")).unwrap();
        fs_err::write(dir.path().join(APPLICATION_CONFIG), r#"{"name": "dummy"}"#).unwrap();
        let root = ProjectRoot::open(dir.path()).unwrap();
        (dir, root)
    }

    #[test]
    fn test_render_header_and_body() {
        let source = scaffold("test_controller", "").render(2026).unwrap();

        assert!(source.starts_with("// trellis-file-type: trellis-controller\n"));
        assert!(source.contains("// Copyright (c) 2026 - oscar <oscar@localhost>\n"));
        assert!(source.contains("// .. controller:: TestController\n"));
        assert!(source.contains("//     :platform: Linux\n"));
        assert!(source.contains("//     :synopsis: None\n"));
        assert!(source.contains("pub struct TestController {"));
        assert!(source.contains("    pub fn new() -> Self {\n        // Put your initialization code here\n"));
        assert!(source.contains(r#"Reply::ok("I am the TestController, hello world!")"#));
        assert!(source.contains("        \"\"\n"));
        assert!(!source.contains("${"));
    }

    #[test]
    fn test_register_path_is_verbatim() {
        let source = scaffold("home", "/home").render(2026).unwrap();
        assert!(source.contains("        \"/home\"\n"));
    }

    #[test]
    fn test_dump() {
        let scaffold = scaffold("test_controller", "");
        let mut out = Vec::new();
        scaffold.dump(&mut out, 2026).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), scaffold.render(2026).unwrap());
    }

    #[test]
    fn test_write_controller() {
        let (_dir, root) = project();
        let scaffold = scaffold("test_controller", "");

        let path = scaffold.write(&root, 2026).unwrap();
        assert_eq!(path, root.path().join("application/controller/test_controller.rs"));
        assert_eq!(
            fs_err::read_to_string(&path).unwrap(),
            scaffold.render(2026).unwrap()
        );
    }

    #[test]
    fn test_write_refuses_to_overwrite() {
        let (_dir, root) = project();
        let scaffold = scaffold("test_controller", "");

        scaffold.write(&root, 2026).unwrap();
        let err = scaffold.write(&root, 2026).unwrap_err();
        assert!(matches!(err, ScaffoldError::AlreadyExists { .. }));
    }
}
