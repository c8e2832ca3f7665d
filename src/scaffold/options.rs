use super::error::{Result, ScaffoldError};
use super::platform::Platform;
use crate::config::ConfigService;
use heck::{ToSnakeCase, ToUpperCamelCase};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?$",
    )
    .expect("email pattern is valid")
});

/// Fully resolved inputs of a controller scaffold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Type name of the generated controller
    pub name: String,
    /// File stem of the generated source file
    pub filename: String,
    /// Mount prefix, written verbatim
    pub route: String,
    pub description: Option<String>,
    pub author: String,
    pub email: String,
    pub platforms: String,
}

impl ControllerOptions {
    pub fn builder(raw_name: impl Into<String>) -> ControllerOptionsBuilder {
        ControllerOptionsBuilder::new(raw_name)
    }
}

/// Builder for ControllerOptions
///
/// Anything left unset is defaulted from the [`ConfigService`] and the host
/// platform when [`build`](Self::build) runs.
#[derive(Debug, Default)]
pub struct ControllerOptionsBuilder {
    raw_name: String,
    route: Option<String>,
    description: Option<String>,
    author: Option<String>,
    email: Option<String>,
    platforms: Option<String>,
}

impl ControllerOptionsBuilder {
    pub fn new(raw_name: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
            ..Self::default()
        }
    }

    pub fn route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn platforms(mut self, platforms: impl Into<String>) -> Self {
        self.platforms = Some(platforms.into());
        self
    }

    /// Normalize the name, validate user input and fill in defaults
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::InvalidName`], [`ScaffoldError::InvalidEmail`] or
    /// [`ScaffoldError::InvalidRoute`] for unusable input.
    pub fn build(self, config: &ConfigService) -> Result<ControllerOptions> {
        let filename = normalize_filename(&self.raw_name);
        if !filename.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(ScaffoldError::InvalidName { raw: self.raw_name });
        }
        let name = camelize(&filename);

        let user = config.current_user();
        let email = match self.email {
            Some(email) => {
                if !EMAIL.is_match(&email) {
                    return Err(ScaffoldError::InvalidEmail { email });
                }
                email
            }
            None => format!("{}@localhost", user),
        };

        let route = self.route.unwrap_or_default();
        if route.chars().any(|c| c == '"' || c == '\\' || c.is_control()) {
            return Err(ScaffoldError::InvalidRoute { route });
        }
        // The generated controller binds `/` under this prefix.
        if crate::routing::join(&route, "/").is_err() {
            return Err(ScaffoldError::InvalidRoute { route });
        }

        Ok(ControllerOptions {
            name,
            filename,
            route,
            description: self.description.map(|d| single_line(&d)),
            author: self.author.map(|a| single_line(&a)).unwrap_or(user),
            email,
            platforms: self
                .platforms
                .map(|p| single_line(&p))
                .unwrap_or_else(Platform::host_name),
        })
    }
}

/// Drop everything but ASCII alphanumerics and `_`, then snake_case the rest
pub fn normalize_filename(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    cleaned.to_snake_case()
}

pub fn camelize(filename: &str) -> String {
    filename.to_upper_camel_case()
}

// Header values end up in line comments.
fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
