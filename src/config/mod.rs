mod application;

pub use application::{APPLICATION_CONFIG, ApplicationConfig};

use dashmap::DashMap;
use std::env;
use std::sync::Arc;

/// Configuration service
///
/// Key/value settings seeded from the process environment. Lookups used by
/// the scaffolder and the server (`USER`, `HOST`, `PORT`, ...) go through
/// here so tests can supply their own values.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// Create a service holding every environment variable
    pub fn from_env() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    /// Create a service holding only the given pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let service = Self::default();
        for (key, value) in pairs {
            service.set(key, value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    /// Login name of the current user, `unknown` when the environment has none
    pub fn current_user(&self) -> String {
        self.get("USER")
            .or_else(|| self.get("USERNAME"))
            .filter(|user| !user.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// `HOST:PORT` the application server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.get_or("HOST", "0.0.0.0"), self.get_or("PORT", "3000"))
    }
}
