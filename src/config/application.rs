use serde::{Deserialize, Serialize};
use std::path::Path;

/// Location of the application descriptor, relative to the application root
pub const APPLICATION_CONFIG: &str = "config/application.json";

/// Contents of `config/application.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ApplicationConfig {
    /// Read the descriptor of the application rooted at `root`
    pub fn load(root: &Path) -> std::io::Result<Self> {
        let raw = fs_err::read_to_string(root.join(APPLICATION_CONFIG))?;
        serde_json::from_str(&raw).map_err(std::io::Error::other)
    }
}
