use super::error::{Result, ScaffoldError};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Skeleton of a generated controller
pub const CONTROLLER_TEMPLATE: &str = include_str!("../../templates/controller.rs.tpl");

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid"));

/// Values substituted into a template, keyed by placeholder name
pub type Variables = BTreeMap<String, String>;

/// A source skeleton with `${name}` placeholders
#[derive(Debug, Clone)]
pub struct Template {
    source: Cow<'static, str>,
}

impl Template {
    pub fn new(source: impl Into<Cow<'static, str>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn controller() -> Self {
        Self::new(CONTROLLER_TEMPLATE)
    }

    /// Names of every placeholder the template uses
    pub fn placeholders(&self) -> BTreeSet<&str> {
        PLACEHOLDER
            .captures_iter(&self.source)
            .filter_map(|caps| caps.get(1))
            .map(|name| name.as_str())
            .collect()
    }

    /// Substitute every placeholder
    ///
    /// Extra variables are ignored; a placeholder without a value is an error.
    pub fn render(&self, variables: &Variables) -> Result<String> {
        if let Some(missing) = self
            .placeholders()
            .into_iter()
            .find(|name| !variables.contains_key(*name))
        {
            return Err(ScaffoldError::UnknownPlaceholder {
                name: missing.to_string(),
            });
        }

        let rendered = PLACEHOLDER.replace_all(&self.source, |caps: &Captures<'_>| {
            variables[&caps[1]].clone()
        });
        Ok(rendered.into_owned())
    }
}
