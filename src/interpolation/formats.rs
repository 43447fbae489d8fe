//! Named format aliases

use std::collections::HashMap;

use crate::error::TitleError;

/// Name of the alias used when nothing else selects a format
pub const DEFAULT_ALIAS: &str = "default";

/// A reference to the format a title should be rendered with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatRef {
    /// A registered alias such as `app` or `default`
    Alias(String),
    /// A literal template such as `":title // :app"`
    Template(String),
    /// Render the raw title without formatting
    Disabled,
}

impl FormatRef {
    pub fn alias(name: impl Into<String>) -> Self {
        Self::Alias(name.into())
    }

    pub fn template(template: impl Into<String>) -> Self {
        Self::Template(template.into())
    }
}

/// Alias name -> template table.
///
/// Seeded with `default`, `app` and `title`. Entries can be overwritten but
/// never removed, so the `default` alias always resolves.
#[derive(Debug, Clone)]
pub struct Formats {
    aliases: HashMap<String, String>,
}

impl Default for Formats {
    fn default() -> Self {
        let mut aliases = HashMap::new();
        aliases.insert(DEFAULT_ALIAS.to_string(), ":title - :app".to_string());
        aliases.insert("app".to_string(), ":app".to_string());
        aliases.insert("title".to_string(), ":title".to_string());
        Self { aliases }
    }
}

impl Formats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite an alias
    pub fn insert(&mut self, alias: impl Into<String>, template: impl Into<String>) {
        self.aliases.insert(alias.into(), template.into());
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(|s| s.as_str())
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.aliases.contains_key(alias)
    }

    /// Template of the `default` alias
    pub fn default_template(&self) -> &str {
        self.get(DEFAULT_ALIAS).unwrap_or(":title - :app")
    }

    /// Resolve a format reference to a template.
    ///
    /// Returns `Ok(None)` for [`FormatRef::Disabled`].
    pub fn template<'a>(&'a self, format: &'a FormatRef) -> Result<Option<&'a str>, TitleError> {
        match format {
            FormatRef::Alias(name) => self
                .get(name)
                .map(Some)
                .ok_or_else(|| TitleError::unknown_format(name.as_str())),
            FormatRef::Template(template) => Ok(Some(template.as_str())),
            FormatRef::Disabled => Ok(None),
        }
    }

    /// All alias names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(|s| s.as_str())
    }
}
