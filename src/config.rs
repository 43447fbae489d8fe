//! Start-up configuration for the interpolation registry
//!
//! ```toml
//! [app]
//! name = "Wohaapp"             # or: root = "/srv/wohaapp" -> "Wohaapp"
//!
//! [defaults]
//! format = "default"           # registered alias name, otherwise a template
//! default = "app.tagline"      # translation key of the last-resort title
//! suffix = "title"
//!
//! [formats]
//! promo = ":app > :title"
//!
//! [action_fallbacks]
//! create = "new"
//! update = "edit"
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::interpolation::{FormatRef, Formats, Interpolations};
use crate::request::humanize;
use crate::resolver::DefaultTitle;

/// Deserialized configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    pub app: AppSection,
    pub defaults: DefaultsSection,
    /// Extra or overridden format aliases
    pub formats: HashMap<String, String>,
    /// Replaces the built-in `create -> new`, `update -> edit` map when present
    pub action_fallbacks: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppSection {
    /// Display name used when no `app.name` translation exists
    pub name: Option<String>,
    /// Application root; its humanized directory name is the fallback name
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DefaultsSection {
    /// Alias name, template, or `false` to disable formatting
    pub format: Option<FormatSetting>,
    /// Translation key of the last-resort title
    pub default: Option<String>,
    pub suffix: Option<String>,
}

/// `format = "promo"`, `format = ":title | :app"` or `format = false`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FormatSetting {
    Enabled(bool),
    Named(String),
}

impl FormatSetting {
    /// A registered alias name selects that alias; any other string is a
    /// template, including static text such as `"Shop"`
    pub fn to_format_ref(&self, formats: &Formats) -> FormatRef {
        match self {
            Self::Enabled(false) => FormatRef::Disabled,
            Self::Enabled(true) => FormatRef::alias(crate::interpolation::DEFAULT_ALIAS),
            Self::Named(s) if formats.contains(s) => FormatRef::alias(s.as_str()),
            Self::Named(s) => FormatRef::template(s.as_str()),
        }
    }
}

impl TitleConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the application name
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app.name = Some(name.into());
        self
    }

    /// Set the application root used to derive a fallback name
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.app.root = Some(root.into());
        self
    }

    /// Add a format alias
    pub fn with_format(mut self, alias: impl Into<String>, template: impl Into<String>) -> Self {
        self.formats.insert(alias.into(), template.into());
        self
    }

    /// Fallback application name: explicit name, else humanized root basename
    pub fn app_name(&self) -> Option<String> {
        if let Some(name) = &self.app.name {
            return Some(name.clone());
        }
        let root = self.app.root.as_ref()?;
        let base = root.file_name()?.to_str()?;
        Some(humanize(base))
    }

    /// Build a registry from this configuration
    pub fn build(&self) -> Interpolations {
        let mut registry = Interpolations::new();

        if let Some(name) = self.app_name() {
            registry.set_app_name(name);
        }

        for (alias, template) in &self.formats {
            registry.formats_mut().insert(alias.clone(), template.clone());
        }

        if let Some(format) = &self.defaults.format {
            let format = format.to_format_ref(registry.formats());
            registry.defaults_mut().format = format;
        }
        let defaults = registry.defaults_mut();
        if let Some(key) = &self.defaults.default {
            defaults.default = Some(DefaultTitle::Key(key.clone()));
        }
        if let Some(suffix) = &self.defaults.suffix {
            defaults.suffix = suffix.clone();
        }
        if let Some(fallbacks) = &self.action_fallbacks {
            defaults.action_fallbacks = fallbacks.clone();
        }

        registry
    }
}
