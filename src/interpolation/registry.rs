//! Placeholder registry and template interpolation

use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::error::TitleError;
use crate::resolver::TitleDefaults;

use super::env::Env;
use super::formats::Formats;

/// App name used when neither the caller, the catalog nor the configuration
/// provide one
pub const FALLBACK_APP_NAME: &str = "Application";

/// A placeholder computation
pub type PlaceholderFn = Arc<dyn Fn(&Env<'_>) -> String + Send + Sync>;

/// Registry of placeholders, format aliases and global title defaults.
///
/// Built and mutated at start-up, then shared by reference for every title
/// resolved in the process.
pub struct Interpolations {
    placeholders: HashMap<String, PlaceholderFn>,
    /// Placeholder names, longest first
    order: Vec<String>,
    formats: Formats,
    app_name: String,
    defaults: TitleDefaults,
}

impl Default for Interpolations {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpolations {
    /// Create a registry with the built-in `app` and `title` placeholders
    pub fn new() -> Self {
        let mut registry = Self {
            placeholders: HashMap::new(),
            order: Vec::new(),
            formats: Formats::default(),
            app_name: FALLBACK_APP_NAME.to_string(),
            defaults: TitleDefaults::default(),
        };
        registry.register("app", |env| match env.get("app") {
            Some(app) => app.to_string(),
            None => env.registry().app_name().to_string(),
        });
        registry.register("title", |env| env.get("title").unwrap_or_default().to_string());
        registry
    }

    /// Register or overwrite a placeholder
    pub fn register<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&Env<'_>) -> String + Send + Sync + 'static,
    {
        let name = name.into();
        self.placeholders.insert(name, Arc::new(f));
        self.rebuild_order();
    }

    fn rebuild_order(&mut self) {
        let mut order: Vec<String> = self
            .placeholders
            .keys()
            .filter(|name| !name.is_empty())
            .cloned()
            .collect();
        order.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| b.cmp(a)));
        self.order = order;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.placeholders.contains_key(name)
    }

    /// Placeholder names in matching order (longest first)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Evaluate a single placeholder
    pub fn resolve_placeholder(&self, name: &str, env: &Env<'_>) -> Result<String, TitleError> {
        let f = self
            .placeholders
            .get(name)
            .ok_or_else(|| TitleError::unknown_placeholder(name))?;
        Ok(f(env))
    }

    /// Replace every `:name` token in `template` with its placeholder value.
    ///
    /// At each `:` the longest registered name the remaining text starts with
    /// wins. Tokens with no registered name are copied verbatim, and
    /// substituted values are never scanned again.
    pub fn interpolate(&self, template: &str, env: &Env<'_>) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(pos) = rest.find(':') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            match self.match_at(after) {
                Some(name) => {
                    trace!(placeholder = name, "substituting");
                    out.push_str(&self.resolve_placeholder(name, env).unwrap_or_default());
                    rest = &after[name.len()..];
                }
                None => {
                    out.push(':');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// Interpolate against a context built from `(key, value)` pairs
    pub fn interpolate_with<K, V>(&self, template: &str, values: impl IntoIterator<Item = (K, V)>) -> String
    where
        K: Into<String>,
        V: Into<String>,
    {
        let env = Env::with_values(self, values);
        self.interpolate(template, &env)
    }

    fn match_at(&self, text: &str) -> Option<&str> {
        self.order
            .iter()
            .map(|s| s.as_str())
            .find(|name| text.starts_with(name))
    }

    pub fn formats(&self) -> &Formats {
        &self.formats
    }

    pub fn formats_mut(&mut self) -> &mut Formats {
        &mut self.formats
    }

    /// Fallback application name for the `app` placeholder
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn set_app_name(&mut self, name: impl Into<String>) {
        self.app_name = name.into();
    }

    /// Default options merged into every title resolution
    pub fn defaults(&self) -> &TitleDefaults {
        &self.defaults
    }

    pub fn defaults_mut(&mut self) -> &mut TitleDefaults {
        &mut self.defaults
    }
}

impl std::fmt::Debug for Interpolations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpolations")
            .field("placeholders", &self.order)
            .field("formats", &self.formats)
            .field("app_name", &self.app_name)
            .field("defaults", &self.defaults)
            .finish()
    }
}
