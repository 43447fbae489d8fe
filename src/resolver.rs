//! Title resolution for a single request
//!
//! A [`PageTitle`] is created per request. Views either *set* the title
//! ([`PageTitle::page_title_with`], [`PageTitle::set_page_title`]), which stores
//! and returns the raw text, or *render* it ([`PageTitle::page_title`]), which
//! reads the stored title (or walks the translation fallback chain) and
//! applies a format.
//!
//! Raw title sources, in order:
//!
//! 1. a title stored earlier in the request
//! 2. `<controller>.<action>.title`
//! 3. `<controller>.<fallback action>.title` (`create` -> `new`, `update` -> `edit`)
//! 4. `<controller>.title`
//! 5. the caller's `default` option (text, or a translation key)
//! 6. the configured default, `app.tagline`
//! 7. an empty string
//!
//! Format sources, in order: a format stored with the title, the `format`
//! option, `<controller>.<action>.format` from the translations, the
//! configured default format.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::interpolation::{Env, FormatRef, Interpolations, DEFAULT_ALIAS};
use crate::request::{join_key, RequestContext};
use crate::translate::{Translation, Translator};

/// Translation key holding the application's display name
pub const APP_NAME_KEY: &str = "app.name";
/// Translation key used when no title can be found
pub const TAGLINE_KEY: &str = "app.tagline";

/// A fallback title supplied through options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultTitle {
    /// Used verbatim
    Text(String),
    /// Looked up in the translations
    Key(String),
}

/// Process-wide defaults merged into every resolution
#[derive(Debug, Clone)]
pub struct TitleDefaults {
    /// Format used when nothing more specific applies
    pub format: FormatRef,
    /// Last-resort title
    pub default: Option<DefaultTitle>,
    /// Last segment of title translation keys
    pub suffix: String,
    /// Action -> action whose title it borrows
    pub action_fallbacks: HashMap<String, String>,
}

impl Default for TitleDefaults {
    fn default() -> Self {
        let action_fallbacks = [("create", "new"), ("update", "edit")]
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
        Self {
            format: FormatRef::alias(DEFAULT_ALIAS),
            default: Some(DefaultTitle::Key(TAGLINE_KEY.to_string())),
            suffix: "title".to_string(),
            action_fallbacks,
        }
    }
}

/// What a view supplies when it sets the title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleResult {
    /// Just the raw title
    Plain(String),
    /// Raw title plus a format that wins over the `format` option
    WithFormat(String, FormatRef),
}

impl TitleResult {
    pub fn title(&self) -> &str {
        match self {
            Self::Plain(title) | Self::WithFormat(title, _) => title,
        }
    }

    pub fn format(&self) -> Option<&FormatRef> {
        match self {
            Self::Plain(_) => None,
            Self::WithFormat(_, format) => Some(format),
        }
    }
}

impl From<&str> for TitleResult {
    fn from(title: &str) -> Self {
        Self::Plain(title.to_string())
    }
}

impl From<String> for TitleResult {
    fn from(title: String) -> Self {
        Self::Plain(title)
    }
}

impl<S: Into<String>> From<(S, FormatRef)> for TitleResult {
    fn from((title, format): (S, FormatRef)) -> Self {
        Self::WithFormat(title.into(), format)
    }
}

/// `[title]` is a plain title, `[title, template, ..]` carries a template
impl<S: Into<String>> From<Vec<S>> for TitleResult {
    fn from(parts: Vec<S>) -> Self {
        let mut parts = parts.into_iter().map(Into::into);
        let title = parts.next().unwrap_or_default();
        match parts.next() {
            Some(template) => Self::WithFormat(title, FormatRef::Template(template)),
            None => Self::Plain(title),
        }
    }
}

/// Per-call options for rendering a title
#[derive(Debug, Clone, Default)]
pub struct TitleOptions {
    pub format: Option<FormatRef>,
    pub default: Option<DefaultTitle>,
    pub app: Option<String>,
    pub suffix: Option<String>,
    /// Extra values exposed to placeholders
    pub extra: BTreeMap<String, String>,
}

impl TitleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: FormatRef) -> Self {
        self.format = Some(format);
        self
    }

    /// Use a named format alias
    pub fn with_alias(self, alias: impl Into<String>) -> Self {
        self.with_format(FormatRef::Alias(alias.into()))
    }

    /// Use a literal format template
    pub fn with_template(self, template: impl Into<String>) -> Self {
        self.with_format(FormatRef::Template(template.into()))
    }

    /// Render the raw title only
    pub fn without_format(self) -> Self {
        self.with_format(FormatRef::Disabled)
    }

    pub fn with_default(mut self, text: impl Into<String>) -> Self {
        self.default = Some(DefaultTitle::Text(text.into()));
        self
    }

    pub fn with_default_key(mut self, key: impl Into<String>) -> Self {
        self.default = Some(DefaultTitle::Key(key.into()));
        self
    }

    pub fn with_app(mut self, app: impl Into<String>) -> Self {
        self.app = Some(app.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Title state for one request
pub struct PageTitle<'a> {
    registry: &'a Interpolations,
    translator: &'a dyn Translator,
    request: RequestContext,
    stored: Option<TitleResult>,
}

impl<'a> PageTitle<'a> {
    pub fn new(
        registry: &'a Interpolations,
        translator: &'a dyn Translator,
        request: RequestContext,
    ) -> Self {
        Self {
            registry,
            translator,
            request,
            stored: None,
        }
    }

    pub fn request(&self) -> &RequestContext {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut RequestContext {
        &mut self.request
    }

    /// Raw title stored earlier in this request
    pub fn stored_title(&self) -> Option<&str> {
        self.stored.as_ref().map(TitleResult::title)
    }

    /// Run `block` once, store its result and return the raw title
    pub fn page_title_with<F, R>(&mut self, block: F) -> String
    where
        F: FnOnce() -> R,
        R: Into<TitleResult>,
    {
        self.set_page_title(block())
    }

    /// Store a title for this request and return it unformatted
    pub fn set_page_title(&mut self, value: impl Into<TitleResult>) -> String {
        let value = value.into();
        let title = value.title().to_string();
        debug!(title = %title, format = ?value.format(), "page title set");
        self.stored = Some(value);
        title
    }

    /// Render the formatted title
    pub fn page_title(&self, options: &TitleOptions) -> String {
        let title = self.read_title(options);

        let Some(template) = self.select_format(options) else {
            return title;
        };

        let env = self.build_env(options, &title);
        let rendered = self.registry.interpolate(&template, &env);
        debug!(template = %template, rendered = %rendered, "page title rendered");
        rendered
    }

    fn read_title(&self, options: &TitleOptions) -> String {
        if let Some(stored) = &self.stored {
            return stored.title().to_string();
        }

        let defaults = self.registry.defaults();
        let suffix = options.suffix.as_deref().unwrap_or(&defaults.suffix);

        for key in self.fallback_keys(suffix) {
            if let Some(title) = self.lookup_title(&key) {
                debug!(key = %key, "title found");
                return title;
            }
        }

        for default in [options.default.as_ref(), defaults.default.as_ref()]
            .into_iter()
            .flatten()
        {
            match default {
                DefaultTitle::Text(text) if !text.is_empty() => return text.clone(),
                DefaultTitle::Key(key) => {
                    if let Some(title) = self.lookup_title(key) {
                        debug!(key = %key, "default title found");
                        return title;
                    }
                }
                DefaultTitle::Text(_) => {}
            }
        }

        debug!(
            controller = self.request.controller_path(),
            action = self.request.action_name(),
            "no title found"
        );
        String::new()
    }

    fn fallback_keys(&self, suffix: &str) -> Vec<String> {
        let action = self.request.action_name();
        let mut keys = vec![self.request.action_key(action, suffix)];
        if let Some(fallback) = self.registry.defaults().action_fallbacks.get(action) {
            keys.push(self.request.action_key(fallback, suffix));
        }
        let controller = self.request.controller_key();
        keys.push(join_key(&[controller.as_str(), suffix]));
        keys
    }

    /// Text under `key`. A symbol value is followed once as a key reference;
    /// when nothing is stored there it is the literal `:name` text.
    fn lookup_title(&self, key: &str) -> Option<String> {
        match self.translator.lookup(key)? {
            Translation::Text(text) if !text.is_empty() => Some(text),
            Translation::Symbol(target) => self
                .translator
                .lookup_text(&target)
                .or_else(|| Some(format!(":{}", target))),
            _ => None,
        }
    }

    fn translated_format(&self) -> Option<FormatRef> {
        let key = self
            .request
            .action_key(self.request.action_name(), "format");
        match self.translator.lookup(&key)? {
            Translation::Text(template) if !template.is_empty() => {
                Some(FormatRef::Template(template))
            }
            Translation::Symbol(name) if self.registry.formats().contains(&name) => {
                Some(FormatRef::Alias(name))
            }
            // not an alias, so a one-placeholder template such as `:controller`
            Translation::Symbol(name) => Some(FormatRef::Template(format!(":{}", name))),
            _ => None,
        }
    }

    /// Template to render with, `None` when formatting is disabled
    fn select_format(&self, options: &TitleOptions) -> Option<String> {
        let formats = self.registry.formats();
        let candidates = [
            self.stored.as_ref().and_then(TitleResult::format).cloned(),
            options.format.clone(),
            self.translated_format(),
            Some(self.registry.defaults().format.clone()),
        ];

        for candidate in candidates.into_iter().flatten() {
            match formats.template(&candidate) {
                Ok(template) => return template.map(str::to_string),
                Err(err) => warn!(error = %err, "skipping format"),
            }
        }

        Some(formats.default_template().to_string())
    }

    fn build_env(&self, options: &TitleOptions, title: &str) -> Env<'_> {
        let app = options
            .app
            .clone()
            .or_else(|| self.translator.lookup_text(APP_NAME_KEY))
            .unwrap_or_else(|| self.registry.app_name().to_string());

        let mut env = Env::with_values(self.registry, options.extra.clone()).with_request(&self.request);
        env.insert("title", title);
        env.insert("app", app);
        env
    }
}

impl std::fmt::Debug for PageTitle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageTitle")
            .field("request", &self.request)
            .field("stored", &self.stored)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::translate::NoTranslations;

    fn registry() -> Interpolations {
        let mut registry = Interpolations::new();
        registry.set_app_name("App");
        registry
    }

    #[test]
    fn test_default_format_composition() {
        let registry = registry();
        let mut view = PageTitle::new(&registry, &NoTranslations, RequestContext::new("a", "b"));
        assert_eq!(view.set_page_title("foo"), "foo");
        assert_eq!(view.page_title(&TitleOptions::new()), "foo - App");
    }

    #[test]
    fn test_format_disabled_returns_raw_title() {
        let registry = registry();
        let mut view = PageTitle::new(&registry, &NoTranslations, RequestContext::new("a", "b"));
        view.set_page_title("Raw :app title");
        let options = TitleOptions::new().without_format();
        assert_eq!(view.page_title(&options), "Raw :app title");
    }

    #[test]
    fn test_stored_disabled_format() {
        let registry = registry();
        let mut view = PageTitle::new(&registry, &NoTranslations, RequestContext::new("a", "b"));
        view.set_page_title(("Plain", FormatRef::Disabled));
        assert_eq!(view.page_title(&TitleOptions::new().with_alias("app")), "Plain");
    }

    #[test]
    fn test_nothing_found_yields_empty_title() {
        let registry = registry();
        let view = PageTitle::new(&registry, &NoTranslations, RequestContext::new("a", "b"));
        assert_eq!(view.page_title(&TitleOptions::new()), " - App");
        assert_eq!(view.page_title(&TitleOptions::new().without_format()), "");
    }

    #[test]
    fn test_unknown_alias_falls_back_to_default() {
        let registry = registry();
        let mut view = PageTitle::new(&registry, &NoTranslations, RequestContext::new("a", "b"));
        view.set_page_title(("Test", FormatRef::alias("missing")));
        assert_eq!(view.page_title(&TitleOptions::new().with_alias("app")), "App");
        assert_eq!(
            view.page_title(&TitleOptions::new().with_alias("also_missing")),
            "Test - App"
        );
    }

    #[test]
    fn test_extra_values_reach_placeholders() {
        let mut registry = registry();
        registry.register("section", |env| env.get("section").unwrap_or("?").to_string());
        let mut view = PageTitle::new(&registry, &NoTranslations, RequestContext::new("a", "b"));
        view.set_page_title("Inbox");
        let options = TitleOptions::new()
            .with_template(":title [:section]")
            .with_value("section", "mail");
        assert_eq!(view.page_title(&options), "Inbox [mail]");
    }

    #[test]
    fn test_translated_symbol_format_without_alias_is_a_template() {
        let mut registry = registry();
        registry.register("controller", |env| {
            env.request()
                .map(|r| r.controller_name().to_uppercase())
                .unwrap_or_default()
        });
        let mut catalog = Catalog::new();
        catalog.insert("orders.index.title", "Orders");
        catalog.insert_symbol("orders.index.format", "controller");
        let view = PageTitle::new(&registry, &catalog, RequestContext::new("orders", "index"));
        assert_eq!(view.page_title(&TitleOptions::new()), "ORDERS");
    }

    #[test]
    fn test_translated_symbol_format_prefers_alias() {
        let mut registry = registry();
        registry.formats_mut().insert("promo", ":app > :title");
        let mut catalog = Catalog::new();
        catalog.insert("orders.index.title", "Orders");
        catalog.insert_symbol("orders.index.format", "promo");
        let view = PageTitle::new(&registry, &catalog, RequestContext::new("orders", "index"));
        assert_eq!(view.page_title(&TitleOptions::new()), "App > Orders");
    }

    #[test]
    fn test_unresolved_symbol_title_is_literal() {
        let registry = registry();
        let catalog = Catalog::from_str("[orders.index]\ntitle = \":beta\"\n").expect("Should parse");
        let view = PageTitle::new(&registry, &catalog, RequestContext::new("orders", "index"));
        assert_eq!(view.page_title(&TitleOptions::new().without_format()), ":beta");
    }

    #[test]
    fn test_title_result_from_vec() {
        assert_eq!(TitleResult::from(vec!["Test"]), TitleResult::Plain("Test".into()));
        assert_eq!(
            TitleResult::from(vec!["Test", ":title!"]),
            TitleResult::WithFormat("Test".into(), FormatRef::template(":title!"))
        );
        assert_eq!(
            TitleResult::from(Vec::<String>::new()),
            TitleResult::Plain(String::new())
        );
    }

    #[test]
    fn test_symbol_title_is_followed() {
        let registry = registry();
        let translations = |key: &str| match key {
            "shop.index.title" => Some(Translation::Symbol("shop.name".to_string())),
            "shop.name" => Some(Translation::Text("The Shop".to_string())),
            _ => None,
        };
        let view = PageTitle::new(&registry, &translations, RequestContext::new("shop", "index"));
        assert_eq!(view.page_title(&TitleOptions::new()), "The Shop - App");
    }

    #[test]
    fn test_custom_suffix() {
        let registry = registry();
        let translations = |key: &str| match key {
            "shop.index.heading" => Some(Translation::Text("Heading".to_string())),
            _ => None,
        };
        let view = PageTitle::new(&registry, &translations, RequestContext::new("shop", "index"));
        let options = TitleOptions::new().with_suffix("heading").without_format();
        assert_eq!(view.page_title(&options), "Heading");
    }
}
