//! Page Title - page titles for web views
//!
//! This library resolves a page's raw title from the view, the translations
//! or a fallback chain, and formats it with the application name through a
//! registry of `:name` placeholders.
//!
//! # Example
//!
//! ```rust
//! use page_title::{Catalog, PageTitle, RequestContext, TitleConfig, TitleOptions};
//!
//! let registry = TitleConfig::new()
//!     .with_app_name("Shop")
//!     .with_format("promo", ":app > :title")
//!     .build();
//!
//! let mut catalog = Catalog::new();
//! catalog.insert("products.index.title", "All products");
//!
//! let view = PageTitle::new(&registry, &catalog, RequestContext::new("products", "index"));
//! assert_eq!(view.page_title(&TitleOptions::new()), "All products - Shop");
//! assert_eq!(view.page_title(&TitleOptions::new().with_alias("promo")), "Shop > All products");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod interpolation;
pub mod request;
pub mod resolver;
pub mod translate;

pub use catalog::Catalog;
pub use config::TitleConfig;
pub use error::{CatalogError, ConfigError, TitleError};
pub use interpolation::{Env, FormatRef, Formats, Interpolations};
pub use request::{humanize, RequestContext};
pub use resolver::{DefaultTitle, PageTitle, TitleDefaults, TitleOptions, TitleResult};
pub use translate::{NoTranslations, Translation, Translator};

/// Render the title for a request that never set one explicitly
///
/// # Example
///
/// ```rust
/// use page_title::{render_title, Interpolations, NoTranslations, RequestContext, TitleOptions};
///
/// let mut registry = Interpolations::new();
/// registry.set_app_name("Shop");
///
/// let title = render_title(
///     &registry,
///     &NoTranslations,
///     RequestContext::new("products", "index"),
///     &TitleOptions::new().with_default("Welcome"),
/// );
/// assert_eq!(title, "Welcome - Shop");
/// ```
pub fn render_title(
    registry: &Interpolations,
    translator: &dyn Translator,
    request: RequestContext,
    options: &TitleOptions,
) -> String {
    PageTitle::new(registry, translator, request).page_title(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_title_uses_translations() {
        let mut catalog = Catalog::new();
        catalog.insert("contacts.list.title", "Contacts");
        catalog.insert("app.name", "Address book");

        let registry = Interpolations::new();
        let title = render_title(
            &registry,
            &catalog,
            RequestContext::new("contacts", "list"),
            &TitleOptions::new(),
        );
        assert_eq!(title, "Contacts - Address book");
    }

    #[test]
    fn test_render_title_without_format() {
        let registry = Interpolations::new();
        let title = render_title(
            &registry,
            &NoTranslations,
            RequestContext::new("contacts", "list"),
            &TitleOptions::new().with_default("Contacts").without_format(),
        );
        assert_eq!(title, "Contacts");
    }
}
