//! TOML-backed translation catalog
//!
//! Nested tables are flattened into dotted keys:
//!
//! ```toml
//! [app]
//! name = "Wohaapp"
//! tagline = "Default"
//!
//! [pages.features]
//! title = "Feature comparison"
//! format = ":promo"
//! ```
//!
//! A string consisting of `:` followed by an identifier (`":promo"`) is stored
//! as [`Translation::Symbol`]; every table is also registered as a
//! [`Translation::Node`] under its own key.

use std::collections::HashMap;
use std::path::Path;

use crate::error::CatalogError;
use crate::translate::{Translation, Translator};

/// Flattened key -> translation map
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, Translation>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let table: toml::Table = toml::from_str(content)?;
        let mut catalog = Self::new();
        catalog.flatten("", &table)?;
        Ok(catalog)
    }

    fn flatten(&mut self, prefix: &str, table: &toml::Table) -> Result<(), CatalogError> {
        for (name, value) in table {
            let key = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{}.{}", prefix, name)
            };
            match value {
                toml::Value::String(s) => {
                    let entry = match symbol_name(s) {
                        Some(sym) => Translation::Symbol(sym.to_string()),
                        None => Translation::Text(s.clone()),
                    };
                    self.entries.insert(key, entry);
                }
                toml::Value::Table(inner) => {
                    self.flatten(&key, inner)?;
                    self.entries.insert(key, Translation::Node);
                }
                _ => return Err(CatalogError::UnsupportedValue { key }),
            }
        }
        Ok(())
    }

    /// Insert a plain message
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries
            .insert(key.into(), Translation::Text(text.into()));
    }

    /// Insert a symbolic value (key reference or format alias)
    pub fn insert_symbol(&mut self, key: impl Into<String>, symbol: impl Into<String>) {
        self.entries
            .insert(key.into(), Translation::Symbol(symbol.into()));
    }

    /// Look up a message and substitute `%{name}` arguments.
    ///
    /// Arguments without a matching token are ignored; tokens without a
    /// matching argument are left as-is.
    pub fn translate(&self, key: &str, args: &[(&str, &str)]) -> Option<String> {
        let template = self.lookup_text(key)?;
        Some(substitute_args(&template, args))
    }

    /// Number of entries, including table nodes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn lookup(&self, key: &str) -> Option<Translation> {
        self.entries.get(key).cloned()
    }
}

/// `":promo"` -> `Some("promo")`
fn symbol_name(s: &str) -> Option<&str> {
    let name = s.strip_prefix(':')?;
    let is_ident = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '.');
    is_ident.then_some(name)
}

fn substitute_args(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("%{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 1]),
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
placeholder = "Displaying %{name}"

[app]
name = "Wohaapp"
tagline = "Default"

[pages.features]
title = "Feature comparison"
format = ":promo"

[pages.signup]
format = "Sign up for :app now!"
"#;

    #[test]
    fn test_flattens_nested_tables() {
        let catalog = Catalog::from_str(FIXTURE).expect("Should parse");
        assert_eq!(
            catalog.lookup("pages.features.title"),
            Some(Translation::Text("Feature comparison".to_string()))
        );
        assert_eq!(catalog.lookup("pages.features"), Some(Translation::Node));
        assert_eq!(catalog.lookup("pages"), Some(Translation::Node));
        assert_eq!(catalog.lookup("pages.missing"), None);
    }

    #[test]
    fn test_symbol_values() {
        let catalog = Catalog::from_str(FIXTURE).expect("Should parse");
        assert_eq!(
            catalog.lookup("pages.features.format"),
            Some(Translation::Symbol("promo".to_string()))
        );
        // a template that merely starts with ':' stays text
        assert_eq!(
            catalog.lookup("pages.signup.format"),
            Some(Translation::Text("Sign up for :app now!".to_string()))
        );
    }

    #[test]
    fn test_translate_with_arguments() {
        let catalog = Catalog::from_str(FIXTURE).expect("Should parse");
        assert_eq!(
            catalog.translate("placeholder", &[("name", "Bella")]),
            Some("Displaying Bella".to_string())
        );
        assert_eq!(
            catalog.translate("placeholder", &[]),
            Some("Displaying %{name}".to_string())
        );
        assert_eq!(catalog.translate("nope", &[]), None);
    }

    #[test]
    fn test_substitute_unterminated_token() {
        assert_eq!(substitute_args("50%{ off", &[("x", "y")]), "50%{ off");
    }

    #[test]
    fn test_insert() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());
        catalog.insert("app.name", "Shop");
        catalog.insert_symbol("shop.index.format", "promo");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup_text("app.name"), Some("Shop".to_string()));
    }

    #[test]
    fn test_rejects_non_string_leaves() {
        let result = Catalog::from_str("count = 3");
        assert!(matches!(result, Err(CatalogError::UnsupportedValue { .. })));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Catalog::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
