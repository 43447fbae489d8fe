//! Translation lookup seam
//!
//! The resolver never reads translation files itself; it asks a [`Translator`]
//! for dotted keys such as `contacts.list.title` and treats a missing key as
//! "try the next source".

/// A value found under a translation key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// Plain message text
    Text(String),
    /// A symbolic value: a key reference in title position, an alias name in
    /// format position
    Symbol(String),
    /// A subtree of further keys; never usable as a title
    Node,
}

/// Source of translated strings
pub trait Translator {
    /// Look up a dotted key, returning `None` when it does not exist
    fn lookup(&self, key: &str) -> Option<Translation>;

    /// Look up a key as text, treating empty strings and subtrees as missing
    fn lookup_text(&self, key: &str) -> Option<String> {
        match self.lookup(key)? {
            Translation::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

impl<F> Translator for F
where
    F: Fn(&str) -> Option<Translation>,
{
    fn lookup(&self, key: &str) -> Option<Translation> {
        self(key)
    }
}

/// A translator with no entries
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl Translator for NoTranslations {
    fn lookup(&self, _key: &str) -> Option<Translation> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_translator() {
        let t = |key: &str| match key {
            "app.name" => Some(Translation::Text("Wohaapp".to_string())),
            "app" => Some(Translation::Node),
            "blank" => Some(Translation::Text(String::new())),
            _ => None,
        };
        assert_eq!(t.lookup_text("app.name"), Some("Wohaapp".to_string()));
        assert_eq!(t.lookup_text("app"), None);
        assert_eq!(t.lookup_text("blank"), None);
        assert_eq!(t.lookup_text("missing"), None);
    }

    #[test]
    fn test_no_translations() {
        assert_eq!(NoTranslations.lookup("anything"), None);
    }
}
