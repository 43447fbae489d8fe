//! Per-call interpolation context

use std::collections::HashMap;

use crate::request::RequestContext;

use super::registry::Interpolations;

/// Values visible to placeholder functions during one interpolation.
///
/// Built from the caller's options plus the resolved `title` and `app`. Lives
/// for a single resolution call.
#[derive(Clone)]
pub struct Env<'a> {
    registry: &'a Interpolations,
    values: HashMap<String, String>,
    request: Option<&'a RequestContext>,
}

impl<'a> Env<'a> {
    /// Create an empty context bound to a registry
    pub fn new(registry: &'a Interpolations) -> Self {
        Self {
            registry,
            values: HashMap::new(),
            request: None,
        }
    }

    /// Create a context from `(key, value)` pairs
    pub fn with_values<K, V>(registry: &'a Interpolations, values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut env = Self::new(registry);
        env.values
            .extend(values.into_iter().map(|(k, v)| (k.into(), v.into())));
        env
    }

    /// Set a value, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Attach the request being rendered
    pub fn with_request(mut self, request: &'a RequestContext) -> Self {
        self.request = Some(request);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    pub fn request(&self) -> Option<&'a RequestContext> {
        self.request
    }

    pub fn registry(&self) -> &'a Interpolations {
        self.registry
    }

    /// Evaluate another placeholder against this context.
    ///
    /// Unknown names evaluate to an empty string.
    pub fn placeholder(&self, name: &str) -> String {
        self.registry
            .resolve_placeholder(name, self)
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("values", &self.values)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_and_request() {
        let registry = Interpolations::new();
        let request = RequestContext::new("contacts", "list");
        let env = Env::with_values(&registry, [("title", "Inbox")])
            .with("app", "Mail")
            .with_request(&request);

        assert_eq!(env.get("title"), Some("Inbox"));
        assert_eq!(env.get("app"), Some("Mail"));
        assert_eq!(env.get("missing"), None);
        assert_eq!(env.request().map(|r| r.action_name()), Some("list"));
    }

    #[test]
    fn test_placeholder_composes() {
        let registry = Interpolations::new();
        let env = Env::new(&registry).with("title", "Inbox");
        assert_eq!(env.placeholder("title"), "Inbox");
        assert_eq!(env.placeholder("unregistered"), "");
    }
}
