//! Request context: which controller and action is being rendered

/// The controller/action pair a title is resolved for
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestContext {
    controller_path: String,
    action_name: String,
}

impl RequestContext {
    /// Create a context from a controller path (`admin/account`) and action
    pub fn new(controller_path: impl Into<String>, action_name: impl Into<String>) -> Self {
        Self {
            controller_path: controller_path.into(),
            action_name: action_name.into(),
        }
    }

    /// Full controller path, e.g. `admin/account`
    pub fn controller_path(&self) -> &str {
        &self.controller_path
    }

    /// Last segment of the controller path, e.g. `account`
    pub fn controller_name(&self) -> &str {
        self.controller_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.controller_path)
    }

    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    /// Switch to another controller/action
    pub fn set(&mut self, controller_path: impl Into<String>, action_name: impl Into<String>) {
        self.controller_path = controller_path.into();
        self.action_name = action_name.into();
    }

    /// Translation key prefix for the controller: `admin/account` -> `admin.account`
    pub fn controller_key(&self) -> String {
        self.controller_path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// `<controller>.<action>.<suffix>`
    pub fn action_key(&self, action: &str, suffix: &str) -> String {
        let controller = self.controller_key();
        join_key(&[controller.as_str(), action, suffix])
    }
}

/// Join key parts with `.`, skipping empty parts
pub(crate) fn join_key(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(".")
}

/// Turn an identifier into a human readable phrase.
///
/// `page_title_helper` becomes `Page title helper`, `author_id` becomes `Author`.
pub fn humanize(word: &str) -> String {
    let word = word.strip_suffix("_id").unwrap_or(word);
    let spaced = word.replace('_', " ").trim().to_lowercase();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
