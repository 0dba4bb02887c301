//! Category directory: which admin owns which category
//!
//! The directory is fixed at process start (from configuration) and doubles
//! as the validator for user-supplied categories. Lookups are
//! case-insensitive linear scans; the list is small and categories are
//! distinct, so no ordering concerns apply.

use serde::{Deserialize, Serialize};

/// Placeholder owner for categories without a configured admin
pub const NO_ADMIN_FOUND: &str = "No Admin Found";

/// An admin responsible for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub name: String,
    pub category: String,
}

impl Admin {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

/// Static mapping of category name to responsible admin
#[derive(Debug, Clone)]
pub struct CategoryDirectory {
    admins: Vec<Admin>,
}

impl CategoryDirectory {
    /// Build a directory from configured admins
    #[must_use]
    pub fn new(admins: Vec<Admin>) -> Self {
        Self { admins }
    }

    /// Whether the given category exists, ignoring case
    #[must_use]
    pub fn is_valid(&self, category: &str) -> bool {
        self.admins
            .iter()
            .any(|admin| admin.category.eq_ignore_ascii_case(category.trim()))
    }

    /// Name of the admin owning the category, ignoring case
    #[must_use]
    pub fn resolve_admin(&self, category: &str) -> Option<&str> {
        self.admins
            .iter()
            .find(|admin| admin.category.eq_ignore_ascii_case(category.trim()))
            .map(|admin| admin.name.as_str())
    }

    /// Canonical category names, in configuration order
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.admins
            .iter()
            .map(|admin| admin.category.as_str())
            .collect()
    }

    /// The stored form of a category: trimmed and uppercased
    #[must_use]
    pub fn normalize(category: &str) -> String {
        category.trim().to_uppercase()
    }
}

/// The stock helpdesk directory: Alice/IT, Bob/HR, Charlie/Finance
#[must_use]
pub fn default_admins() -> Vec<Admin> {
    vec![
        Admin::new("Alice", "IT"),
        Admin::new("Bob", "HR"),
        Admin::new("Charlie", "Finance"),
    ]
}

impl Default for CategoryDirectory {
    fn default() -> Self {
        Self::new(default_admins())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_ignores_case() {
        let directory = CategoryDirectory::default();
        assert!(directory.is_valid("it"));
        assert!(directory.is_valid("IT"));
        assert!(directory.is_valid("It"));
        assert!(!directory.is_valid("Sales"));
    }

    #[test]
    fn test_resolve_admin() {
        let directory = CategoryDirectory::default();
        assert_eq!(directory.resolve_admin("finance"), Some("Charlie"));
        assert_eq!(directory.resolve_admin("HR"), Some("Bob"));
        assert_eq!(directory.resolve_admin("Sales"), None);
    }

    #[test]
    fn test_resolve_admin_trims_whitespace() {
        let directory = CategoryDirectory::default();
        assert_eq!(directory.resolve_admin("  it  "), Some("Alice"));
    }

    #[test]
    fn test_normalize_uppercases() {
        assert_eq!(CategoryDirectory::normalize(" hr "), "HR");
        assert_eq!(CategoryDirectory::normalize("Finance"), "FINANCE");
    }

    #[test]
    fn test_categories_in_configuration_order() {
        let directory = CategoryDirectory::default();
        assert_eq!(directory.categories(), vec!["IT", "HR", "Finance"]);
    }
}
