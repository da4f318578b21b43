//! Deployment scope and the set of scopes the migration never touches.

use std::fmt;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Scopes in which the migration performs no writes.
///
/// Matching is exact and case-sensitive: `"Dev"` is not excluded.
pub const EXCLUDED_SCOPES: [&str; 2] = ["dev", "deploy"];

// ---------------------------------------------------------------------------
// Scope
// ---------------------------------------------------------------------------

/// A deployment-environment tag such as `dev`, `deploy`, `prod` or `test`.
///
/// Any string is a valid scope, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope(String);

impl Scope {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this scope is one of [`EXCLUDED_SCOPES`].
    pub fn is_excluded(&self) -> bool {
        EXCLUDED_SCOPES.contains(&self.0.as_str())
    }
}

impl From<&str> for Scope {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Scope {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_and_deploy_are_excluded() {
        assert!(Scope::from("dev").is_excluded());
        assert!(Scope::from("deploy").is_excluded());
    }

    #[test]
    fn other_scopes_are_not_excluded() {
        for value in ["prod", "test", "test2", "", "development", " dev", "arbitrary text"] {
            assert!(!Scope::from(value).is_excluded(), "{value:?} should apply");
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!Scope::from("DEV").is_excluded());
        assert!(!Scope::from("Deploy").is_excluded());
    }

    #[test]
    fn display_is_raw_value() {
        assert_eq!(Scope::from("test").to_string(), "test");
        assert_eq!(Scope::new(String::from("prod")).as_str(), "prod");
    }
}
