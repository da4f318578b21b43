use std::time::Duration;

use poolcap_core::scope::Scope;

use crate::error::{MigrationError, MigrationResult};

/// Default connection acquire timeout in seconds.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Migration configuration loaded once at startup.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    /// Deployment scope. `dev` and `deploy` skip all writes.
    pub scope: Scope,
    /// Postgres connection string. Only required when the scope applies.
    pub database_url: Option<String>,
    /// Raw `DB_ACQUIRE_TIMEOUT_SECS`. Parsed only when the scope applies.
    pub acquire_timeout_secs: Option<String>,
}

impl MigrationConfig {
    /// Build a config that uses the default acquire timeout.
    pub fn new(scope: impl Into<Scope>, database_url: Option<String>) -> Self {
        Self {
            scope: scope.into(),
            database_url,
            acquire_timeout_secs: None,
        }
    }

    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default  |
    /// |---------------------------|----------|
    /// | `SCOPE`                   | required |
    /// | `DATABASE_URL`            | none     |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`     |
    pub fn from_env() -> MigrationResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> MigrationResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let scope = lookup("SCOPE").ok_or_else(|| {
            MigrationError::Configuration("SCOPE environment variable is required".into())
        })?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let acquire_timeout_secs = lookup("DB_ACQUIRE_TIMEOUT_SECS");

        Ok(Self {
            scope: Scope::new(scope),
            database_url,
            acquire_timeout_secs,
        })
    }

    /// The database URL, or a configuration error when it is unset.
    pub fn require_database_url(&self) -> MigrationResult<&str> {
        self.database_url.as_deref().ok_or_else(|| {
            MigrationError::Configuration("DATABASE_URL environment variable is required".into())
        })
    }

    /// The connection acquire timeout, or a configuration error when
    /// `DB_ACQUIRE_TIMEOUT_SECS` is not a valid `u64`.
    pub fn require_acquire_timeout(&self) -> MigrationResult<Duration> {
        let secs = match self.acquire_timeout_secs.as_deref() {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                MigrationError::Configuration(format!(
                    "DB_ACQUIRE_TIMEOUT_SECS must be a valid u64, got {raw:?}"
                ))
            })?,
            None => DEFAULT_ACQUIRE_TIMEOUT_SECS,
        };
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_scope_is_configuration_error() {
        let result = MigrationConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x")]));
        assert!(matches!(result, Err(MigrationError::Configuration(_))));
    }

    #[test]
    fn empty_scope_is_accepted() {
        let config = MigrationConfig::from_lookup(lookup_from(&[("SCOPE", "")])).unwrap();
        assert_eq!(config.scope.as_str(), "");
        assert!(!config.scope.is_excluded());
    }

    #[test]
    fn defaults_applied() {
        let config = MigrationConfig::from_lookup(lookup_from(&[("SCOPE", "prod")])).unwrap();
        assert_eq!(config.scope.as_str(), "prod");
        assert!(config.database_url.is_none());
        assert_eq!(
            config.require_acquire_timeout().unwrap(),
            Duration::from_secs(30)
        );
    }

    #[test]
    fn all_values_read() {
        let config = MigrationConfig::from_lookup(lookup_from(&[
            ("SCOPE", "test"),
            ("DATABASE_URL", "postgres://localhost/batch"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.require_database_url().unwrap(), "postgres://localhost/batch");
        assert_eq!(
            config.require_acquire_timeout().unwrap(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn blank_database_url_treated_as_unset() {
        let config =
            MigrationConfig::from_lookup(lookup_from(&[("SCOPE", "test"), ("DATABASE_URL", " ")]))
                .unwrap();
        assert!(matches!(
            config.require_database_url(),
            Err(MigrationError::Configuration(_))
        ));
    }

    #[test]
    fn invalid_timeout_is_configuration_error() {
        let config = MigrationConfig::from_lookup(lookup_from(&[
            ("SCOPE", "test"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap();
        assert!(matches!(
            config.require_acquire_timeout(),
            Err(MigrationError::Configuration(_))
        ));
    }

    #[test]
    fn invalid_timeout_does_not_fail_loading() {
        let config = MigrationConfig::from_lookup(lookup_from(&[
            ("SCOPE", "dev"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "soon"),
        ]));
        assert!(config.is_ok());
    }
}
