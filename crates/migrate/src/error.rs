use std::error::Error;

use poolcap_core::error::CoreError;

/// Every way a migration run can fail.
///
/// None of these are retried; they propagate to `main`, which exits with a
/// non-zero status.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// A required environment value is missing or malformed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The database could not be reached or refused the connection.
    #[error("Failed to connect to the database")]
    Connection(#[source] sqlx::Error),

    /// A statement failed after the connection was established.
    #[error("Database operation on `{table}` failed")]
    DatabaseOperation {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A domain-level error from `poolcap_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience alias for runner return values.
pub type MigrationResult<T> = Result<T, MigrationError>;

impl MigrationError {
    /// This error followed by each of its sources, joined with `": "`.
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            report.push_str(": ");
            report.push_str(&err.to_string());
            source = err.source();
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_report_names_cause_once() {
        let cause = sqlx::Error::PoolTimedOut.to_string();
        let err = MigrationError::Connection(sqlx::Error::PoolTimedOut);

        assert!(!err.to_string().contains(&cause));
        let report = err.report();
        assert!(report.starts_with("Failed to connect to the database: "));
        assert_eq!(report.matches(cause.as_str()).count(), 1);
    }

    #[test]
    fn database_operation_report_names_table_and_cause() {
        let cause = sqlx::Error::RowNotFound.to_string();
        let err = MigrationError::DatabaseOperation {
            table: "inst_colls",
            source: sqlx::Error::RowNotFound,
        };

        assert_eq!(err.to_string(), "Database operation on `inst_colls` failed");
        assert_eq!(err.report().matches(cause.as_str()).count(), 1);
    }

    #[test]
    fn configuration_report_is_message() {
        let err = MigrationError::Configuration("SCOPE environment variable is required".into());
        assert_eq!(
            err.report(),
            "Configuration error: SCOPE environment variable is required"
        );
    }
}
