//! `poolcap-migrate` -- one-off pool limits migration.
//!
//! Sets every pool to 8 worker cores and caps every instance collection
//! at 2 instances / 2 live instances, unless the deployment scope is
//! `dev` or `deploy`.
//!
//! # Environment variables
//!
//! | Variable                  | Required | Default | Description                        |
//! |---------------------------|----------|---------|------------------------------------|
//! | `SCOPE`                   | yes      | --      | Deployment scope tag               |
//! | `DATABASE_URL`            | yes*     | --      | Postgres URL (*unless scope skips) |
//! | `DB_ACQUIRE_TIMEOUT_SECS` | no       | `30`    | Connection acquire timeout         |

use poolcap_migrate::config::MigrationConfig;
use poolcap_migrate::runner::{self, MigrationOutcome};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poolcap_migrate=info,poolcap_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MigrationConfig::from_env().unwrap_or_else(|err| {
        tracing::error!(error = %err.report(), "Invalid configuration");
        std::process::exit(1);
    });

    tracing::info!(scope = %config.scope, "Starting pool limits migration");

    match runner::run(&config).await {
        Ok(MigrationOutcome::Skipped { scope }) => {
            tracing::info!(scope = %scope, "Nothing to do");
        }
        Ok(MigrationOutcome::Applied {
            pools_updated,
            inst_colls_updated,
        }) => {
            tracing::info!(pools_updated, inst_colls_updated, "Migration complete");
        }
        Err(err) => {
            tracing::error!(error = %err.report(), "Migration failed");
            std::process::exit(1);
        }
    }
}
