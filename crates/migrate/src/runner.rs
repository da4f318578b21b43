//! Scope-gated pool limits migration.
//!
//! Outside the `dev` and `deploy` scopes, sets `worker_cores` on every
//! pool and caps the instance counts on every instance collection. The
//! two statements run in order and are not wrapped in a shared
//! transaction: if the second fails, the first stays applied.

use std::time::Duration;

use poolcap_core::limits::PoolLimits;
use poolcap_core::scope::Scope;
use poolcap_db::repositories::{InstCollRepo, PoolRepo};
use poolcap_db::DbPool;

use crate::config::MigrationConfig;
use crate::error::{MigrationError, MigrationResult};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The scope is excluded; no connection was made and nothing was written.
    Skipped { scope: Scope },
    /// Both statements ran. Counts are rows affected per table.
    Applied {
        pools_updated: u64,
        inst_colls_updated: u64,
    },
}

/// Run the migration end to end with the default target limits.
///
/// Checks the scope gate before touching the database. The connection pool
/// is closed before returning on both the success and failure paths.
pub async fn run(config: &MigrationConfig) -> MigrationResult<MigrationOutcome> {
    if config.scope.is_excluded() {
        tracing::info!(scope = %config.scope, "Scope excluded, skipping migration");
        return Ok(MigrationOutcome::Skipped {
            scope: config.scope.clone(),
        });
    }

    let limits = PoolLimits::default();
    limits.validate()?;

    let database_url = config.require_database_url()?;
    let acquire_timeout = config.require_acquire_timeout()?;
    let pool = connect(database_url, acquire_timeout).await?;

    let result = apply(&pool, &limits).await;
    pool.close().await;
    tracing::debug!("Database connection pool closed");

    result
}

/// Check the scope gate, then apply `limits` on a caller-owned pool.
pub async fn run_on_pool(
    scope: &Scope,
    pool: &DbPool,
    limits: &PoolLimits,
) -> MigrationResult<MigrationOutcome> {
    if scope.is_excluded() {
        tracing::info!(scope = %scope, "Scope excluded, skipping migration");
        return Ok(MigrationOutcome::Skipped {
            scope: scope.clone(),
        });
    }
    limits.validate()?;
    apply(pool, limits).await
}

/// Issue the two bulk updates: pools first, then instance collections.
///
/// Does not check the scope gate.
pub async fn apply(pool: &DbPool, limits: &PoolLimits) -> MigrationResult<MigrationOutcome> {
    let pools_updated = PoolRepo::set_worker_cores(pool, limits.worker_cores)
        .await
        .map_err(|source| MigrationError::DatabaseOperation {
            table: "pools",
            source,
        })?;
    tracing::info!(
        rows = pools_updated,
        worker_cores = limits.worker_cores,
        "Updated pools",
    );

    let inst_colls_updated =
        InstCollRepo::cap_instances(pool, limits.max_instances, limits.max_live_instances)
            .await
            .map_err(|source| MigrationError::DatabaseOperation {
                table: "inst_colls",
                source,
            })?;
    tracing::info!(
        rows = inst_colls_updated,
        max_instances = limits.max_instances,
        max_live_instances = limits.max_live_instances,
        "Updated instance collections",
    );

    Ok(MigrationOutcome::Applied {
        pools_updated,
        inst_colls_updated,
    })
}

async fn connect(database_url: &str, acquire_timeout: Duration) -> MigrationResult<DbPool> {
    let pool = poolcap_db::create_pool(database_url, acquire_timeout)
        .await
        .map_err(MigrationError::Connection)?;

    if let Err(err) = poolcap_db::health_check(&pool).await {
        pool.close().await;
        return Err(MigrationError::Connection(err));
    }

    tracing::info!("Database connection established");
    Ok(pool)
}
