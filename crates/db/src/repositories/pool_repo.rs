//! Repository for the `pools` table.

use sqlx::PgPool;

use crate::models::pool::Pool;

/// Column list for `pools` queries.
const COLUMNS: &str = "id, name, worker_cores";

/// Reads and bulk-updates worker pools.
pub struct PoolRepo;

impl PoolRepo {
    /// List every pool ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Pool>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pools ORDER BY id ASC");
        sqlx::query_as::<_, Pool>(&query).fetch_all(pool).await
    }

    /// Set `worker_cores` on every pool. Returns the number of rows updated.
    pub async fn set_worker_cores(pool: &PgPool, worker_cores: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE pools SET worker_cores = $1")
            .bind(worker_cores)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
