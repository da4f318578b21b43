//! Repository for the `inst_colls` table.

use sqlx::PgPool;

use crate::models::inst_coll::InstColl;

/// Column list for `inst_colls` queries.
const COLUMNS: &str = "id, name, max_instances, max_live_instances";

/// Reads and bulk-updates instance collections.
pub struct InstCollRepo;

impl InstCollRepo {
    /// List every instance collection ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<InstColl>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inst_colls ORDER BY id ASC");
        sqlx::query_as::<_, InstColl>(&query).fetch_all(pool).await
    }

    /// Cap `max_instances` and `max_live_instances` on every instance
    /// collection. Returns the number of rows updated.
    pub async fn cap_instances(
        pool: &PgPool,
        max_instances: i32,
        max_live_instances: i32,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE inst_colls SET max_instances = $1, max_live_instances = $2",
        )
        .bind(max_instances)
        .bind(max_live_instances)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
