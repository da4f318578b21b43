use poolcap_core::types::DbId;
use sqlx::FromRow;

/// A row from the `pools` table.
#[derive(Debug, Clone, FromRow)]
pub struct Pool {
    pub id: DbId,
    pub name: String,
    pub worker_cores: i32,
}
