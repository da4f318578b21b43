use poolcap_core::types::DbId;
use sqlx::FromRow;

/// A row from the `inst_colls` table.
#[derive(Debug, Clone, FromRow)]
pub struct InstColl {
    pub id: DbId,
    pub name: String,
    pub max_instances: i32,
    pub max_live_instances: i32,
}
