//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod inst_coll_repo;
pub mod pool_repo;

pub use inst_coll_repo::InstCollRepo;
pub use pool_repo::PoolRepo;
