//! Pure domain types for the scope-gated pool limits migration.
//!
//! Nothing in this crate touches the database; it is shared by the `db`
//! and `migrate` crates.

pub mod error;
pub mod limits;
pub mod scope;
pub mod types;
