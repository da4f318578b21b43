//! Row structs for the tables the migration reads and writes.
//!
//! Both tables are owned by the scheduling system; these structs only
//! cover the columns this crate needs.

pub mod inst_coll;
pub mod pool;
