//! Target values written by the migration, and their validation.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Core count assigned to every worker pool.
pub const TARGET_WORKER_CORES: i32 = 8;

/// Cap on concurrently running instances per instance collection.
pub const TARGET_MAX_INSTANCES: i32 = 2;

/// Cap on concurrently live instances per instance collection.
pub const TARGET_MAX_LIVE_INSTANCES: i32 = 2;

// ---------------------------------------------------------------------------
// PoolLimits
// ---------------------------------------------------------------------------

/// The values assigned to `pools` and `inst_colls` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolLimits {
    pub worker_cores: i32,
    pub max_instances: i32,
    pub max_live_instances: i32,
}

impl Default for PoolLimits {
    fn default() -> Self {
        Self {
            worker_cores: TARGET_WORKER_CORES,
            max_instances: TARGET_MAX_INSTANCES,
            max_live_instances: TARGET_MAX_LIVE_INSTANCES,
        }
    }
}

impl PoolLimits {
    /// Reject values the pool and instance-collection columns cannot hold
    /// meaningfully: `worker_cores` must be positive, instance caps
    /// non-negative.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.worker_cores <= 0 {
            return Err(CoreError::Validation(format!(
                "worker_cores must be positive, got {}",
                self.worker_cores
            )));
        }
        if self.max_instances < 0 {
            return Err(CoreError::Validation(format!(
                "max_instances must not be negative, got {}",
                self.max_instances
            )));
        }
        if self.max_live_instances < 0 {
            return Err(CoreError::Validation(format!(
                "max_live_instances must not be negative, got {}",
                self.max_live_instances
            )));
        }
        Ok(())
    }
}
