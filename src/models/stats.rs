//! Aggregate space accounting maintained alongside the catalog.

use serde::{Deserialize, Serialize};

/// Running totals across every accepted object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SystemStatistics {
    /// Equal to the number of records in the catalog.
    pub total_files: u64,

    pub total_original_size: u64,

    /// Bytes at rest across all replicas: each object's compressed size
    /// multiplied by its own redundancy.
    pub total_compressed_size: u64,

    /// Rejected uploads only.
    pub duplicates_removed: u64,

    /// Redundancy used by the most recent successful upload.
    pub redundancy_level: u32,
}

impl SystemStatistics {
    /// Starts with the default redundancy so the dashboard has something
    /// sensible to show before the first upload.
    pub fn new(redundancy_level: u32) -> Self {
        Self {
            redundancy_level,
            ..Self::default()
        }
    }

    /// Share of original bytes no longer stored, counting replication.
    /// Goes negative when replication outweighs compression.
    pub fn space_savings_percent(&self) -> f64 {
        if self.total_original_size == 0 {
            return 0.0;
        }
        (1.0 - self.total_compressed_size as f64 / self.total_original_size as f64) * 100.0
    }
}
