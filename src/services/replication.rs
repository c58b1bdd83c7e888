//! Replica placement across a fixed pool of regions.
//!
//! Planning is a pure computation; the pipeline records the log entry.

use crate::models::object::ReplicationMap;

/// Regions available for placement, in preference order. The first entry
/// always holds the primary copy.
pub const REGION_POOL: [&str; 5] = [
    "us-east",
    "us-west",
    "eu-central",
    "asia-pacific",
    "south-america",
];

/// Place `redundancy` copies: the primary in the first region and the
/// backups in the following ones. Requests beyond the pool size are capped
/// to the regions available; `redundancy` of 0 or 1 yields no backups.
pub fn plan(redundancy: u32) -> ReplicationMap {
    let backups = (redundancy as usize).saturating_sub(1);
    ReplicationMap {
        primary: REGION_POOL[0].to_string(),
        replicas: REGION_POOL[1..]
            .iter()
            .take(backups)
            .map(|region| region.to_string())
            .collect(),
    }
}

/// Largest redundancy that maps every copy to a distinct region.
pub fn max_redundancy() -> u32 {
    REGION_POOL.len() as u32
}
