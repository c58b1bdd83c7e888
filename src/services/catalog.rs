//! In-memory object catalog with a fingerprint index.

use crate::models::{object::ObjectRecord, stats::SystemStatistics};
use std::collections::HashMap;

/// Authoritative record of accepted objects plus their running totals.
///
/// Records live in an arena indexed by `id - 1`; ids are handed out in
/// insertion order and never reused. `by_fingerprint` is the secondary
/// index used for deduplication.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<ObjectRecord>,
    by_fingerprint: HashMap<String, u64>,
    stats: SystemStatistics,
}

impl Catalog {
    pub fn new(default_redundancy: u32) -> Self {
        Self {
            records: Vec::new(),
            by_fingerprint: HashMap::new(),
            stats: SystemStatistics::new(default_redundancy),
        }
    }

    /// Id of the record already holding this content, if any.
    pub fn find_by_fingerprint(&self, fingerprint: &str) -> Option<u64> {
        self.by_fingerprint.get(fingerprint).copied()
    }

    pub fn next_id(&self) -> u64 {
        self.records.len() as u64 + 1
    }

    /// Count one rejected duplicate upload.
    pub fn record_duplicate(&mut self) {
        self.stats.duplicates_removed += 1;
    }

    /// Store a new record and fold it into the statistics.
    ///
    /// The caller must have checked the fingerprint and taken `next_id()`
    /// under the same lock; both are asserted in debug builds.
    pub fn insert(&mut self, record: ObjectRecord) {
        debug_assert_eq!(record.id, self.next_id());
        debug_assert!(!self.by_fingerprint.contains_key(&record.fingerprint));

        self.stats.total_files += 1;
        self.stats.total_original_size += record.original_size;
        self.stats.total_compressed_size += record.compressed_size * u64::from(record.redundancy);
        self.stats.redundancy_level = record.redundancy;

        self.by_fingerprint
            .insert(record.fingerprint.clone(), record.id);
        self.records.push(record);
    }

    pub fn get(&self, id: u64) -> Option<&ObjectRecord> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.records.get(index)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut ObjectRecord> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.records.get_mut(index)
    }

    /// Insertion order.
    pub fn records(&self) -> &[ObjectRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut ObjectRecord> {
        self.records.iter_mut()
    }

    pub fn stats(&self) -> &SystemStatistics {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
