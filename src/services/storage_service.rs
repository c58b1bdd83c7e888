//! src/services/storage_service.rs
//!
//! StorageService — the ingestion pipeline. It owns the object catalog,
//! the running statistics and the activity log, and serializes every
//! mutation of them behind one lock. Hashing and compression happen before
//! the lock is taken; the duplicate check through the record insert
//! happens inside it, so identical concurrent uploads cannot both land.

use crate::{
    models::{
        log::LogEntry,
        object::{ObjectRecord, Tier, UnknownTier},
        stats::SystemStatistics,
    },
    services::{
        activity_log::ActivityLog,
        catalog::Catalog,
        compression, failure,
        fingerprint::fingerprint,
        replication::{self, max_redundancy},
        tiering,
    },
};
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Tier applied when the caller does not ask for one.
pub const DEFAULT_TIER: Tier = Tier::Warm;

/// Copies kept when the caller does not ask for a specific count.
pub const DEFAULT_REDUNDANCY: u32 = 3;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no file content provided")]
    EmptyInput,
    #[error("tier `{0}` is not one of hot, warm, cold")]
    InvalidTier(String),
    #[error("redundancy {0} must be between 1 and {max}", max = max_redundancy())]
    InvalidRedundancy(u32),
    #[error("object {0} not found")]
    ObjectNotFound(u64),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Result of a well-formed upload. A duplicate is a recognized outcome,
/// not a failure.
#[derive(Debug, Clone)]
pub enum IngestOutcome {
    Stored(ObjectRecord),
    Duplicate {
        /// Id of the record that already holds this content.
        existing_id: u64,
        fingerprint: String,
    },
}

#[derive(Debug)]
struct Store {
    catalog: Catalog,
    log: ActivityLog,
}

/// Shared handle to the pipeline state. Cloning is cheap; all clones see
/// the same catalog.
#[derive(Clone)]
pub struct StorageService {
    inner: Arc<Mutex<Store>>,
}

impl Default for StorageService {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageService {
    /// Create an empty catalog and activity log.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Store {
                catalog: Catalog::new(DEFAULT_REDUNDANCY),
                log: ActivityLog::default(),
            })),
        }
    }

    /// Record that the process is up and accepting uploads.
    pub fn announce_startup(&self) {
        let mut store = self.inner.lock();
        store.log.success("Cloud Storage System started");
        store.log.info("System ready for file uploads");
    }

    /// Run one upload through deduplication, compression and placement.
    ///
    /// Parameters are validated before anything is logged or counted:
    /// an empty body, an unknown tier or a redundancy outside
    /// `1..=max_redundancy()` is rejected without side effects.
    pub fn ingest(
        &self,
        name: &str,
        data: &[u8],
        tier: &str,
        redundancy: u32,
    ) -> StorageResult<IngestOutcome> {
        if data.is_empty() {
            return Err(StorageError::EmptyInput);
        }
        let tier: Tier = tier
            .parse()
            .map_err(|UnknownTier(t)| StorageError::InvalidTier(t))?;
        if redundancy == 0 || redundancy > max_redundancy() {
            return Err(StorageError::InvalidRedundancy(redundancy));
        }

        let original_size = data.len() as u64;
        let fingerprint = fingerprint(data);
        let compressed = compression::compress(data);
        let compressed_size = compressed.data.len() as u64;
        debug!(%fingerprint, original_size, compressed_size, "digested upload");

        let mut store = self.inner.lock();
        let Store { catalog, log } = &mut *store;

        log.info(format!("Received file: {name} ({original_size} bytes)"));

        if let Some(existing_id) = catalog.find_by_fingerprint(&fingerprint) {
            catalog.record_duplicate();
            log.warning(format!("Duplicate detected! File {name} already exists"));
            return Ok(IngestOutcome::Duplicate {
                existing_id,
                fingerprint,
            });
        }

        log.success(format!(
            "Compressed {name}: {original_size}B -> {compressed_size}B ({:.1}% reduction)",
            compressed.ratio_percent
        ));

        let id = catalog.next_id();
        let replication_map = replication::plan(redundancy);
        log.success(format!("Replicated file {id} to {redundancy} regions"));

        let record = ObjectRecord {
            id,
            name: name.to_string(),
            fingerprint,
            original_size,
            compressed_size,
            compression_ratio: compressed.ratio_percent,
            tier,
            redundancy,
            replication_map,
            access_count: 0,
            upload_time: Utc::now(),
        };
        catalog.insert(record.clone());

        log.success(format!(
            "Stored {name} in {tier} tier with {redundancy}x replication"
        ));

        Ok(IngestOutcome::Stored(record))
    }

    /// Fetch one record and count the read.
    pub fn get_object(&self, id: u64) -> StorageResult<ObjectRecord> {
        let mut store = self.inner.lock();
        let record = store
            .catalog
            .get_mut(id)
            .ok_or(StorageError::ObjectNotFound(id))?;
        record.access_count += 1;
        Ok(record.clone())
    }

    /// All records in insertion order.
    pub fn list_objects(&self) -> Vec<ObjectRecord> {
        self.inner.lock().catalog.records().to_vec()
    }

    pub fn statistics(&self) -> SystemStatistics {
        self.inner.lock().catalog.stats().clone()
    }

    /// Log entries, most recent last.
    pub fn activity_log(&self) -> Vec<LogEntry> {
        self.inner.lock().log.entries()
    }

    /// Demote never-read objects to the cold tier. Returns how many moved.
    pub fn optimize(&self) -> usize {
        let mut store = self.inner.lock();
        let Store { catalog, log } = &mut *store;
        tiering::optimize(catalog, log)
    }

    /// Append the scripted failover narrative to the activity log.
    pub fn simulate_failure(&self) {
        failure::simulate_failure(&mut self.inner.lock().log);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::log::LogLevel;
    use crate::services::activity_log::LOG_CAPACITY;
    use std::thread;

    fn stored(outcome: IngestOutcome) -> ObjectRecord {
        match outcome {
            IngestOutcome::Stored(record) => record,
            other => panic!("expected stored record, got {other:?}"),
        }
    }

    #[test]
    fn stores_then_rejects_duplicate() {
        let service = StorageService::new();

        let record = stored(service.ingest("abc.txt", b"abc", "hot", 2).unwrap());
        assert_eq!(record.id, 1);
        assert_eq!(record.original_size, 3);
        assert_eq!(record.tier, Tier::Hot);
        assert_eq!(record.replication_map.replicas.len(), 1);
        assert_eq!(service.list_objects().len(), 1);

        let again = service.ingest("copy.txt", b"abc", "hot", 2).unwrap();
        match again {
            IngestOutcome::Duplicate {
                existing_id,
                fingerprint,
            } => {
                assert_eq!(existing_id, 1);
                assert_eq!(fingerprint, record.fingerprint);
            }
            other => panic!("expected duplicate, got {other:?}"),
        }

        let stats = service.statistics();
        assert_eq!(stats.duplicates_removed, 1);
        assert_eq!(stats.total_files, 1);
        assert_eq!(service.list_objects().len(), 1);
    }

    #[test]
    fn compressed_total_scales_with_redundancy() {
        let service = StorageService::new();
        let data = b"Hello World! ".repeat(100);

        let record = stored(service.ingest("hello.txt", &data, "warm", 3).unwrap());
        let stats = service.statistics();
        assert_eq!(stats.total_original_size, data.len() as u64);
        assert_eq!(stats.total_compressed_size, record.compressed_size * 3);
        assert_eq!(stats.redundancy_level, 3);

        let other = stored(service.ingest("other.bin", b"other", "cold", 5).unwrap());
        let stats = service.statistics();
        assert_eq!(
            stats.total_compressed_size,
            record.compressed_size * 3 + other.compressed_size * 5
        );
        assert_eq!(stats.redundancy_level, 5);
        assert_eq!(other.id, 2);
    }

    #[test]
    fn successful_ingest_logs_full_sequence() {
        let service = StorageService::new();
        service.ingest("a.txt", b"payload", "warm", 1).unwrap();

        let log = service.activity_log();
        let levels: Vec<_> = log.iter().map(|e| e.level).collect();
        assert_eq!(
            levels,
            vec![
                LogLevel::Info,
                LogLevel::Success,
                LogLevel::Success,
                LogLevel::Success,
            ]
        );
        assert_eq!(log[0].message, "Received file: a.txt (7 bytes)");
        assert_eq!(log[2].message, "Replicated file 1 to 1 regions");
        assert_eq!(log[3].message, "Stored a.txt in warm tier with 1x replication");
    }

    #[test]
    fn rejects_empty_input_without_side_effects() {
        let service = StorageService::new();
        let err = service.ingest("empty", b"", "warm", 3).unwrap_err();
        assert!(matches!(err, StorageError::EmptyInput));
        assert!(service.activity_log().is_empty());
        assert_eq!(service.statistics(), SystemStatistics::new(DEFAULT_REDUNDANCY));
    }

    #[test]
    fn rejects_bad_parameters_without_side_effects() {
        let service = StorageService::new();

        let err = service.ingest("a", b"x", "lukewarm", 3).unwrap_err();
        assert!(matches!(err, StorageError::InvalidTier(t) if t == "lukewarm"));

        for redundancy in [0, max_redundancy() + 1] {
            let err = service.ingest("a", b"x", "hot", redundancy).unwrap_err();
            assert!(matches!(err, StorageError::InvalidRedundancy(r) if r == redundancy));
        }

        assert!(service.activity_log().is_empty());
        assert!(service.list_objects().is_empty());
    }

    #[test]
    fn reads_protect_objects_from_optimizer() {
        let service = StorageService::new();
        for (i, body) in [&b"one"[..], b"two", b"three"].into_iter().enumerate() {
            service.ingest(&format!("f{i}"), body, "warm", 2).unwrap();
        }

        let read = service.get_object(2).unwrap();
        assert_eq!(read.access_count, 1);

        assert_eq!(service.optimize(), 2);
        assert_eq!(service.optimize(), 0);

        let tiers: Vec<_> = service.list_objects().iter().map(|r| r.tier).collect();
        assert_eq!(tiers, vec![Tier::Cold, Tier::Warm, Tier::Cold]);
    }

    #[test]
    fn optimize_moves_all_unread_warm_objects() {
        let service = StorageService::new();
        for body in [&b"a"[..], b"b", b"c"] {
            service.ingest("f", body, "warm", 3).unwrap();
        }

        assert_eq!(service.optimize(), 3);
        assert!(service.list_objects().iter().all(|r| r.tier == Tier::Cold));
    }

    #[test]
    fn missing_object_is_reported() {
        let service = StorageService::new();
        assert!(matches!(
            service.get_object(7),
            Err(StorageError::ObjectNotFound(7))
        ));
    }

    #[test]
    fn failure_simulation_leaves_catalog_alone() {
        let service = StorageService::new();
        service.ingest("a", b"data", "hot", 2).unwrap();
        let before = service.statistics();

        service.simulate_failure();

        assert_eq!(service.statistics(), before);
        assert_eq!(service.list_objects().len(), 1);
        let log = service.activity_log();
        assert_eq!(log.len(), 4 + 5);
        assert_eq!(log[4].level, LogLevel::Error);
    }

    #[test]
    fn log_stays_bounded_under_load() {
        let service = StorageService::new();
        for i in 0..20 {
            service
                .ingest("f", format!("body {i}").as_bytes(), "warm", 1)
                .unwrap();
        }
        assert_eq!(service.activity_log().len(), LOG_CAPACITY);
    }

    #[test]
    fn concurrent_identical_uploads_store_once() {
        let service = StorageService::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let service = service.clone();
                thread::spawn(move || {
                    service
                        .ingest(&format!("copy-{i}"), b"same bytes", "warm", 3)
                        .unwrap()
                })
            })
            .collect();

        let stored = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|o| matches!(o, IngestOutcome::Stored(_)))
            .count();

        assert_eq!(stored, 1);
        let stats = service.statistics();
        assert_eq!(stats.total_files, 1);
        assert_eq!(stats.duplicates_removed, 7);
    }

    #[test]
    fn startup_announcement() {
        let service = StorageService::new();
        service.announce_startup();
        let log = service.activity_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].message, "Cloud Storage System started");
    }
}
