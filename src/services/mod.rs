//! The ingestion core: content fingerprinting, compression, replica
//! placement, the object catalog and the activity log, orchestrated by
//! `StorageService`.

pub mod activity_log;
pub mod catalog;
pub mod compression;
pub mod failure;
pub mod fingerprint;
pub mod replication;
pub mod storage_service;
pub mod tiering;
