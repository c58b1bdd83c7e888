//! Defines the HTTP surface over the ingestion pipeline.
//!
//! ## Structure
//! - `GET  /`                 — dashboard page
//! - `GET  /healthz`          — liveness
//! - `POST /upload`           — multipart upload (`file`, `tier`, `redundancy`)
//! - `GET  /stats`            — aggregate statistics
//! - `GET  /logs`             — activity log, oldest first
//! - `GET  /files`            — all records in upload order
//! - `GET  /files/{id}`       — one record; counts as a read
//! - `GET  /tiers`            — tier cost and latency table
//! - `POST /optimize`         — demote unread objects to cold
//! - `POST /simulate-failure` — append the failover narrative to the log

use crate::{
    handlers::{
        dashboard::index,
        health_handlers::healthz,
        object_handlers::{
            get_file, get_logs, get_stats, list_files, list_tiers, optimize_storage,
            simulate_failure, upload_file,
        },
    },
    services::storage_service::StorageService,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

/// Build the router. `max_upload_bytes` caps request bodies before any
/// handler reads them.
pub fn routes(max_upload_bytes: usize) -> Router<StorageService> {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/upload", post(upload_file))
        .route("/stats", get(get_stats))
        .route("/logs", get(get_logs))
        .route("/files", get(list_files))
        .route("/files/{id}", get(get_file))
        .route("/tiers", get(list_tiers))
        .route("/optimize", post(optimize_storage))
        .route("/simulate-failure", post(simulate_failure))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
