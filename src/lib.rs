//! Simulated object-storage ingestion service: content deduplication,
//! compression, tier assignment and replica placement over an in-memory
//! catalog, with an HTTP front end.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use axum::Router;
use services::storage_service::StorageService;

/// Router wired to `service`, ready to serve.
pub fn app(service: StorageService, max_upload_bytes: usize) -> Router {
    routes::routes::routes(max_upload_bytes).with_state(service)
}
