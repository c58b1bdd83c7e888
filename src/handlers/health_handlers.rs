//! Health handlers.
//!
//! - GET /healthz  -> liveness plus a one-line view of the catalog

use crate::services::storage_service::StorageService;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// `GET /healthz`
///
/// Always 200 while the process can take the catalog lock. Reports how
/// many objects are tracked so operators can spot an unexpected restart.
pub async fn healthz(State(service): State<StorageService>) -> impl IntoResponse {
    let stats = service.statistics();
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            objects: stats.total_files,
        }),
    )
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    objects: u64,
}
