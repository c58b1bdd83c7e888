//! HTTP handlers for uploads, catalog queries and maintenance actions.
//! Multipart parsing and parameter defaults live here; every decision is
//! delegated to `StorageService`.

use crate::{
    errors::AppError,
    models::{
        log::LogEntry,
        object::{ObjectRecord, Tier},
        stats::SystemStatistics,
    },
    services::storage_service::{
        DEFAULT_REDUNDANCY, DEFAULT_TIER, IngestOutcome, StorageService,
    },
};
use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use bytes::Bytes;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<ObjectRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_id: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: SystemStatistics,
    pub space_savings_percent: f64,
}

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub logs: Vec<LogEntry>,
}

#[derive(Debug, Serialize)]
pub struct FilesResponse {
    pub files: Vec<ObjectRecord>,
}

#[derive(Debug, Serialize)]
pub struct TierInfo {
    pub tier: Tier,
    pub cost_per_gb: f64,
    pub retrieval_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub message: String,
    pub files_optimized: usize,
}

#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// Fields pulled out of an upload form.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<(Option<String>, Bytes)>,
    tier: Option<String>,
    redundancy: Option<String>,
}

/// `POST /upload` — multipart form with `file`, optional `tier` and
/// optional `redundancy`.
pub async fn upload_file(
    State(service): State<StorageService>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut form = UploadForm::default();
    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let data = field.bytes().await?;
                form.file = Some((file_name, data));
            }
            Some("tier") => form.tier = Some(field.text().await?),
            Some("redundancy") => form.redundancy = Some(field.text().await?),
            _ => {}
        }
    }

    let (file_name, data) = form
        .file
        .ok_or_else(|| AppError::bad_request("No file provided"))?;
    let name = file_name
        .as_deref()
        .and_then(sanitize_filename)
        .ok_or_else(|| AppError::bad_request("No file selected"))?;

    let tier = form
        .tier
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TIER.to_string());
    let redundancy = match form.redundancy.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_REDUNDANCY,
        Some(raw) => raw.parse::<u32>().map_err(|_| {
            AppError::bad_request(format!("redundancy `{}` is not a positive integer", raw))
        })?,
    };

    let outcome = tokio::task::spawn_blocking(move || {
        service.ingest(&name, &data, &tier, redundancy)
    })
    .await
    .map_err(|err| AppError::internal(format!("ingest task failed: {}", err)))??;

    let response = match outcome {
        IngestOutcome::Stored(record) => UploadResponse {
            message: format!(
                "File uploaded successfully with {}x redundancy",
                record.redundancy
            ),
            status: "success",
            file: Some(record),
            existing_id: None,
        },
        IngestOutcome::Duplicate { existing_id, .. } => UploadResponse {
            message: "Duplicate file detected and rejected".into(),
            status: "duplicate",
            file: None,
            existing_id: Some(existing_id),
        },
    };
    Ok(Json(response))
}

/// `GET /stats`
pub async fn get_stats(State(service): State<StorageService>) -> Json<StatsResponse> {
    let stats = service.statistics();
    Json(StatsResponse {
        space_savings_percent: stats.space_savings_percent(),
        stats,
    })
}

/// `GET /logs` — oldest entry first.
pub async fn get_logs(State(service): State<StorageService>) -> Json<LogsResponse> {
    Json(LogsResponse {
        logs: service.activity_log(),
    })
}

/// `GET /files` — in upload order.
pub async fn list_files(State(service): State<StorageService>) -> Json<FilesResponse> {
    Json(FilesResponse {
        files: service.list_objects(),
    })
}

/// `GET /files/{id}` — counts as an access for tiering purposes.
pub async fn get_file(
    State(service): State<StorageService>,
    Path(id): Path<u64>,
) -> Result<Json<ObjectRecord>, AppError> {
    Ok(Json(service.get_object(id)?))
}

/// `GET /tiers`
pub async fn list_tiers() -> Json<Vec<TierInfo>> {
    Json(
        Tier::ALL
            .into_iter()
            .map(|tier| TierInfo {
                tier,
                cost_per_gb: tier.cost_per_gb(),
                retrieval_ms: tier.retrieval_ms(),
            })
            .collect(),
    )
}

/// `POST /optimize`
pub async fn optimize_storage(State(service): State<StorageService>) -> Json<OptimizeResponse> {
    let moved = service.optimize();
    Json(OptimizeResponse {
        message: format!("Optimized {} files", moved),
        files_optimized: moved,
    })
}

/// `POST /simulate-failure`
pub async fn simulate_failure(State(service): State<StorageService>) -> Json<FailureResponse> {
    service.simulate_failure();
    Json(FailureResponse {
        message: "Node failure simulated - Recovery successful",
        status: "recovered",
    })
}

/// Reduce a client-supplied filename to a safe display name.
///
/// Drops any directory components, replaces characters outside
/// `[A-Za-z0-9._-]` with `_` and strips leading dots. Returns `None` when
/// nothing usable is left.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let cleaned: String = base
        .trim()
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' | '_' => c,
            _ => '_',
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '_') {
        None
    } else {
        Some(cleaned.to_string())
    }
}
