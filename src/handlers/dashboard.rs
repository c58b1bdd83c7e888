//! Single-page dashboard served at `/`.

use axum::response::{Html, IntoResponse};

const DASHBOARD_HTML: &str = include_str!("dashboard.html");

/// `GET /` — static page that polls `/stats` and `/logs`.
pub async fn index() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}
