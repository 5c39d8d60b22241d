use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::AppError;
use crate::models::Entry;
use crate::AppState;

#[derive(Serialize)]
struct ExportData {
    exported_at: String,
    entries: Vec<Entry>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/export", get(export_data))
}

async fn export_data(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = state.store.list_all().await?;

    let now = chrono::Utc::now();
    let export = ExportData {
        exported_at: now.to_rfc3339(),
        entries,
    };

    let filename = format!("lostfound-export-{}.json", now.format("%Y-%m-%d"));
    let content_disposition = format!("attachment; filename=\"{}\"", filename);

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(value) = HeaderValue::from_str(&content_disposition) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }

    Ok((headers, Json(export)))
}
