use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::view::{self, HomeView};
use crate::AppState;

/// Both fields are optional so that a request missing one is absorbed like a
/// blank one instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitForm {
    content: Option<String>,
    feeling: Option<String>,
}

impl SubmitForm {
    /// The submitted pair, if both fields are present and not blank.
    fn accepted(&self) -> Option<(&str, &str)> {
        let content = self.content.as_deref().filter(|s| !s.trim().is_empty())?;
        let feeling = self.feeling.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((content, feeling))
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_entries).post(submit_entry))
        .route("/filter/{feeling}", get(filter_entries))
}

async fn list_entries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = state.store.list_all().await?;
    let distinct = state.store.distinct_feelings().await?;

    let view = HomeView::build(entries, distinct, None);
    Ok(Html(view::render(&view)?))
}

async fn filter_entries(
    State(state): State<AppState>,
    Path(feeling): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let entries = state.store.list_by_feeling(&feeling).await?;
    let distinct = state.store.distinct_feelings().await?;

    let view = HomeView::build(entries, distinct, Some(feeling));
    Ok(Html(view::render(&view)?))
}

async fn submit_entry(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Result<impl IntoResponse, AppError> {
    match form.accepted() {
        Some((content, feeling)) => {
            let entry = state.store.create(content, feeling).await?;
            tracing::info!(id = entry.id, feeling = %entry.feeling, "entry released");
        }
        None => tracing::debug!("discarding blank submission"),
    }

    Ok(Redirect::to("/"))
}
