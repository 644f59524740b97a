use crate::state::AppState;
use crate::views;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use protoyard_catalog::{Listing, ProjectPage, read_listing, render_project};
use serde_json::Value;
use tokio::task::JoinError;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(gallery))
        .route("/api/projects", get(list_projects))
        .route("/projects/:id", get(project_page))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn load_listing(state: &AppState) -> Result<Listing, JoinError> {
    let root = state.projects_root.clone();
    tokio::task::spawn_blocking(move || read_listing(&root)).await
}

/// The aggregated index as a JSON array, entries as stored. An internal
/// fault still answers with a well-formed empty array.
async fn list_projects(State(state): State<AppState>) -> Response {
    match load_listing(&state).await {
        Ok(listing) => Json(listing.into_entries()).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "listing task failed");
            let empty: Vec<Value> = Vec::new();
            (StatusCode::INTERNAL_SERVER_ERROR, Json(empty)).into_response()
        }
    }
}

async fn gallery(State(state): State<AppState>) -> Response {
    match load_listing(&state).await {
        Ok(listing) => Html(views::gallery(&listing.records())).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "listing task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(views::internal_error())).into_response()
        }
    }
}

async fn project_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let root = state.projects_root.clone();
    let content = state.content.clone();
    let rendered =
        tokio::task::spawn_blocking(move || render_project(&root, &id, content.as_ref())).await;

    let page = match rendered {
        Ok(page) => page,
        Err(err) => {
            tracing::error!(error = %err, "project render task failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(views::internal_error()))
                .into_response();
        }
    };

    match views::project(&page) {
        Some(html) => Html(html).into_response(),
        None => {
            debug_assert!(matches!(page, ProjectPage::NotFound));
            (StatusCode::NOT_FOUND, Html(views::not_found())).into_response()
        }
    }
}

async fn healthz() -> &'static str {
    "ok"
}
