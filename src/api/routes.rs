use axum::{
    routing::{delete, get},
    Router,
    extract::{Json, Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tower_http::cors::{CorsLayer, Any};

use crate::api::models::{CreateSummaryRequest, parse_id};
use crate::api::response;
use crate::error::{AppError, Result};
use crate::AppState;

pub const BANNER: &str = "StudyPod API is running - Convert your study materials to podcasts!";

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/podcast-summary", get(list_summaries).post(create_summary))
        .route("/podcast-summary/:id", delete(delete_summary))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn banner() -> &'static str {
    BANNER
}

async fn list_summaries(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let summaries = state.store.list()?;
    Ok(response::summaries(StatusCode::OK, summaries))
}

async fn create_summary(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateSummaryRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(req) = payload.map_err(|rejection| {
        log::warn!("Rejected create request body: {}", rejection);
        AppError::Validation(rejection.body_text())
    })?;

    let new = req.validate().inspect_err(|err| {
        log::warn!("Rejected create request: {}", err);
    })?;

    let created = state.store.insert(new)?;
    log::info!("Created podcast summary {} ({})", created.id, created.title);

    Ok(response::summaries(StatusCode::CREATED, state.store.list()?))
}

async fn delete_summary(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse> {
    // A segment without a leading integer cannot name any record.
    let removed = match parse_id(&raw_id) {
        Some(id) => state.store.remove_by_id(id)?,
        None => None,
    };

    match removed {
        Some(summary) => {
            log::info!("Deleted podcast summary {} ({})", summary.id, summary.title);
            Ok(response::deleted(state.store.list()?))
        }
        None => {
            log::warn!("Delete requested for unknown podcast summary {:?}", raw_id);
            Err(AppError::NotFound("Podcast not found".to_string()))
        }
    }
}
