use axum::Json;
use axum::http::StatusCode;

use crate::api::models::{DeleteSummaryResponse, PodcastSummary, SummaryListResponse};

pub fn summaries(
    status: StatusCode,
    podcast_summaries: Vec<PodcastSummary>,
) -> (StatusCode, Json<SummaryListResponse>) {
    (status, Json(SummaryListResponse { podcast_summaries }))
}

pub fn deleted(podcast_summaries: Vec<PodcastSummary>) -> (StatusCode, Json<DeleteSummaryResponse>) {
    (
        StatusCode::OK,
        Json(DeleteSummaryResponse {
            message: "Podcast deleted".to_string(),
            podcast_summaries,
        }),
    )
}
