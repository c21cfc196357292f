//! Axum app serving the display client page.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    Router,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Redirect},
    routing::get,
};

use crate::api::models::SummaryId;
use crate::client::fetch::SummaryClient;
use crate::client::render::render_page;
use crate::client::view::ViewState;

#[derive(Clone)]
pub struct ViewerState {
    view: Arc<Mutex<ViewState>>,
}

impl ViewerState {
    pub fn new(view: ViewState) -> Self {
        Self {
            view: Arc::new(Mutex::new(view)),
        }
    }

    // The view is plain data, so a panic elsewhere leaves nothing half-written.
    fn view(&self) -> MutexGuard<'_, ViewState> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Issues the single fetch the page is built from.
pub async fn load_view(client: &SummaryClient) -> ViewState {
    let mut view = ViewState::new();
    log::info!("Fetching podcast summaries from {}", client.summaries_url());
    view.finish_loading(client.fetch_summaries().await);
    view
}

pub fn create_viewer_router(state: ViewerState) -> Router {
    Router::new()
        .route("/", get(show_page))
        .route("/toggle/:id", get(toggle_card))
        .with_state(state)
}

async fn show_page(State(state): State<ViewerState>) -> impl IntoResponse {
    let html = render_page(&state.view());
    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html)
}

async fn toggle_card(State(state): State<ViewerState>, Path(raw_id): Path<String>) -> Redirect {
    match raw_id.parse::<SummaryId>() {
        Ok(id) => state.view().toggle(id),
        Err(_) => log::warn!("Ignoring toggle for invalid id {:?}", raw_id),
    }
    Redirect::to("/")
}
