use chrono::{DateTime, Utc};

use crate::api::models::{PodcastSummary, SummaryId};
use crate::error::Result;

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch podcasts. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Collapsed,
    Expanded,
}

/// Everything the page is rendered from.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub summaries: Vec<PodcastSummary>,
    pub loading: bool,
    pub error: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
    // At most one card is open at a time.
    expanded: Option<SummaryId>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            summaries: Vec::new(),
            loading: true,
            error: None,
            fetched_at: None,
            expanded: None,
        }
    }

    pub fn finish_loading(&mut self, result: Result<Vec<PodcastSummary>>) {
        match result {
            Ok(summaries) => {
                log::info!("Fetched {} podcast summaries", summaries.len());
                self.summaries = summaries;
                self.fetched_at = Some(Utc::now());
            }
            Err(err) => {
                log::error!("Error fetching podcasts: {}", err);
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    pub fn toggle(&mut self, id: SummaryId) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }

    pub fn expanded(&self) -> Option<SummaryId> {
        self.expanded
    }

    pub fn card_state(&self, id: SummaryId) -> CardState {
        if self.expanded == Some(id) {
            CardState::Expanded
        } else {
            CardState::Collapsed
        }
    }
}
