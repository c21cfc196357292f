use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use once_cell::sync::Lazy;

use crate::api::models::{PodcastSummary, SummaryListResponse};
use crate::error::{AppError, Result};

// Shared by every SummaryClient so connections are pooled.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Reads summaries from a running API service.
#[derive(Clone, Debug)]
pub struct SummaryClient {
    base_url: String,
}

impl SummaryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn summaries_url(&self) -> String {
        format!("{}/podcast-summary", self.base_url)
    }

    pub async fn fetch_summaries(&self) -> Result<Vec<PodcastSummary>> {
        let url = self.summaries_url();
        let response = CLIENT.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch(format!("GET {} returned {}", url, status)));
        }

        let body: SummaryListResponse = response.json().await?;
        Ok(body.podcast_summaries)
    }
}
