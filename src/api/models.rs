use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub type SummaryId = i64;

/// Reads an id from a path segment the way JavaScript's `parseInt` does:
/// leading whitespace and an optional sign, then the longest run of digits.
/// Anything after the digits is ignored, so `"2abc"` is id 2.
pub fn parse_id(raw: &str) -> Option<SummaryId> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..sign_len + digits_len].parse().ok()
}

/// A stored study text waiting to be turned into audio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastSummary {
    pub id: SummaryId,
    pub title: String,
    pub text_content: String,
}

/// A validated record that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPodcastSummary {
    pub title: String,
    pub text_content: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSummaryRequest {
    pub title: Option<String>,
    pub text_content: Option<String>,
}

impl CreateSummaryRequest {
    pub fn validate(self) -> Result<NewPodcastSummary> {
        match (non_empty(self.title), non_empty(self.text_content)) {
            (Some(title), Some(text_content)) => Ok(NewPodcastSummary { title, text_content }),
            _ => Err(AppError::Validation("Title and content are required".to_string())),
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryListResponse {
    pub podcast_summaries: Vec<PodcastSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSummaryResponse {
    pub message: String,
    pub podcast_summaries: Vec<PodcastSummary>,
}
