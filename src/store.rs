//! Ownership of the summary collection, kept apart from the HTTP layer.

use std::sync::{Mutex, MutexGuard};

use crate::api::models::{NewPodcastSummary, PodcastSummary, SummaryId};
use crate::error::{AppError, Result};
use crate::seed::seed_summaries;

pub trait SummaryStore: Send + Sync {
    /// All records in insertion order.
    fn list(&self) -> Result<Vec<PodcastSummary>>;

    /// Assigns the next id and appends the record.
    fn insert(&self, new: NewPodcastSummary) -> Result<PodcastSummary>;

    /// Returns the removed record, or `None` when no record has that id.
    fn remove_by_id(&self, id: SummaryId) -> Result<Option<PodcastSummary>>;
}

struct Inner {
    summaries: Vec<PodcastSummary>,
    // Only ever grows, so ids freed by deletes are never handed out again.
    next_id: SummaryId,
}

pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn empty() -> Self {
        Self {
            inner: Mutex::new(Inner {
                summaries: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn seeded() -> Self {
        let store = Self::empty();
        {
            let mut inner = store.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            for new in seed_summaries() {
                push(&mut inner, new);
            }
        }
        store
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| AppError::Store("summary store lock poisoned".to_string()))
    }
}

fn push(inner: &mut Inner, new: NewPodcastSummary) -> PodcastSummary {
    let summary = PodcastSummary {
        id: inner.next_id,
        title: new.title,
        text_content: new.text_content,
    };
    inner.next_id += 1;
    inner.summaries.push(summary.clone());
    summary
}

impl SummaryStore for InMemoryStore {
    fn list(&self) -> Result<Vec<PodcastSummary>> {
        Ok(self.lock()?.summaries.clone())
    }

    fn insert(&self, new: NewPodcastSummary) -> Result<PodcastSummary> {
        let mut inner = self.lock()?;
        Ok(push(&mut inner, new))
    }

    fn remove_by_id(&self, id: SummaryId) -> Result<Option<PodcastSummary>> {
        let mut inner = self.lock()?;
        let position = inner.summaries.iter().position(|summary| summary.id == id);
        Ok(position.map(|index| inner.summaries.remove(index)))
    }
}
