//! Rendering
//!
//! Projects the ordered job list into display elements. Every surface (HTML,
//! plain text, terminal) renders from the same [`ListView`], and each render
//! fully replaces what was shown before.

pub mod html;
pub mod text;

use crate::jobs::Job;
use serde::Serialize;

/// Placeholder shown when no job passes the active filters.
pub const EMPTY_MESSAGE: &str = "No jobs match the current filters.";

/// One rendered job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobCard {
    pub title: String,
    pub job_type: String,
    pub level: String,
    pub posted: String,
    /// Age in minutes, when the posted phrase was recognised.
    pub minutes: Option<u64>,
}

impl From<&Job> for JobCard {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            job_type: job.job_type.clone(),
            level: job.level.clone(),
            posted: job.posted.display.clone(),
            minutes: job.posted.minutes,
        }
    }
}

/// Contents of the list region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Cards(Vec<JobCard>),
    /// Nothing matched; shown as [`EMPTY_MESSAGE`].
    Empty,
}

impl ListView {
    pub fn from_jobs(jobs: &[&Job]) -> Self {
        if jobs.is_empty() {
            ListView::Empty
        } else {
            ListView::Cards(jobs.iter().map(|job| JobCard::from(*job)).collect())
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ListView::Cards(cards) => cards.len(),
            ListView::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ListView::Empty)
    }
}

/// The error message area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    message: Option<String>,
}

impl ErrorBanner {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    /// Banner text; empty when hidden.
    pub fn text(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
