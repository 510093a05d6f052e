//! Job listings
//!
//! The canonical job model plus the normalizers that build it from raw input.

pub mod posted;
pub mod record;

pub use posted::PostedTime;
pub use record::is_truthy;

use serde::Serialize;

/// A normalized job listing. Built once per loaded record and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    pub title: String,
    /// Raw relative-time phrase as found in the file.
    pub posted_time: String,
    pub job_type: String,
    pub level: String,
    pub skill: Vec<String>,
    pub detail: String,
    #[serde(skip)]
    pub posted: PostedTime,
}

impl Job {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skill.iter().any(|s| s == skill)
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.title)
    }
}
