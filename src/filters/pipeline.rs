//! Filter and sort pipeline
//!
//! Narrows the full collection with the selected filter values, then orders
//! what is left. Sorts are stable and applied title first, posted time
//! second, so an active posted-time sort takes precedence and equal minute
//! counts keep their title order.

use crate::jobs::Job;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Title sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TitleSort {
    Asc,
    Desc,
}

/// Posted-time sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PostedSort {
    /// Fewest minutes ago first.
    Newest,
    /// Most minutes ago first.
    Oldest,
}

impl fmt::Display for TitleSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleSort::Asc => write!(f, "asc"),
            TitleSort::Desc => write!(f, "desc"),
        }
    }
}

impl fmt::Display for PostedSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostedSort::Newest => write!(f, "newest"),
            PostedSort::Oldest => write!(f, "oldest"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort directive: {0}")]
pub struct UnknownDirective(pub String);

impl FromStr for TitleSort {
    type Err = UnknownDirective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(TitleSort::Asc),
            "desc" => Ok(TitleSort::Desc),
            other => Err(UnknownDirective(other.to_string())),
        }
    }
}

impl FromStr for PostedSort {
    type Err = UnknownDirective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(PostedSort::Newest),
            "oldest" => Ok(PostedSort::Oldest),
            other => Err(UnknownDirective(other.to_string())),
        }
    }
}

/// Current selector values. `None` or empty text means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub level: Option<String>,
    pub job_type: Option<String>,
    pub skill: Option<String>,
    pub title_sort: Option<TitleSort>,
    pub posted_sort: Option<PostedSort>,
}

impl ViewQuery {
    pub fn matches(&self, job: &Job) -> bool {
        let level_match = constraint(&self.level).map_or(true, |level| job.level == level);
        let type_match = constraint(&self.job_type).map_or(true, |ty| job.job_type == ty);
        let skill_match = constraint(&self.skill).map_or(true, |skill| job.has_skill(skill));

        level_match && type_match && skill_match
    }

    /// Reset the three filters, keeping the sort directives.
    pub fn clear_filters(&mut self) {
        self.level = None;
        self.job_type = None;
        self.skill = None;
    }
}

fn constraint(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Run the pipeline over `jobs`, returning references in display order.
pub fn filter_and_sort<'a>(jobs: &'a [Job], query: &ViewQuery) -> Vec<&'a Job> {
    let mut visible: Vec<&Job> = jobs.iter().filter(|job| query.matches(job)).collect();

    match query.title_sort {
        Some(TitleSort::Asc) => visible.sort_by(|a, b| collate(&a.title, &b.title)),
        Some(TitleSort::Desc) => visible.sort_by(|a, b| collate(&b.title, &a.title)),
        None => {}
    }

    if let Some(direction) = query.posted_sort {
        visible.sort_by(|a, b| compare_posted(a.posted.minutes, b.posted.minutes, direction));
    }

    visible
}

/// Locale-style title comparison: case-insensitive first, then by code point.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Jobs without a minute count go last in either direction.
fn compare_posted(a: Option<u64>, b: Option<u64>, direction: PostedSort) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            PostedSort::Newest => a.cmp(&b),
            PostedSort::Oldest => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
