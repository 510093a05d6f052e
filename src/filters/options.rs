//! Filter option derivation
//!
//! Collects the distinct values each selector can offer.

use crate::jobs::Job;
use std::collections::HashSet;

pub const ALL_LEVELS: &str = "All Levels";
pub const ALL_TYPES: &str = "All Types";
pub const ALL_SKILLS: &str = "All Skills";

/// Which attribute a selector filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Level,
    Type,
    Skill,
}

impl Category {
    /// Label of the leading "no constraint" entry.
    pub fn sentinel(&self) -> &'static str {
        match self {
            Category::Level => ALL_LEVELS,
            Category::Type => ALL_TYPES,
            Category::Skill => ALL_SKILLS,
        }
    }
}

/// Distinct values per filterable attribute, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub levels: Vec<String>,
    pub types: Vec<String>,
    pub skills: Vec<String>,
}

impl FilterOptions {
    pub fn derive(jobs: &[Job]) -> Self {
        Self {
            levels: distinct(jobs.iter().map(|job| job.level.as_str())),
            types: distinct(jobs.iter().map(|job| job.job_type.as_str())),
            skills: distinct(jobs.iter().flat_map(|job| job.skill.iter().map(String::as_str))),
        }
    }

    pub fn values(&self, category: Category) -> &[String] {
        match category {
            Category::Level => &self.levels,
            Category::Type => &self.types,
            Category::Skill => &self.skills,
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
