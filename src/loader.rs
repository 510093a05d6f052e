//! File loading
//!
//! Reads a listings file and turns it into normalized jobs. Whole-file
//! failures become a [`LoadError`]; per-field problems are absorbed by the
//! record normalizer.

use crate::error::{LoadError, NOT_AN_ARRAY};
use crate::jobs::Job;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

/// Parse file contents into jobs. The root value must be a JSON array.
pub fn parse_jobs(content: &str) -> Result<Vec<Job>, LoadError> {
    let root: Value = serde_json::from_str(content)?;

    let Value::Array(records) = root else {
        return Err(LoadError::Parse(NOT_AN_ARRAY.to_string()));
    };

    debug!(records = records.len(), "Normalizing job records");
    Ok(records.iter().map(Job::from_record).collect())
}

/// Read and parse a listings file. `None` means no file was chosen.
///
/// Invalid UTF-8 is replaced rather than rejected, like a browser text read.
pub async fn load_file(path: Option<&Path>) -> Result<Vec<Job>, LoadError> {
    let path = path.ok_or(LoadError::MissingInput)?;

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        warn!(path = %path.display(), error = %e, "Failed to read listings file");
        LoadError::Read
    })?;

    let content = String::from_utf8_lossy(&bytes);
    let jobs = parse_jobs(&content)?;
    info!(path = %path.display(), jobs = jobs.len(), "Loaded listings file");
    Ok(jobs)
}
