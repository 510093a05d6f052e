//! Load errors
//!
//! The `Display` text of each variant is the exact message shown to the user.

use thiserror::Error;

/// Message carried by a parse error when the root value is not an array.
pub const NOT_AN_ARRAY: &str = "Invalid JSON format. Expected an array of jobs.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Load was triggered with no file chosen.
    #[error("Please select a JSON file first.")]
    MissingInput,

    /// The content is not valid JSON or not an array.
    #[error("Error parsing JSON: {0}")]
    Parse(String),

    /// The file could not be read.
    #[error("Error reading file.")]
    Read,
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            LoadError::MissingInput.to_string(),
            "Please select a JSON file first."
        );
        assert_eq!(
            LoadError::Parse(NOT_AN_ARRAY.to_string()).to_string(),
            "Error parsing JSON: Invalid JSON format. Expected an array of jobs."
        );
        assert_eq!(LoadError::Read.to_string(), "Error reading file.");
    }
}
