//! Record normalization
//!
//! Maps a loosely-typed JSON record onto a [`Job`]. Field lookup is by exact,
//! case-sensitive key name. Any falsy value (absent, `null`, `""`, `0`,
//! `false`) is treated as missing and replaced by the field default.

use super::{Job, PostedTime};
use serde_json::Value;

pub const DEFAULT_TITLE: &str = "Untitled Job";
pub const DEFAULT_POSTED: &str = "N/A";
pub const DEFAULT_TYPE: &str = "Unspecified";
pub const DEFAULT_LEVEL: &str = "Not Specified";
pub const DEFAULT_DETAIL: &str = "No additional details available.";

const KEY_TITLE: &str = "Title";
const KEY_POSTED: &str = "Posted";
const KEY_TYPE: &str = "Type";
const KEY_LEVEL: &str = "Level";
const KEY_SKILL: &str = "Skill";
const KEY_DETAIL: &str = "Detail";

impl Job {
    /// Build a job from one element of the loaded array.
    ///
    /// Never fails: a non-object element has no keys and yields the
    /// all-defaults job.
    pub fn from_record(record: &Value) -> Self {
        let posted_value = truthy_field(record, KEY_POSTED);
        let posted_time = posted_value
            .map(value_text)
            .unwrap_or_else(|| DEFAULT_POSTED.to_string());

        // Only text goes through phrase matching; other values are shown as-is.
        let posted = match posted_value {
            Some(Value::String(phrase)) => PostedTime::parse(phrase),
            _ => PostedTime::fallback(posted_time.clone()),
        };

        Self {
            title: text_field(record, KEY_TITLE, DEFAULT_TITLE),
            posted_time,
            job_type: text_field(record, KEY_TYPE, DEFAULT_TYPE),
            level: text_field(record, KEY_LEVEL, DEFAULT_LEVEL),
            skill: skill_field(record),
            detail: text_field(record, KEY_DETAIL, DEFAULT_DETAIL),
            posted,
        }
    }
}

/// JavaScript-style truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy_field<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|value| is_truthy(value))
}

fn text_field(record: &Value, key: &str, default: &str) -> String {
    truthy_field(record, key)
        .map(value_text)
        .unwrap_or_else(|| default.to_string())
}

fn skill_field(record: &Value) -> Vec<String> {
    match truthy_field(record, KEY_SKILL) {
        None => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(value_text).collect(),
        Some(scalar) => vec![value_text(scalar)],
    }
}

/// Text form of a value: strings verbatim, `null` as empty text, anything
/// else in its compact JSON form.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn all_defaults() -> Job {
        Job {
            title: DEFAULT_TITLE.to_string(),
            posted_time: DEFAULT_POSTED.to_string(),
            job_type: DEFAULT_TYPE.to_string(),
            level: DEFAULT_LEVEL.to_string(),
            skill: Vec::new(),
            detail: DEFAULT_DETAIL.to_string(),
            posted: PostedTime::fallback(DEFAULT_POSTED),
        }
    }

    #[test]
    fn test_empty_record_is_all_defaults() {
        assert_eq!(Job::from_record(&json!({})), all_defaults());
    }

    #[test]
    fn test_falsy_values_take_defaults() {
        let record = json!({
            "Title": "",
            "Posted": null,
            "Type": 0,
            "Level": false,
            "Skill": "",
            "Detail": 0.0,
        });
        assert_eq!(Job::from_record(&record), all_defaults());
    }

    #[test]
    fn test_non_object_record_is_all_defaults() {
        assert_eq!(Job::from_record(&json!(42)), all_defaults());
        assert_eq!(Job::from_record(&json!("Engineer")), all_defaults());
        assert_eq!(Job::from_record(&Value::Null), all_defaults());
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let job = Job::from_record(&json!({ "title": "Engineer", "LEVEL": "Senior" }));
        assert_eq!(job.title, DEFAULT_TITLE);
        assert_eq!(job.level, DEFAULT_LEVEL);
    }

    #[test]
    fn test_full_record() {
        let record = json!({
            "Title": "Backend Engineer",
            "Posted": "2 hours ago",
            "Type": "Full-time",
            "Level": "Senior",
            "Skill": ["Rust", "SQL"],
            "Detail": "Build services.",
        });
        let job = Job::from_record(&record);

        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.posted_time, "2 hours ago");
        assert_eq!(job.posted.minutes, Some(120));
        assert_eq!(job.posted.display, "120 minutes ago");
        assert_eq!(job.job_type, "Full-time");
        assert_eq!(job.level, "Senior");
        assert_eq!(job.skill, vec!["Rust".to_string(), "SQL".to_string()]);
        assert_eq!(job.detail, "Build services.");
    }

    #[test]
    fn test_scalar_skill_becomes_sequence() {
        let job = Job::from_record(&json!({ "Skill": "Rust" }));
        assert_eq!(job.skill, vec!["Rust".to_string()]);

        let job = Job::from_record(&json!({ "Skill": 7 }));
        assert_eq!(job.skill, vec!["7".to_string()]);
    }

    #[test]
    fn test_skill_array_elements_become_text() {
        let job = Job::from_record(&json!({ "Skill": ["Go", 3, null, true] }));
        assert_eq!(job.skill, vec!["Go", "3", "", "true"]);
    }

    #[test]
    fn test_empty_skill_array_stays_empty() {
        let job = Job::from_record(&json!({ "Skill": [] }));
        assert!(job.skill.is_empty());
    }

    #[test]
    fn test_non_text_posted_is_not_matched() {
        let job = Job::from_record(&json!({ "Posted": 5 }));
        assert_eq!(job.posted_time, "5");
        assert_eq!(job.posted.minutes, None);
        assert_eq!(job.posted.display, "5");
    }

    #[test]
    fn test_unmatched_posted_keeps_raw_phrase() {
        let job = Job::from_record(&json!({ "Posted": "yesterday" }));
        assert_eq!(job.posted.display, "yesterday");
        assert_eq!(job.posted.minutes, None);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(-0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!(1)));
    }
}
