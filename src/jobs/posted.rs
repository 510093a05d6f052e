//! Posted-time normalization
//!
//! Turns free-text relative phrases such as "3 hours ago" into a single unit
//! (minutes) so listings can be compared directly.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

macro_rules! re {
    ($name:ident, $e:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($e).expect("posted-time pattern is valid"));
    };
}

re!(MINUTES_RE, r"(?i)([0-9]+)\s*minutes?\s*ago");
re!(HOURS_RE, r"(?i)([0-9]+)\s*hours?\s*ago");
re!(DAYS_RE, r"(?i)([0-9]+)\s*days?\s*ago");

const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 1440;

/// Normalized posted time of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedTime {
    /// Minutes since posting, when the phrase was recognised.
    pub minutes: Option<u64>,
    /// Text shown to the user: "<n> minutes ago" or the raw phrase.
    pub display: String,
}

impl PostedTime {
    /// Normalize a text phrase.
    ///
    /// Patterns are tried in order minutes, hours, days and the first match
    /// wins. Anything unrecognised (or too large to represent) falls back to
    /// the raw phrase with no minute count.
    pub fn parse(raw: &str) -> Self {
        match phrase_minutes(raw) {
            Some(minutes) => Self {
                minutes: Some(minutes),
                display: format!("{} minutes ago", minutes),
            },
            None => Self::fallback(raw),
        }
    }

    /// Keep the raw value verbatim, without a sort key.
    pub fn fallback(raw: impl Into<String>) -> Self {
        Self {
            minutes: None,
            display: raw.into(),
        }
    }
}

impl fmt::Display for PostedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

fn phrase_minutes(raw: &str) -> Option<u64> {
    let rules: [(&Regex, u64); 3] = [
        (&MINUTES_RE, 1),
        (&HOURS_RE, MINUTES_PER_HOUR),
        (&DAYS_RE, MINUTES_PER_DAY),
    ];

    let (count, factor) = rules.iter().find_map(|(re, factor)| {
        re.captures(raw)
            .and_then(|caps| caps.get(1))
            .map(|m| (m.as_str(), *factor))
    })?;

    count.parse::<u64>().ok()?.checked_mul(factor)
}
