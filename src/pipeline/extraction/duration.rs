//! Duration phrases recovered from the complaint text itself
//! ("3 दिन से बुखार है", "cough for 4 days", "2 हफ्ते से").
//!
//! Informational only: the decision engine consumes the structured
//! `duration_days` field, and a missing field stays at its default.

use std::sync::LazyLock;

use regex::Regex;

static DAYS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(दिनों|दिन|days?)").expect("Invalid duration pattern")
});

static WEEKS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(सप्ताह|हफ़्ते|हफ्ते|weeks?)").expect("Invalid duration pattern")
});

/// Extract a day count from a duration phrase, if one is present.
/// Week phrases are converted to days. The first phrase wins.
pub fn extract_duration_days(text: &str) -> Option<u32> {
    if let Some(caps) = DAYS_RE.captures(text) {
        return caps[1].parse().ok();
    }
    if let Some(caps) = WEEKS_RE.captures(text) {
        return caps[1].parse::<u32>().ok().map(|weeks| weeks * 7);
    }
    None
}
