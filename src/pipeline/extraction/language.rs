//! Lightweight Hindi/English detection for complaint text.
//!
//! Counts Devanagari-block characters against ASCII alphabetic
//! characters. No external dependencies; complaints are short and the
//! only two expected languages separate cleanly by script.

use crate::models::enums::Language;

/// Detect the primary language of a complaint.
///
/// Hindi wins ties, since Hindi-speaking patients are the primary user
/// base and Latin-script loan words are common inside Hindi complaints.
pub fn detect_language(text: &str) -> Language {
    let mut hindi = 0usize;
    let mut english = 0usize;

    for ch in text.chars() {
        if ('\u{0900}'..='\u{097F}').contains(&ch) {
            hindi += 1;
        } else if ch.is_ascii_alphabetic() {
            english += 1;
        }
    }

    if hindi >= english {
        Language::Hindi
    } else {
        Language::English
    }
}
