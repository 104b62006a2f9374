//! Bilingual symptom and emergency extraction from complaint text.

pub mod duration;
pub mod language;
pub mod severity;

use crate::knowledge::KnowledgeBase;
use crate::models::symptom::{EmergencyMatch, ExtractedSymptom, SymptomAnalysis};

pub use duration::extract_duration_days;
pub use language::detect_language;
pub use severity::infer_severity;

/// Extract symptoms, the global emergency tier, language, and any
/// duration phrase from one complaint.
///
/// The emergency scan runs strictly before per-symptom severity
/// inference: tiers are checked critical → high → medium and the first
/// tier with a keyword hit wins. Blank input yields an empty analysis.
pub fn extract(kb: &KnowledgeBase, text: &str) -> SymptomAnalysis {
    let language = detect_language(text);

    if text.trim().is_empty() {
        return SymptomAnalysis {
            symptoms: Vec::new(),
            emergency: None,
            language,
            duration_mentioned_days: None,
        };
    }

    let lower = text.to_lowercase();

    let emergency = kb.emergency_tiers.iter().find_map(|tier| {
        tier.matched_keyword(&lower).map(|kw| EmergencyMatch {
            tier: tier.level,
            keyword: kw.to_string(),
        })
    });

    let symptoms = kb
        .conditions
        .iter()
        .filter_map(|condition| {
            condition.matched_keyword(&lower).map(|kw| ExtractedSymptom {
                condition: condition.id.clone(),
                hindi_name: condition.hindi_name.clone(),
                keyword: kw.to_string(),
                severity: infer_severity(kb, &lower),
            })
        })
        .collect();

    SymptomAnalysis {
        symptoms,
        emergency,
        language,
        duration_mentioned_days: extract_duration_days(text),
    }
}
