use serde::{Deserialize, Serialize};

use super::enums::{Language, UrgencyLevel};

/// One condition recognized in the complaint text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSymptom {
    /// Condition id in the knowledge base, e.g. "fever".
    pub condition: String,
    /// Hindi display name, e.g. "बुखार".
    pub hindi_name: String,
    /// The keyword that matched the text.
    pub keyword: String,
    /// Severity inferred from intensity words in the same text.
    pub severity: UrgencyLevel,
}

/// The emergency keyword hit that set the global emergency tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyMatch {
    pub tier: UrgencyLevel,
    pub keyword: String,
}

/// Everything the extractor read out of one complaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomAnalysis {
    pub symptoms: Vec<ExtractedSymptom>,
    /// First keyword hit in the highest matching emergency tier, if any.
    pub emergency: Option<EmergencyMatch>,
    pub language: Language,
    /// Day count recovered from a duration phrase in the text
    /// ("3 दिन से", "for 4 days"). Informational; the decision engine
    /// consumes the structured `duration_days` field.
    pub duration_mentioned_days: Option<u32>,
}

impl SymptomAnalysis {
    /// Global emergency tier; Low when no emergency keyword matched.
    pub fn emergency_level(&self) -> UrgencyLevel {
        self.emergency
            .as_ref()
            .map(|m| m.tier)
            .unwrap_or(UrgencyLevel::Low)
    }

    /// Highest-ranked severity among extracted symptoms; Low when none.
    pub fn max_severity(&self) -> UrgencyLevel {
        self.symptoms
            .iter()
            .map(|s| s.severity)
            .max()
            .unwrap_or(UrgencyLevel::Low)
    }
}
