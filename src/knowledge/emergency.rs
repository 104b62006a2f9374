use serde::{Deserialize, Serialize};

use super::text_contains;
use crate::models::enums::UrgencyLevel;

/// One emergency keyword tier. A match in a tier forces the triage level
/// toward the tier's urgency, subject to the decision engine's rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyTier {
    pub level: UrgencyLevel,
    pub keywords: Vec<String>,
}

impl EmergencyTier {
    /// First keyword of this tier occurring in the (lowercased) text.
    pub fn matched_keyword(&self, lower_text: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|kw| text_contains(lower_text, kw))
            .map(String::as_str)
    }
}

/// One severity lexicon tier: intensity words that tag an individual
/// extracted symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityTier {
    pub level: UrgencyLevel,
    pub indicators: Vec<String>,
}

impl SeverityTier {
    pub fn matches(&self, lower_text: &str) -> bool {
        self.indicators.iter().any(|word| text_contains(lower_text, word))
    }
}

fn tier(level: UrgencyLevel, keywords: &[&str]) -> EmergencyTier {
    EmergencyTier {
        level,
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
    }
}

fn severity_tier(level: UrgencyLevel, indicators: &[&str]) -> SeverityTier {
    SeverityTier {
        level,
        indicators: indicators.iter().map(|s| s.to_string()).collect(),
    }
}

/// Emergency keyword tiers in scan order (critical first).
pub fn builtin_tiers() -> Vec<EmergencyTier> {
    vec![
        tier(
            UrgencyLevel::Critical,
            &[
                "heart attack",
                "दिल का दौरा",
                "cardiac arrest",
                "सांस रुकना",
                "severe bleeding",
                "heavy bleeding",
                "अत्यधिक खून बहना",
                "unconscious",
                "बेहोशी",
                "coma",
                "कोमा",
                "stroke",
                "पक्षाघात",
                "paralysis",
                "लकवा",
            ],
        ),
        tier(
            UrgencyLevel::High,
            &[
                "severe chest pain",
                "severe headache",
                "high fever",
                "high temperature",
                "difficulty breathing",
                "severe injury",
                "major accident",
                "poisoning",
            ],
        ),
        tier(
            UrgencyLevel::Medium,
            &[
                "moderate fever",
                "persistent cough",
                "injury",
                "pain",
                "swelling",
                "infection",
                "allergy",
                "dizziness",
                "nausea",
            ],
        ),
    ]
}

/// Severity lexicon in scan order (critical first, first match wins).
/// "mild" appears in both the medium and low tiers; the medium tier is
/// scanned first and therefore shadows the low entry.
pub fn builtin_severity_lexicon() -> Vec<SeverityTier> {
    vec![
        severity_tier(
            UrgencyLevel::Critical,
            &["severe", "बहुत ज्यादा", "extreme", "अत्यधिक", "unbearable", "बर्दाश्त नहीं"],
        ),
        severity_tier(
            UrgencyLevel::High,
            &["high", "ज्यादा", "persistent", "लगातार", "constant", "स्थिर"],
        ),
        severity_tier(
            UrgencyLevel::Medium,
            &["moderate", "ठीक-ठाक", "mild", "हल्का", "some", "कुछ"],
        ),
        severity_tier(
            UrgencyLevel::Low,
            &["slight", "हल्का सा", "mild", "occasional", "कभी-कभी"],
        ),
    ]
}
