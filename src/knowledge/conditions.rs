use serde::{Deserialize, Serialize};

use super::text_contains;

/// A recognizable condition: bilingual trigger keywords plus the symptom
/// tags associated with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    pub hindi_name: String,
    /// Bilingual keyword forms matched as substrings of the complaint.
    pub keywords: Vec<String>,
    /// Associated symptom tags, for downstream reference.
    pub symptoms: Vec<String>,
}

impl Condition {
    /// First keyword occurring in the (lowercased) complaint text.
    pub fn matched_keyword(&self, lower_text: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|kw| text_contains(lower_text, kw))
            .map(String::as_str)
    }
}

fn condition(id: &str, hindi_name: &str, keywords: &[&str], symptoms: &[&str]) -> Condition {
    Condition {
        id: id.to_string(),
        hindi_name: hindi_name.to_string(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
    }
}

/// The built-in condition table.
pub fn builtin() -> Vec<Condition> {
    vec![
        condition(
            "fever",
            "बुखार",
            &["बुखार", "fever", "ताप", "ज्वर"],
            &["high_temperature", "body_aches", "headache"],
        ),
        condition(
            "cough",
            "खांसी",
            &["खांसी", "cough", "कफ", "सूखी खांसी"],
            &["dry_cough", "wet_cough", "chest_pain"],
        ),
        condition(
            "chest_pain",
            "छाती में दर्द",
            &["छाती दर्द", "chest pain", "दिल का दर्द", "हृदय दर्द"],
            &["sharp_pain", "pressure", "shortness_of_breath"],
        ),
        condition(
            "headache",
            "सरदर्द",
            &["सरदर्द", "headache", "माइग्रेन", "दिमाग दर्द"],
            &["throbbing", "pressure", "light_sensitivity"],
        ),
        condition(
            "breathing_difficulty",
            "सांस लेने में कठिनाई",
            &["सांस फूलना", "breathing difficulty", "shortness of breath", "दमा"],
            &["shortness_of_breath", "wheezing", "chest_tightness"],
        ),
    ]
}
