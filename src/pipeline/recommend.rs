//! Fixed recommendation bundles per triage level. Pure lookup — the
//! only inputs are the final level and the symptom names quoted in the
//! patient message.

use crate::models::enums::UrgencyLevel;
use crate::models::symptom::SymptomAnalysis;
use crate::models::triage::RecommendationBundle;

/// Build the action bundle for a final triage level.
pub fn generate(level: UrgencyLevel, analysis: &SymptomAnalysis) -> RecommendationBundle {
    let (immediate_actions, hindi_recommendations) = level_actions(level);

    RecommendationBundle {
        immediate_actions,
        hindi_recommendations,
        follow_up: vec![
            "Keep symptom diary".to_string(),
            "Note any changes in condition".to_string(),
            "Follow medication instructions".to_string(),
        ],
        monitoring: vec![
            "Check temperature twice daily".to_string(),
            "Monitor pain levels".to_string(),
            "Watch for new symptoms".to_string(),
        ],
        patient_message: patient_message(level, analysis),
        follow_up_hours: follow_up_hours(level),
        specialist_needed: matches!(level, UrgencyLevel::Critical | UrgencyLevel::High),
        escalation_required: matches!(level, UrgencyLevel::Critical | UrgencyLevel::High),
    }
}

fn level_actions(level: UrgencyLevel) -> (Vec<String>, Vec<String>) {
    let (english, hindi): (&[&str], &[&str]) = match level {
        UrgencyLevel::Critical => (
            &[
                "Call emergency services (108)",
                "Do not delay seeking care",
                "Have someone stay with patient",
            ],
            &["108 पर तुरंत कॉल करें", "देरी न करें", "किसी को साथ रखें"],
        ),
        UrgencyLevel::High => (
            &[
                "Visit emergency department within 1-2 hours",
                "Bring medical records",
                "Have someone accompany",
            ],
            &["1-2 घंटे में अस्पताल जाएं", "मेडिकल रिकॉर्ड्स लाएं", "किसी को साथ लाएं"],
        ),
        UrgencyLevel::Medium => (
            &[
                "Schedule doctor appointment within 24 hours",
                "Monitor symptoms closely",
                "Rest and stay hydrated",
            ],
            &["24 घंटे में डॉक्टर से मिलें", "लक्षणों पर नजर रखें", "आराम करें और पानी पिएं"],
        ),
        UrgencyLevel::Low => (
            &[
                "Monitor symptoms",
                "Rest and home care",
                "Consult doctor if symptoms worsen",
            ],
            &["लक्षणों पर नजर रखें", "घर पर आराम करें", "लक्षण बिगड़ने पर डॉक्टर से मिलें"],
        ),
    };
    (
        english.iter().map(|s| s.to_string()).collect(),
        hindi.iter().map(|s| s.to_string()).collect(),
    )
}

fn follow_up_hours(level: UrgencyLevel) -> u32 {
    match level {
        UrgencyLevel::Critical => 0,
        UrgencyLevel::High => 2,
        UrgencyLevel::Medium => 24,
        UrgencyLevel::Low => 48,
    }
}

/// Hindi message addressed to the patient, naming the matched symptoms.
fn patient_message(level: UrgencyLevel, analysis: &SymptomAnalysis) -> String {
    if analysis.symptoms.is_empty() {
        return "कृपया अपनी समस्या विस्तार से बताएं".to_string();
    }

    let names = analysis
        .symptoms
        .iter()
        .map(|s| s.hindi_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    match level {
        UrgencyLevel::Critical => format!(
            "आपके {names} जैसे लक्षण अत्यंत गंभीर हो सकते हैं। कृपया तुरंत नजदीकी अस्पताल जाएं या 108 पर कॉल करें।"
        ),
        UrgencyLevel::High => format!(
            "आपके {names} लक्षणों पर तुरंत ध्यान देना जरूरी है। कृपया जल्द से जल्द डॉक्टर से संपर्क करें।"
        ),
        UrgencyLevel::Medium => format!(
            "आपके {names} लक्षणों की निगरानी करें। यदि स्थिति बिगड़े तो डॉक्टर से सलाह लें।"
        ),
        UrgencyLevel::Low => format!(
            "आपके {names} लक्षणों पर ध्यान रखें। घरेलू उपचार से आराम मिल सकता है।"
        ),
    }
}
