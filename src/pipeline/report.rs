//! Deterministic rendering of a triage outcome into an ordered Hindi
//! report. No side effects; the same inputs always produce the same
//! text.

use crate::models::symptom::SymptomAnalysis;
use crate::models::triage::{RecommendationBundle, TriageLevelDescriptor};

/// Render the multi-section report: header, level, matched symptoms,
/// risk factors, recommendations.
pub fn render(
    descriptor: &TriageLevelDescriptor,
    analysis: &SymptomAnalysis,
    risk_factors: &[String],
    recommendations: &RecommendationBundle,
) -> String {
    let mut lines = Vec::new();

    lines.push("मेडिकल ट्राइएज रिपोर्ट".to_string());
    lines.push("=".repeat(30));

    lines.push(format!(
        "ट्राइएज स्तर: {}",
        descriptor.level.as_str().to_uppercase()
    ));
    lines.push(format!("हिंदी: {}", descriptor.hindi_guidance));
    lines.push(format!("प्रतीक्षा समय: {}", descriptor.wait_time));
    lines.push(String::new());

    if !analysis.symptoms.is_empty() {
        lines.push("पहचाने गए लक्षण:".to_string());
        for symptom in &analysis.symptoms {
            lines.push(format!(
                "- {} ({} severity)",
                symptom.hindi_name,
                symptom.severity.as_str()
            ));
        }
    }

    if !risk_factors.is_empty() {
        lines.push(String::new());
        lines.push("जोखिम कारक:".to_string());
        for factor in risk_factors {
            lines.push(format!("- {factor}"));
        }
    }

    lines.push(String::new());
    lines.push("सिफारिशें:".to_string());
    for recommendation in &recommendations.hindi_recommendations {
        lines.push(format!("- {recommendation}"));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;
    use crate::models::enums::UrgencyLevel;
    use crate::pipeline::{extraction, recommend};

    fn parts(
        complaint: &str,
        level: UrgencyLevel,
    ) -> (TriageLevelDescriptor, SymptomAnalysis, RecommendationBundle) {
        let kb = KnowledgeBase::builtin();
        let analysis = extraction::extract(kb, complaint);
        let bundle = recommend::generate(level, &analysis);
        let descriptor = kb.descriptor(level).unwrap().clone();
        (descriptor, analysis, bundle)
    }

    #[test]
    fn report_sections_appear_in_order() {
        let (descriptor, analysis, bundle) = parts("मुझे बुखार है", UrgencyLevel::Medium);
        let report = render(&descriptor, &analysis, &["diabetes".to_string()], &bundle);

        let header = report.find("मेडिकल ट्राइएज रिपोर्ट").unwrap();
        let level = report.find("ट्राइएज स्तर: MEDIUM").unwrap();
        let symptoms = report.find("पहचाने गए लक्षण:").unwrap();
        let risks = report.find("जोखिम कारक:").unwrap();
        let recommendations = report.find("सिफारिशें:").unwrap();
        assert!(header < level && level < symptoms && symptoms < risks && risks < recommendations);
    }

    #[test]
    fn symptoms_listed_with_severity() {
        let (descriptor, analysis, bundle) = parts("मुझे बुखार है और सरदर्द है", UrgencyLevel::Medium);
        let report = render(&descriptor, &analysis, &[], &bundle);
        assert!(report.contains("- बुखार (medium severity)"));
        assert!(report.contains("- सरदर्द (medium severity)"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let (descriptor, analysis, bundle) = parts("", UrgencyLevel::Low);
        let report = render(&descriptor, &analysis, &[], &bundle);
        assert!(!report.contains("पहचाने गए लक्षण:"));
        assert!(!report.contains("जोखिम कारक:"));
        assert!(report.contains("सिफारिशें:"));
    }

    #[test]
    fn render_is_deterministic() {
        let (descriptor, analysis, bundle) = parts("मुझे बुखार है", UrgencyLevel::Medium);
        let a = render(&descriptor, &analysis, &[], &bundle);
        let b = render(&descriptor, &analysis, &[], &bundle);
        assert_eq!(a, b);
    }

    #[test]
    fn wait_time_shown_for_level() {
        let (descriptor, analysis, bundle) = parts("unconscious", UrgencyLevel::Critical);
        let report = render(&descriptor, &analysis, &[], &bundle);
        assert!(report.contains("प्रतीक्षा समय: 0-5 minutes"));
    }
}
