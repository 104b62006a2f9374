use crate::knowledge::KnowledgeBase;
use crate::models::enums::UrgencyLevel;

/// Infer a symptom's severity from intensity words in the complaint.
///
/// Lexicon tiers are scanned critical-first; the first tier with any
/// matching word wins. A complaint with no intensity word defaults to
/// Medium — absence of qualifiers is not evidence of mildness.
pub fn infer_severity(kb: &KnowledgeBase, lower_text: &str) -> UrgencyLevel {
    kb.severity_lexicon
        .iter()
        .find(|tier| tier.matches(lower_text))
        .map(|tier| tier.level)
        .unwrap_or(UrgencyLevel::Medium)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> &'static KnowledgeBase {
        KnowledgeBase::builtin()
    }

    #[test]
    fn severe_is_critical() {
        assert_eq!(
            infer_severity(kb(), "severe pain in my chest"),
            UrgencyLevel::Critical
        );
        assert_eq!(
            infer_severity(kb(), "दर्द बर्दाश्त नहीं हो रहा"),
            UrgencyLevel::Critical
        );
    }

    #[test]
    fn persistent_is_high() {
        assert_eq!(
            infer_severity(kb(), "persistent cough for a while"),
            UrgencyLevel::High
        );
        assert_eq!(infer_severity(kb(), "लगातार खांसी"), UrgencyLevel::High);
    }

    #[test]
    fn unqualified_complaint_defaults_to_medium() {
        assert_eq!(infer_severity(kb(), "मुझे बुखार है"), UrgencyLevel::Medium);
        assert_eq!(infer_severity(kb(), "i have a cough"), UrgencyLevel::Medium);
    }

    #[test]
    fn mild_lands_in_the_medium_tier() {
        // "mild" is listed in both the medium and low tiers; the medium
        // tier is scanned first.
        assert_eq!(infer_severity(kb(), "mild headache"), UrgencyLevel::Medium);
    }

    #[test]
    fn higher_tier_shadows_lower_words() {
        assert_eq!(
            infer_severity(kb(), "severe but occasional cramps"),
            UrgencyLevel::Critical
        );
    }
}
