//! Static clinical reference tables: recognized conditions, emergency
//! keyword tiers, the severity lexicon, and triage-level descriptors.
//!
//! Built once at first use and read-only thereafter. The table types
//! derive serde so a host may assemble an alternative base from its own
//! configuration, but the core owns no file format.

pub mod conditions;
pub mod descriptors;
pub mod emergency;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::models::enums::UrgencyLevel;
use crate::models::triage::TriageLevelDescriptor;
pub use conditions::Condition;
pub use emergency::{EmergencyTier, SeverityTier};

/// The full reference data set consulted during an assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub conditions: Vec<Condition>,
    /// Emergency tiers in scan order: critical, then high, then medium.
    pub emergency_tiers: Vec<EmergencyTier>,
    /// Severity lexicon tiers in scan order: critical, high, medium, low.
    pub severity_lexicon: Vec<SeverityTier>,
    pub descriptors: Vec<TriageLevelDescriptor>,
}

static BUILTIN: LazyLock<KnowledgeBase> = LazyLock::new(KnowledgeBase::built_in_tables);

impl KnowledgeBase {
    /// Process-wide built-in knowledge base.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    fn built_in_tables() -> Self {
        Self {
            conditions: conditions::builtin(),
            emergency_tiers: emergency::builtin_tiers(),
            severity_lexicon: emergency::builtin_severity_lexicon(),
            descriptors: descriptors::builtin(),
        }
    }

    pub fn descriptor(&self, level: UrgencyLevel) -> Option<&TriageLevelDescriptor> {
        self.descriptors.iter().find(|d| d.level == level)
    }
}

/// Case-insensitive substring containment. Callers pass already
/// lowercased text; keywords are lowercased here (a no-op for
/// Devanagari forms).
pub fn text_contains(lower_text: &str, keyword: &str) -> bool {
    lower_text.contains(&keyword.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_fully_populated() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.conditions.len(), 5);
        assert_eq!(kb.emergency_tiers.len(), 3);
        assert_eq!(kb.severity_lexicon.len(), 4);
        assert_eq!(kb.descriptors.len(), 4);
    }

    #[test]
    fn builtin_is_a_singleton() {
        let a = KnowledgeBase::builtin() as *const KnowledgeBase;
        let b = KnowledgeBase::builtin() as *const KnowledgeBase;
        assert_eq!(a, b);
    }

    #[test]
    fn emergency_tiers_in_descending_scan_order() {
        let kb = KnowledgeBase::builtin();
        let levels: Vec<_> = kb.emergency_tiers.iter().map(|t| t.level).collect();
        assert_eq!(
            levels,
            vec![UrgencyLevel::Critical, UrgencyLevel::High, UrgencyLevel::Medium]
        );
    }

    #[test]
    fn severity_lexicon_in_descending_scan_order() {
        let kb = KnowledgeBase::builtin();
        let levels: Vec<_> = kb.severity_lexicon.iter().map(|t| t.level).collect();
        assert_eq!(
            levels,
            vec![
                UrgencyLevel::Critical,
                UrgencyLevel::High,
                UrgencyLevel::Medium,
                UrgencyLevel::Low
            ]
        );
    }

    #[test]
    fn every_level_has_a_descriptor() {
        let kb = KnowledgeBase::builtin();
        for level in [
            UrgencyLevel::Critical,
            UrgencyLevel::High,
            UrgencyLevel::Medium,
            UrgencyLevel::Low,
        ] {
            let descriptor = kb.descriptor(level).expect("descriptor present");
            assert_eq!(descriptor.level, level);
            assert_eq!(descriptor.ordinal, level.ordinal());
        }
    }

    #[test]
    fn keyword_containment_is_case_insensitive() {
        assert!(text_contains("i have severe chest pain", "Chest Pain"));
        assert!(text_contains("मुझे बुखार है", "बुखार"));
        assert!(!text_contains("mild ache", "fever"));
    }

    #[test]
    fn base_round_trips_through_json() {
        let kb = KnowledgeBase::builtin();
        let json = serde_json::to_string(kb).unwrap();
        let restored: KnowledgeBase = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.conditions.len(), kb.conditions.len());
        assert_eq!(restored.descriptors.len(), kb.descriptors.len());
    }
}
