use serde::{Deserialize, Serialize};

use super::enums::UrgencyLevel;
use super::symptom::{EmergencyMatch, SymptomAnalysis};

/// Reference row describing one triage level for patients and staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageLevelDescriptor {
    pub level: UrgencyLevel,
    /// Clinical ordinal, 1 (critical) through 4 (low).
    pub ordinal: u8,
    /// Short Hindi description of the situation.
    pub description: String,
    /// Longer Hindi guidance line.
    pub hindi_guidance: String,
    /// Recommended action, English.
    pub action: String,
    /// Recommended action, Hindi.
    pub hindi_action: String,
    /// Display color code ("red", "orange", "yellow", "green").
    pub color: String,
    /// Expected wait-time band, e.g. "0-5 minutes".
    pub wait_time: String,
}

/// Which vital-sign check tripped the assessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VitalTrigger {
    Temperature { degrees_f: f64 },
    BloodPressure { systolic: u32 },
    HeartRate { bpm: u32 },
}

impl VitalTrigger {
    pub fn describe(&self) -> String {
        match self {
            VitalTrigger::Temperature { degrees_f } => {
                format!("temperature {degrees_f}°F")
            }
            VitalTrigger::BloodPressure { systolic } => {
                format!("systolic pressure {systolic} mmHg")
            }
            VitalTrigger::HeartRate { bpm } => format!("heart rate {bpm} bpm"),
        }
    }
}

/// Vital-sign verdict plus the reading that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsAssessment {
    pub level: UrgencyLevel,
    /// None when no reading crossed a threshold (or vitals were absent).
    pub trigger: Option<VitalTrigger>,
}

impl VitalsAssessment {
    pub fn low() -> Self {
        Self {
            level: UrgencyLevel::Low,
            trigger: None,
        }
    }
}

/// One decision-engine rule whose condition matched, for the audit trail.
/// `before == after` records a matched rule that could not raise the level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiredRule {
    pub rule: String,
    pub detail: String,
    pub before: UrgencyLevel,
    pub after: UrgencyLevel,
}

/// The full contributing-factor trail behind one triage determination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributingFactors {
    pub emergency: Option<EmergencyMatch>,
    pub max_symptom_severity: UrgencyLevel,
    pub vitals: VitalsAssessment,
    pub risk_factors: Vec<String>,
    pub duration_days: u32,
    pub fired_rules: Vec<FiredRule>,
}

/// Action bundle for the final level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub immediate_actions: Vec<String>,
    pub hindi_recommendations: Vec<String>,
    pub follow_up: Vec<String>,
    pub monitoring: Vec<String>,
    /// Hindi message addressed to the patient, naming the matched symptoms.
    pub patient_message: String,
    /// Follow-up window in hours (0 for critical).
    pub follow_up_hours: u32,
    pub specialist_needed: bool,
    pub escalation_required: bool,
}

/// Outcome of one assessment. Produced once, never mutated, and free of
/// timestamps or random ids so identical inputs compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    pub level: UrgencyLevel,
    /// Coarse risk score in [0, 1]: 0.8 / 0.6 / 0.4 / 0.2 by level.
    pub risk_score: f32,
    pub details: TriageLevelDescriptor,
    pub analysis: SymptomAnalysis,
    pub factors: ContributingFactors,
    pub recommendations: RecommendationBundle,
    /// Rendered Hindi report text.
    pub report: String,
    /// False only for the conservative fallback result.
    pub complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vital_trigger_describe_names_the_reading() {
        let t = VitalTrigger::Temperature { degrees_f: 104.0 };
        assert!(t.describe().contains("104"));
        let bp = VitalTrigger::BloodPressure { systolic: 190 };
        assert!(bp.describe().contains("190"));
        let hr = VitalTrigger::HeartRate { bpm: 130 };
        assert!(hr.describe().contains("130"));
    }

    #[test]
    fn vitals_assessment_low_has_no_trigger() {
        let v = VitalsAssessment::low();
        assert_eq!(v.level, UrgencyLevel::Low);
        assert!(v.trigger.is_none());
    }

    #[test]
    fn fired_rule_serializes() {
        let rule = FiredRule {
            rule: "vitals_escalation".to_string(),
            detail: "temperature 104°F".to_string(),
            before: UrgencyLevel::Low,
            after: UrgencyLevel::High,
        };
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("vitals_escalation"));
        assert!(json.contains("\"after\":\"high\""));
    }
}
