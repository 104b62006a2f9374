//! Additive risk-factor collection. Factors are human-readable strings
//! for the report and audit trail; they carry no numeric weight.

use crate::models::enums::Gender;
use crate::models::patient::PatientAssessmentInput;

/// Collect the patient's risk factors.
pub fn assess(input: &PatientAssessmentInput) -> Vec<String> {
    let mut factors = Vec::new();

    if input.age > 65 {
        factors.push("Advanced age (>65 years)".to_string());
    } else if input.age < 5 {
        factors.push("Very young age (<5 years)".to_string());
    }

    if input.gender == Gender::Female && input.pregnancy {
        factors.push("Pregnancy".to_string());
    }

    factors.extend(input.chronic_conditions.iter().cloned());

    if input.recent_surgery {
        factors.push("Recent surgery".to_string());
    }

    factors
}
