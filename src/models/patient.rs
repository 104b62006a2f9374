use serde::{Deserialize, Serialize};

use super::enums::Gender;

/// Vital signs as reported at intake. Every reading is optional;
/// absent readings are simply skipped by the assessor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Body temperature in °F.
    pub temperature: Option<f64>,
    /// Blood pressure as a "systolic/diastolic" string, e.g. "120/80".
    pub blood_pressure: Option<String>,
    /// Heart rate in beats per minute.
    pub heart_rate: Option<u32>,
}

impl VitalSigns {
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.blood_pressure.is_none() && self.heart_rate.is_none()
    }
}

/// One normalized patient assessment request. Constructed once per
/// request (directly or through `models::intake`) and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientAssessmentInput {
    /// Free-text complaint, Hindi and/or English.
    pub complaint: String,
    /// Age in years. Intake defaults missing or implausible values to 30.
    pub age: u32,
    pub gender: Gender,
    pub pregnancy: bool,
    pub chronic_conditions: Vec<String>,
    pub recent_surgery: bool,
    pub vitals: VitalSigns,
    /// Symptom duration in days. Missing duration defaults to 0.
    pub duration_days: u32,
}

impl PatientAssessmentInput {
    /// Age assumed when the intake record carries none.
    pub const DEFAULT_AGE: u32 = 30;

    pub fn new(complaint: impl Into<String>) -> Self {
        Self {
            complaint: complaint.into(),
            ..Self::default()
        }
    }
}

impl Default for PatientAssessmentInput {
    fn default() -> Self {
        Self {
            complaint: String::new(),
            age: Self::DEFAULT_AGE,
            gender: Gender::Unknown,
            pregnancy: false,
            chronic_conditions: Vec::new(),
            recent_surgery: false,
            vitals: VitalSigns::default(),
            duration_days: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_vitals_detected() {
        assert!(VitalSigns::default().is_empty());
        let vitals = VitalSigns {
            temperature: Some(98.6),
            ..VitalSigns::default()
        };
        assert!(!vitals.is_empty());
    }

    #[test]
    fn default_input_uses_conservative_defaults() {
        let input = PatientAssessmentInput::new("मुझे बुखार है");
        assert_eq!(input.age, 30);
        assert_eq!(input.duration_days, 0);
        assert!(input.vitals.is_empty());
        assert!(!input.pregnancy);
    }
}
