//! Boundary adapter for assessment records arriving from loosely-typed
//! callers (JSON bodies, transcribed conversations, legacy exports).
//!
//! Field-name drift is resolved HERE, once: `vitals` vs `vital_signs`,
//! `duration` (days) vs `duration_hours`, `chronic_conditions` vs
//! `medical_history`, and symptoms as free text vs a list of terms.
//! The engine only ever sees one canonical `PatientAssessmentInput`.

use serde::Deserialize;
use serde_json::Value;

use super::enums::Gender;
use super::patient::{PatientAssessmentInput, VitalSigns};

/// A raw intake record with every field optional and loosely typed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawAssessmentRecord {
    pub symptoms: Option<SymptomsField>,
    pub age: Option<NumberField>,
    pub gender: Option<String>,
    pub pregnancy: Option<bool>,
    #[serde(alias = "medical_history")]
    pub chronic_conditions: Vec<String>,
    pub recent_surgery: Option<bool>,
    #[serde(alias = "vital_signs")]
    pub vitals: Option<RawVitals>,
    /// Symptom duration in days.
    pub duration: Option<NumberField>,
    /// Legacy duration field; converted to whole days.
    pub duration_hours: Option<NumberField>,
}

/// Complaint text, or a list of symptom terms to be joined.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SymptomsField {
    Text(String),
    List(Vec<SymptomItem>),
}

/// A symptom list entry: a bare term or a structured record whose
/// `hindi_term` carries the display form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SymptomItem {
    Term(String),
    Structured {
        #[serde(default)]
        hindi_term: Option<String>,
    },
}

impl SymptomItem {
    fn term(&self) -> &str {
        match self {
            SymptomItem::Term(s) => s,
            SymptomItem::Structured { hindi_term } => hindi_term.as_deref().unwrap_or(""),
        }
    }
}

/// Numeric field that tolerates string-typed numbers ("45").
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NumberField {
    Num(f64),
    Text(String),
}

impl NumberField {
    fn as_f64(&self) -> Option<f64> {
        match self {
            NumberField::Num(n) => Some(*n),
            NumberField::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawVitals {
    pub temperature: Option<NumberField>,
    #[serde(alias = "bp")]
    pub blood_pressure: Option<BloodPressureField>,
    pub heart_rate: Option<NumberField>,
}

/// Blood pressure arrives as "120/80" text or, from some exports, a bare
/// systolic number. Bare numbers are kept as text and skipped later by
/// the assessor's "systolic/diastolic" parse.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BloodPressureField {
    Text(String),
    Reading(f64),
}

impl BloodPressureField {
    fn as_text(&self) -> String {
        match self {
            BloodPressureField::Text(s) => s.clone(),
            BloodPressureField::Reading(n) => n.to_string(),
        }
    }
}

impl RawAssessmentRecord {
    /// Collapse the raw record into the canonical input. Malformed or
    /// missing fields default (age 30, vitals absent, duration 0) and
    /// never fail the normalization.
    pub fn normalize(self) -> PatientAssessmentInput {
        let complaint = match self.symptoms {
            Some(SymptomsField::Text(text)) => text,
            Some(SymptomsField::List(items)) => items
                .iter()
                .map(SymptomItem::term)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
            None => String::new(),
        };

        let age = self
            .age
            .and_then(|a| a.as_f64())
            .filter(|a| (0.0..=150.0).contains(a))
            .map(|a| a as u32)
            .unwrap_or(PatientAssessmentInput::DEFAULT_AGE);

        let duration_days = self
            .duration
            .and_then(|d| d.as_f64())
            .or_else(|| self.duration_hours.and_then(|h| h.as_f64()).map(|h| h / 24.0))
            .filter(|d| *d >= 0.0)
            .map(|d| d as u32)
            .unwrap_or(0);

        let vitals = self.vitals.map(RawVitals::normalize).unwrap_or_default();

        PatientAssessmentInput {
            complaint,
            age,
            gender: self.gender.as_deref().map(Gender::parse).unwrap_or_default(),
            pregnancy: self.pregnancy.unwrap_or(false),
            chronic_conditions: self.chronic_conditions,
            recent_surgery: self.recent_surgery.unwrap_or(false),
            vitals,
            duration_days,
        }
    }
}

impl RawVitals {
    fn normalize(self) -> VitalSigns {
        VitalSigns {
            temperature: self.temperature.and_then(|t| t.as_f64()),
            blood_pressure: self.blood_pressure.map(|bp| bp.as_text()),
            heart_rate: self
                .heart_rate
                .and_then(|hr| hr.as_f64())
                .filter(|hr| (0.0..=500.0).contains(hr))
                .map(|hr| hr.round() as u32),
        }
    }
}

/// Normalize an arbitrary JSON value into the canonical input.
///
/// A value that is not an assessment object at all normalizes to the
/// default input (empty complaint); the shape problem is logged, not
/// raised, per the field-defaulting recovery policy.
pub fn normalize_value(value: Value) -> PatientAssessmentInput {
    match RawAssessmentRecord::deserialize(value) {
        Ok(raw) => raw.normalize(),
        Err(err) => {
            tracing::warn!(error = %err, "intake record unreadable; using default input");
            PatientAssessmentInput::default()
        }
    }
}
