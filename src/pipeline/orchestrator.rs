//! End-to-end assessment service: extraction → vitals → risk factors →
//! decision engine → recommendations → report, assembled into one
//! immutable `TriageResult`.

use crate::knowledge::{descriptors, KnowledgeBase};
use crate::models::enums::UrgencyLevel;
use crate::models::patient::PatientAssessmentInput;
use crate::models::symptom::SymptomAnalysis;
use crate::models::triage::{ContributingFactors, TriageResult, VitalsAssessment};

use super::{engine, extraction, recommend, report, risk, vitals, TriageError};

/// The triage decision-support service. Pure and synchronous: safe to
/// share across threads and to invoke concurrently for independent
/// requests.
#[derive(Debug, Clone, Copy)]
pub struct TriageService {
    kb: &'static KnowledgeBase,
}

impl TriageService {
    pub fn new() -> Self {
        Self {
            kb: KnowledgeBase::builtin(),
        }
    }

    /// Use an alternative reference data set (assembled by the host from
    /// its own configuration).
    pub fn with_knowledge_base(kb: &'static KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn knowledge_base(&self) -> &'static KnowledgeBase {
        self.kb
    }

    /// Run one assessment.
    ///
    /// Missing or malformed input sub-fields have already been defaulted
    /// at intake, so evaluation itself cannot fail on patient data; an
    /// error here means the engine's own reference data is unusable.
    pub fn assess(&self, input: &PatientAssessmentInput) -> Result<TriageResult, TriageError> {
        let analysis = extraction::extract(self.kb, &input.complaint);
        let vitals_verdict = vitals::assess(&input.vitals);
        let risk_factors = risk::assess(input);

        let determination = engine::determine(&analysis, input, &vitals_verdict);
        let level = determination.level;

        let descriptor = self
            .kb
            .descriptor(level)
            .ok_or(TriageError::MissingDescriptor(level))?
            .clone();
        let recommendations = recommend::generate(level, &analysis);
        let report_text = report::render(&descriptor, &analysis, &risk_factors, &recommendations);

        tracing::info!(
            level = level.as_str(),
            risk_score = risk_score(level),
            symptom_count = analysis.symptoms.len(),
            emergency = analysis.emergency_level().as_str(),
            vitals = vitals_verdict.level.as_str(),
            escalation_required = recommendations.escalation_required,
            "triage assessment complete"
        );

        Ok(TriageResult {
            level,
            risk_score: risk_score(level),
            details: descriptor,
            factors: ContributingFactors {
                emergency: analysis.emergency.clone(),
                max_symptom_severity: determination.max_symptom_severity,
                vitals: vitals_verdict,
                risk_factors,
                duration_days: input.duration_days,
                fired_rules: determination.fired_rules,
            },
            analysis,
            recommendations,
            report: report_text,
            complete: true,
        })
    }

    /// Run one assessment, substituting a conservative fallback for any
    /// internal failure. Under-triage is the unsafe direction, so the
    /// fallback is High — never a silent Low.
    pub fn assess_with_fallback(&self, input: &PatientAssessmentInput) -> TriageResult {
        match self.assess(input) {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    "triage evaluation failed; substituting conservative fallback"
                );
                fallback_result()
            }
        }
    }
}

impl Default for TriageService {
    fn default() -> Self {
        Self::new()
    }
}

/// Coarse risk score per level.
pub fn risk_score(level: UrgencyLevel) -> f32 {
    match level {
        UrgencyLevel::Critical => 0.8,
        UrgencyLevel::High => 0.6,
        UrgencyLevel::Medium => 0.4,
        UrgencyLevel::Low => 0.2,
    }
}

/// The conservative substitute result: High urgency, flagged incomplete.
fn fallback_result() -> TriageResult {
    let level = UrgencyLevel::High;
    let descriptor = descriptors::builtin()
        .into_iter()
        .find(|d| d.level == level)
        .expect("built-in descriptor table covers every level");
    let analysis = SymptomAnalysis {
        symptoms: Vec::new(),
        emergency: None,
        language: crate::models::enums::Language::Hindi,
        duration_mentioned_days: None,
    };
    let recommendations = recommend::generate(level, &analysis);

    TriageResult {
        level,
        risk_score: risk_score(level),
        details: descriptor,
        factors: ContributingFactors {
            emergency: None,
            max_symptom_severity: UrgencyLevel::Low,
            vitals: VitalsAssessment::low(),
            risk_factors: Vec::new(),
            duration_days: 0,
            fired_rules: Vec::new(),
        },
        analysis,
        recommendations,
        report: "Please consult a healthcare provider immediately".to_string(),
        complete: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{Gender, Language};
    use crate::models::patient::VitalSigns;

    fn service() -> TriageService {
        TriageService::new()
    }

    fn input(complaint: &str) -> PatientAssessmentInput {
        PatientAssessmentInput::new(complaint)
    }

    // ── Scenario A: Hindi fever + headache with moderate fever ─

    #[test]
    fn scenario_hindi_fever_and_headache() {
        let patient = PatientAssessmentInput {
            age: 35,
            vitals: VitalSigns {
                temperature: Some(102.5),
                blood_pressure: Some("120/80".to_string()),
                heart_rate: None,
            },
            duration_days: 0,
            ..input("मुझे बुखार है और सरदर्द है")
        };
        let result = service().assess(&patient).unwrap();

        assert_eq!(result.level, UrgencyLevel::Medium);
        let conditions: Vec<_> = result
            .analysis
            .symptoms
            .iter()
            .map(|s| s.condition.as_str())
            .collect();
        assert_eq!(conditions, vec!["fever", "headache"]);
        assert!(result
            .analysis
            .symptoms
            .iter()
            .all(|s| s.severity == UrgencyLevel::Medium));
        assert_eq!(result.analysis.emergency_level(), UrgencyLevel::Low);
        assert_eq!(result.analysis.language, Language::Hindi);
        assert_eq!(result.factors.vitals.level, UrgencyLevel::Medium);
        assert!(result.complete);
    }

    // ── Scenario B: high-tier emergency keyword ────────────────

    #[test]
    fn scenario_severe_chest_pain_short_circuits() {
        let patient = PatientAssessmentInput {
            age: 45,
            ..input("severe chest pain and difficulty breathing")
        };
        let result = service().assess(&patient).unwrap();

        assert_eq!(result.level, UrgencyLevel::High);
        assert_eq!(result.factors.fired_rules.len(), 1);
        assert_eq!(result.factors.fired_rules[0].rule, "emergency_high");
        assert!(result.recommendations.escalation_required);
    }

    // ── Scenario C: empty input ────────────────────────────────

    #[test]
    fn scenario_empty_input_is_low() {
        let result = service().assess(&input("")).unwrap();
        assert_eq!(result.level, UrgencyLevel::Low);
        assert!(result.analysis.symptoms.is_empty());
        assert_eq!(result.analysis.emergency_level(), UrgencyLevel::Low);
        assert_eq!(result.factors.vitals.level, UrgencyLevel::Low);
        assert!(result.complete);
    }

    // ── Critical keywords dominate everything ──────────────────

    #[test]
    fn critical_keyword_forces_critical_regardless_of_fields() {
        for complaint in ["बेहोशी हो गई", "he is unconscious", "stroke symptoms"] {
            let patient = PatientAssessmentInput {
                age: 25,
                vitals: VitalSigns {
                    temperature: Some(98.6),
                    blood_pressure: Some("120/80".to_string()),
                    heart_rate: Some(72),
                },
                ..input(complaint)
            };
            let result = service().assess(&patient).unwrap();
            assert_eq!(result.level, UrgencyLevel::Critical, "complaint: {complaint}");
            assert_eq!(result.risk_score, 0.8);
        }
    }

    // ── Vitals-only escalation ─────────────────────────────────

    #[test]
    fn vitals_only_escalation_to_high() {
        let patient = PatientAssessmentInput {
            vitals: VitalSigns {
                temperature: Some(104.0),
                ..VitalSigns::default()
            },
            ..input("feeling generally unwell today")
        };
        let result = service().assess(&patient).unwrap();
        assert_eq!(result.level, UrgencyLevel::High);
        assert_eq!(result.factors.fired_rules[0].rule, "vitals_escalation");
    }

    // ── Idempotence ────────────────────────────────────────────

    #[test]
    fn identical_inputs_produce_identical_results() {
        let patient = PatientAssessmentInput {
            age: 70,
            gender: Gender::Female,
            chronic_conditions: vec!["diabetes".to_string()],
            vitals: VitalSigns {
                temperature: Some(102.0),
                blood_pressure: Some("150/95".to_string()),
                heart_rate: Some(88),
            },
            duration_days: 4,
            ..input("मुझे 4 दिन से बुखार है")
        };
        let first = service().assess(&patient).unwrap();
        let second = service().assess(&patient).unwrap();
        assert_eq!(first, second);
    }

    // ── Monotonicity at the service level ──────────────────────

    #[test]
    fn vitals_never_downgrade_symptom_level() {
        // Medium symptoms + perfectly normal vitals stay Medium.
        let patient = PatientAssessmentInput {
            vitals: VitalSigns {
                temperature: Some(98.6),
                blood_pressure: Some("120/80".to_string()),
                heart_rate: Some(70),
            },
            ..input("मुझे बुखार है")
        };
        let result = service().assess(&patient).unwrap();
        assert_eq!(result.level, UrgencyLevel::Medium);
    }

    // ── Risk score mapping ─────────────────────────────────────

    #[test]
    fn risk_scores_follow_levels() {
        assert_eq!(risk_score(UrgencyLevel::Critical), 0.8);
        assert_eq!(risk_score(UrgencyLevel::High), 0.6);
        assert_eq!(risk_score(UrgencyLevel::Medium), 0.4);
        assert_eq!(risk_score(UrgencyLevel::Low), 0.2);
    }

    // ── Contributing-factor trail ──────────────────────────────

    #[test]
    fn trail_names_the_deciding_rule() {
        let patient = PatientAssessmentInput {
            age: 80,
            chronic_conditions: vec!["hypertension".to_string()],
            vitals: VitalSigns {
                blood_pressure: Some("190/110".to_string()),
                ..VitalSigns::default()
            },
            ..input("मुझे सरदर्द है")
        };
        let result = service().assess(&patient).unwrap();
        assert_eq!(result.level, UrgencyLevel::High);
        let deciding = result
            .factors
            .fired_rules
            .iter()
            .find(|r| r.after == UrgencyLevel::High)
            .unwrap();
        assert_eq!(deciding.rule, "vitals_escalation");
        assert!(deciding.detail.contains("190"));
        assert_eq!(
            result.factors.risk_factors,
            vec!["Advanced age (>65 years)".to_string(), "hypertension".to_string()]
        );
    }

    #[test]
    fn report_carries_the_trail_sections() {
        let patient = PatientAssessmentInput {
            age: 70,
            ..input("मुझे बुखार है")
        };
        let result = service().assess(&patient).unwrap();
        assert!(result.report.contains("मेडिकल ट्राइएज रिपोर्ट"));
        assert!(result.report.contains("बुखार"));
        assert!(result.report.contains("Advanced age (>65 years)"));
    }

    // ── Fail-safe-high fallback ────────────────────────────────

    #[test]
    fn fallback_is_high_and_incomplete() {
        // A deliberately unusable reference base: no descriptors.
        let broken: &'static KnowledgeBase = Box::leak(Box::new(KnowledgeBase {
            conditions: Vec::new(),
            emergency_tiers: Vec::new(),
            severity_lexicon: Vec::new(),
            descriptors: Vec::new(),
        }));
        let service = TriageService::with_knowledge_base(broken);

        assert!(service.assess(&input("मुझे बुखार है")).is_err());

        let result = service.assess_with_fallback(&input("मुझे बुखार है"));
        assert_eq!(result.level, UrgencyLevel::High);
        assert!(!result.complete);
        assert!(result.report.contains("immediately"));
        assert_eq!(result.risk_score, 0.6);
    }
}
