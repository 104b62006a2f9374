//! The triage decision engine: fuses the emergency scan, per-symptom
//! severities, age, vitals, and duration into one ordinal level.
//!
//! Rules run in a fixed order over `{low, medium, high, critical}` and
//! may only escalate the working level. Critical is terminal. Every rule
//! whose condition matched is recorded in the fired-rule trail, including
//! matches that could not raise the level further — the trail is the
//! audit record, not just an explanation of the winner.

use crate::models::enums::UrgencyLevel;
use crate::models::patient::PatientAssessmentInput;
use crate::models::symptom::SymptomAnalysis;
use crate::models::triage::{FiredRule, VitalsAssessment};

/// Outcome of the rule cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Determination {
    pub level: UrgencyLevel,
    pub max_symptom_severity: UrgencyLevel,
    pub fired_rules: Vec<FiredRule>,
}

/// Run the rule cascade.
///
/// Rule order:
/// 1. emergency tier Critical — terminal
/// 2. emergency tier High — terminal (fires before symptom severities
///    are consulted, so a Critical-severity symptom cannot override it)
/// 3. any Critical-severity symptom — terminal; otherwise the working
///    level starts at the max symptom severity
/// 4. age modifier (age >65 or <5, re-asserts High/Medium severity)
/// 5. vitals escalation (High/Critical verdicts only)
/// 6. duration modifier (>7d with High severity, >3d with Medium)
///
/// Rules 4 and 6 can only re-assert a level rule 3 already reached; they
/// are kept for parity with the established triage protocol and so their
/// matches still appear in the trail.
pub fn determine(
    analysis: &SymptomAnalysis,
    input: &PatientAssessmentInput,
    vitals: &VitalsAssessment,
) -> Determination {
    let max_severity = analysis.max_severity();
    let mut fired = Vec::new();

    // Rules 1-2: global emergency keywords take highest priority.
    let emergency_keyword = analysis
        .emergency
        .as_ref()
        .map(|m| m.keyword.as_str())
        .unwrap_or_default();
    match analysis.emergency_level() {
        UrgencyLevel::Critical => {
            fired.push(terminal_rule(
                "emergency_critical",
                format!("emergency keyword '{emergency_keyword}'"),
                UrgencyLevel::Critical,
            ));
            tracing::warn!(rule = "emergency_critical", "critical emergency keyword matched");
            return Determination {
                level: UrgencyLevel::Critical,
                max_symptom_severity: max_severity,
                fired_rules: fired,
            };
        }
        UrgencyLevel::High => {
            fired.push(terminal_rule(
                "emergency_high",
                format!("emergency keyword '{emergency_keyword}'"),
                UrgencyLevel::High,
            ));
            return Determination {
                level: UrgencyLevel::High,
                max_symptom_severity: max_severity,
                fired_rules: fired,
            };
        }
        _ => {}
    }

    // Rule 3: symptom severities.
    if max_severity == UrgencyLevel::Critical {
        fired.push(terminal_rule(
            "symptom_critical",
            "critical-severity symptom".to_string(),
            UrgencyLevel::Critical,
        ));
        tracing::warn!(rule = "symptom_critical", "critical-severity symptom matched");
        return Determination {
            level: UrgencyLevel::Critical,
            max_symptom_severity: max_severity,
            fired_rules: fired,
        };
    }
    let mut level = max_severity;

    // Rule 4: age modifier.
    if input.age > 65 || input.age < 5 {
        match max_severity {
            UrgencyLevel::High => escalate(
                &mut level,
                &mut fired,
                "age_modifier",
                format!("age {} with high-severity symptoms", input.age),
                UrgencyLevel::High,
            ),
            UrgencyLevel::Medium => escalate(
                &mut level,
                &mut fired,
                "age_modifier",
                format!("age {} with medium-severity symptoms", input.age),
                UrgencyLevel::Medium,
            ),
            _ => {}
        }
    }

    // Rule 5: vitals escalation.
    match vitals.level {
        UrgencyLevel::Critical | UrgencyLevel::High => {
            let detail = vitals
                .trigger
                .as_ref()
                .map(|t| t.describe())
                .unwrap_or_else(|| "abnormal vitals".to_string());
            escalate(&mut level, &mut fired, "vitals_escalation", detail, vitals.level);
        }
        _ => {}
    }

    // Rule 6: duration modifier.
    if input.duration_days > 7 && max_severity == UrgencyLevel::High {
        escalate(
            &mut level,
            &mut fired,
            "duration_modifier",
            format!("{} days with high-severity symptoms", input.duration_days),
            UrgencyLevel::High,
        );
    } else if input.duration_days > 3 && max_severity == UrgencyLevel::Medium {
        escalate(
            &mut level,
            &mut fired,
            "duration_modifier",
            format!("{} days with medium-severity symptoms", input.duration_days),
            UrgencyLevel::Medium,
        );
    }

    debug_assert!(level >= max_severity, "modifiers must never downgrade");

    Determination {
        level,
        max_symptom_severity: max_severity,
        fired_rules: fired,
    }
}

fn terminal_rule(rule: &str, detail: String, level: UrgencyLevel) -> FiredRule {
    FiredRule {
        rule: rule.to_string(),
        detail,
        before: UrgencyLevel::Low,
        after: level,
    }
}

fn escalate(
    level: &mut UrgencyLevel,
    fired: &mut Vec<FiredRule>,
    rule: &str,
    detail: String,
    to: UrgencyLevel,
) {
    let before = *level;
    *level = level.escalate(to);
    tracing::debug!(rule, before = before.as_str(), after = level.as_str(), "triage rule fired");
    fired.push(FiredRule {
        rule: rule.to_string(),
        detail,
        before,
        after: *level,
    });
}
