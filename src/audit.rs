//! Assessment audit trail collaborator.
//!
//! The engine never writes audit records itself: the caller records one
//! entry per assessment AFTER the engine returns, best-effort. A failing
//! audit sink is logged and must never alter or roll back the computed
//! result (at-least-once, fire-and-forget contract).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::enums::DataClassification;
use crate::models::triage::TriageResult;

/// One audit record. Carries classification and outcome metadata only —
/// never the complaint text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub entry_id: Uuid,
    pub patient_id: String,
    pub action: String,
    pub classification: DataClassification,
    pub risk_score: f32,
    pub escalation_triggered: bool,
    pub recorded_at: DateTime<Utc>,
}

impl AuditEntry {
    /// Build the entry for one completed assessment.
    pub fn for_assessment(
        patient_id: impl Into<String>,
        action: impl Into<String>,
        result: &TriageResult,
    ) -> Self {
        Self {
            entry_id: Uuid::new_v4(),
            patient_id: patient_id.into(),
            action: action.into(),
            classification: DataClassification::Phi,
            risk_score: result.risk_score,
            escalation_triggered: result.recommendations.escalation_required,
            recorded_at: Utc::now(),
        }
    }
}

/// Audit sink errors. Collaborator failures stop here.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("audit sink unavailable: {0}")]
    SinkUnavailable(String),

    #[error("audit entry rejected: {0}")]
    Rejected(String),
}

/// An audit sink. Implementations are provided by the host (database,
/// syslog, SIEM forwarder); the engine ships a tracing-backed default.
pub trait AuditLogger: Send + Sync {
    fn record(&self, entry: &AuditEntry) -> Result<(), AuditError>;
}

/// Default sink: emits the entry as a structured tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditLogger;

impl AuditLogger for TracingAuditLogger {
    fn record(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        tracing::info!(
            entry_id = %entry.entry_id,
            patient_id = %entry.patient_id,
            action = %entry.action,
            classification = entry.classification.as_str(),
            risk_score = entry.risk_score,
            escalation_triggered = entry.escalation_triggered,
            "assessment audited"
        );
        Ok(())
    }
}

/// Record an entry, swallowing sink failures. The failure is logged
/// locally; the caller's `TriageResult` is unaffected either way.
pub fn record_best_effort(logger: &dyn AuditLogger, entry: &AuditEntry) {
    if let Err(err) = logger.record(entry) {
        tracing::warn!(
            error = %err,
            entry_id = %entry.entry_id,
            "audit write failed; triage result unaffected"
        );
    }
}
