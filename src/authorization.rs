//! Compliance gate for operations on patient data.
//!
//! Checked by the CALLER before invoking the engine on persisted PHI;
//! never enforced inside the engine itself. Default-deny: every check
//! must pass, and the first failing check names the denial reason.

use crate::models::enums::DataClassification;

/// Why an operation was authorized or denied — for the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateReason {
    /// All checks passed.
    Authorized,
    /// Platform encryption attestation missing.
    EncryptionUnavailable,
    /// Audit logging attestation missing.
    AuditUnavailable,
    /// Access-control attestation missing.
    AccessControlsUnavailable,
    /// Classification outside what the engine may consume.
    DisallowedClassification,
    /// Patient consent absent.
    MissingConsent,
}

/// Result of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateDecision {
    pub allowed: bool,
    pub reason: GateReason,
}

impl GateDecision {
    fn allow() -> Self {
        Self {
            allowed: true,
            reason: GateReason::Authorized,
        }
    }

    fn deny(reason: GateReason) -> Self {
        Self {
            allowed: false,
            reason,
        }
    }
}

/// The compliance gate. The attestation flags describe the host
/// platform; a host without encryption at rest, audit logging, or access
/// controls is denied PHI operations wholesale.
#[derive(Debug, Clone)]
pub struct ComplianceGate {
    pub encryption_enabled: bool,
    pub audit_logging_enabled: bool,
    pub access_controls_enabled: bool,
}

impl Default for ComplianceGate {
    fn default() -> Self {
        Self {
            encryption_enabled: true,
            audit_logging_enabled: true,
            access_controls_enabled: true,
        }
    }
}

impl ComplianceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authorize one data operation. Checks run in order; the first
    /// failure decides, and the default is deny.
    pub fn authorize(
        &self,
        operation: &str,
        classification: DataClassification,
        patient_consent: bool,
    ) -> GateDecision {
        let decision = self.evaluate(classification, patient_consent);

        if !decision.allowed {
            tracing::warn!(
                operation,
                classification = classification.as_str(),
                reason = ?decision.reason,
                "compliance gate denied operation"
            );
        }

        decision
    }

    fn evaluate(&self, classification: DataClassification, consent: bool) -> GateDecision {
        if !self.encryption_enabled {
            return GateDecision::deny(GateReason::EncryptionUnavailable);
        }
        if !self.audit_logging_enabled {
            return GateDecision::deny(GateReason::AuditUnavailable);
        }
        if !self.access_controls_enabled {
            return GateDecision::deny(GateReason::AccessControlsUnavailable);
        }

        // Data minimization: the engine only has business with clinical
        // data classes.
        if !matches!(
            classification,
            DataClassification::Phi | DataClassification::Sensitive
        ) {
            return GateDecision::deny(GateReason::DisallowedClassification);
        }

        if !consent {
            return GateDecision::deny(GateReason::MissingConsent);
        }

        GateDecision::allow()
    }
}
