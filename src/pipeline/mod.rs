pub mod engine; // Multi-signal fusion into one ordinal level
pub mod extraction;
pub mod orchestrator; // End-to-end assessment service
pub mod recommend;
pub mod report;
pub mod risk;
pub mod vitals;

use thiserror::Error;

use crate::models::enums::UrgencyLevel;

/// Unexpected mid-evaluation failures. Callers that must never fail
/// use `TriageService::assess_with_fallback`, which substitutes a
/// conservative high-urgency result instead of surfacing these.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("knowledge base has no descriptor for level '{}'", .0.as_str())]
    MissingDescriptor(UrgencyLevel),

    #[error("internal evaluation failure: {0}")]
    Internal(String),
}
