pub mod audit; // Assessment audit trail collaborator (best-effort)
pub mod authorization; // Compliance gate checked by callers before PHI use
pub mod config;
pub mod knowledge; // Static clinical reference tables
pub mod models;
pub mod pipeline; // Extraction + scoring + decision + reporting

pub use models::enums::{DataClassification, Gender, Language, UrgencyLevel};
pub use models::patient::{PatientAssessmentInput, VitalSigns};
pub use models::triage::TriageResult;
pub use pipeline::orchestrator::TriageService;
pub use pipeline::TriageError;
