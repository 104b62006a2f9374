use serde::{Deserialize, Serialize};

/// Ordinal clinical urgency. The derived ordering is total:
/// `Low < Medium < High < Critical`, so escalation is `max` and the
/// monotonicity invariant is mechanically checkable.
///
/// The same scale classifies the final triage level, emergency keyword
/// tiers, and per-symptom severities.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
            UrgencyLevel::Critical => "critical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(UrgencyLevel::Low),
            "medium" => Some(UrgencyLevel::Medium),
            "high" => Some(UrgencyLevel::High),
            "critical" => Some(UrgencyLevel::Critical),
            _ => None,
        }
    }

    /// Clinical triage ordinal: critical = 1 (seen first) through low = 4.
    pub fn ordinal(self) -> u8 {
        match self {
            UrgencyLevel::Critical => 1,
            UrgencyLevel::High => 2,
            UrgencyLevel::Medium => 3,
            UrgencyLevel::Low => 4,
        }
    }

    /// One-directional promotion. Never lowers the current level.
    #[must_use]
    pub fn escalate(self, other: Self) -> Self {
        self.max(other)
    }
}

/// Primary language of a patient complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hindi,
    English,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Hindi => "hindi",
            Language::English => "english",
        }
    }
}

/// Patient gender as reported at intake. Only `Female` participates in
/// rule logic (pregnancy risk factor).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    #[default]
    Unknown,
}

impl Gender {
    /// Lenient parse for intake records ("Female", "F", "महिला", ...).
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" | "महिला" | "स्त्री" => Gender::Female,
            "male" | "m" | "पुरुष" => Gender::Male,
            _ => Gender::Unknown,
        }
    }
}

/// Data classification governing audit and compliance handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataClassification {
    Phi,
    Pii,
    Sensitive,
    Public,
}

impl DataClassification {
    /// Wire string used in audit records.
    pub fn as_str(self) -> &'static str {
        match self {
            DataClassification::Phi => "protected_health_information",
            DataClassification::Pii => "personally_identifiable_information",
            DataClassification::Sensitive => "sensitive_medical_data",
            DataClassification::Public => "public_information",
        }
    }

    /// Accepts both the long wire strings and the common short forms.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "phi" | "protected_health_information" => Some(DataClassification::Phi),
            "pii" | "personally_identifiable_information" => Some(DataClassification::Pii),
            "sensitive" | "sensitive_medical_data" => Some(DataClassification::Sensitive),
            "public" | "public_information" => Some(DataClassification::Public),
            _ => None,
        }
    }
}
