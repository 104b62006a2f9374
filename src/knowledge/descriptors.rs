use crate::models::enums::UrgencyLevel;
use crate::models::triage::TriageLevelDescriptor;

fn descriptor(
    level: UrgencyLevel,
    description: &str,
    hindi_guidance: &str,
    action: &str,
    hindi_action: &str,
    color: &str,
    wait_time: &str,
) -> TriageLevelDescriptor {
    TriageLevelDescriptor {
        level,
        ordinal: level.ordinal(),
        description: description.to_string(),
        hindi_guidance: hindi_guidance.to_string(),
        action: action.to_string(),
        hindi_action: hindi_action.to_string(),
        color: color.to_string(),
        wait_time: wait_time.to_string(),
    }
}

/// The four triage-level descriptor rows, critical first.
pub fn builtin() -> Vec<TriageLevelDescriptor> {
    vec![
        descriptor(
            UrgencyLevel::Critical,
            "तत्काल चिकित्सा सहायता आवश्यक",
            "आपातकालीन स्थिति - तुरंत अस्पताल जाएं",
            "Call emergency services immediately",
            "108 पर कॉल करें या तुरंत अस्पताल जाएं",
            "red",
            "0-5 minutes",
        ),
        descriptor(
            UrgencyLevel::High,
            "जल्द चिकित्सा सहायता आवश्यक",
            "गंभीर स्थिति - जल्दी डॉक्टर से मिलें",
            "Visit emergency department within 1-2 hours",
            "1-2 घंटे के भीतर अस्पताल जाएं",
            "orange",
            "15-30 minutes",
        ),
        descriptor(
            UrgencyLevel::Medium,
            "चिकित्सा सलाह आवश्यक",
            "सावधानी आवश्यक - डॉक्टर से सलाह लें",
            "Schedule doctor appointment within 24 hours",
            "24 घंटे के भीतर डॉक्टर से मिलें",
            "yellow",
            "1-2 hours",
        ),
        descriptor(
            UrgencyLevel::Low,
            "सामान्य चिकित्सा सलाह",
            "सामान्य स्थिति - नियमित चेकअप कराएं",
            "Monitor symptoms and consult if worsening",
            "लक्षणों पर नजर रखें और बिगड़ने पर डॉक्टर से मिलें",
            "green",
            "2-4 hours",
        ),
    ]
}
