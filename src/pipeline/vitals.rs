//! Threshold classification of vital signs.
//!
//! Checks run in a fixed order — temperature, blood pressure, heart
//! rate — and the first reading to cross a threshold decides the
//! verdict. First-match-wins is the contract, not an oversight: the
//! check order encodes which deranged vital is treated as the leading
//! signal when several are abnormal at once.

use crate::models::enums::UrgencyLevel;
use crate::models::patient::VitalSigns;
use crate::models::triage::{VitalTrigger, VitalsAssessment};

/// Assess the vital-sign bundle. Absent vitals are Low.
pub fn assess(vitals: &VitalSigns) -> VitalsAssessment {
    if vitals.is_empty() {
        return VitalsAssessment::low();
    }

    if let Some(temp) = vitals.temperature {
        let trigger = VitalTrigger::Temperature { degrees_f: temp };
        if temp > 103.0 {
            return verdict(UrgencyLevel::High, trigger);
        }
        if temp > 101.0 {
            return verdict(UrgencyLevel::Medium, trigger);
        }
    }

    if let Some(bp) = vitals.blood_pressure.as_deref() {
        // Malformed readings are skipped, not raised.
        if let Some((systolic, _diastolic)) = parse_blood_pressure(bp) {
            let trigger = VitalTrigger::BloodPressure { systolic };
            if systolic > 180 || systolic < 90 {
                return verdict(UrgencyLevel::High, trigger);
            }
            if systolic > 160 || systolic < 100 {
                return verdict(UrgencyLevel::Medium, trigger);
            }
        }
    }

    if let Some(hr) = vitals.heart_rate {
        let trigger = VitalTrigger::HeartRate { bpm: hr };
        if hr > 120 || hr < 50 {
            return verdict(UrgencyLevel::High, trigger);
        }
        if hr > 100 || hr < 60 {
            return verdict(UrgencyLevel::Medium, trigger);
        }
    }

    VitalsAssessment::low()
}

fn verdict(level: UrgencyLevel, trigger: VitalTrigger) -> VitalsAssessment {
    VitalsAssessment {
        level,
        trigger: Some(trigger),
    }
}

/// Parse a "systolic/diastolic" reading. Returns None for anything that
/// is not two slash-separated numbers.
pub fn parse_blood_pressure(reading: &str) -> Option<(u32, u32)> {
    let (systolic, diastolic) = reading.split_once('/')?;
    Some((
        systolic.trim().parse().ok()?,
        diastolic.trim().parse().ok()?,
    ))
}
