use twinhealth_core::models::diagnosis::{Diagnosis, Urgency};

pub const IMMEDIATE_ATTENTION: &str = "Immediate medical attention required";
pub const WITHIN_24_HOURS: &str = "Evaluation within 24 hours";

pub const HIGH_CONFIDENCE: &str =
    "High confidence based on clinical presentation and available data";
pub const MODERATE_CONFIDENCE: &str =
    "Moderate confidence - additional testing recommended for definitive diagnosis";

/// Probability the top diagnosis must exceed for a high-confidence statement.
pub const HIGH_CONFIDENCE_THRESHOLD: u32 = 70;

/// Work-up keyed by the leading diagnosis.
fn workup_for(disease: &str) -> &'static [&'static str] {
    match disease {
        "Myocardial Infarction" => &[
            "Immediate ECG",
            "Serial troponins",
            "Chest X-ray",
            "Cardiology consultation",
        ],
        "Pneumonia" => &[
            "Chest X-ray",
            "Blood cultures",
            "Sputum culture",
            "Complete blood count",
        ],
        "Type 2 Diabetes" => &[
            "Fasting glucose",
            "HbA1c",
            "Lipid panel",
            "Diabetic education",
        ],
        "Pulmonary Embolism" => &[
            "CT pulmonary angiogram",
            "D-dimer",
            "Arterial blood gas",
            "Lower extremity ultrasound",
        ],
        _ => &[
            "Further clinical evaluation",
            "Symptom monitoring",
            "Follow-up in 48-72 hours",
        ],
    }
}

/// Next actions for the top-ranked diagnosis, bracketed by the urgency
/// directive: immediate goes first, urgent goes last.
pub fn recommend(diagnoses: &[Diagnosis], urgency: Urgency) -> Vec<String> {
    let mut actions: Vec<String> = diagnoses
        .first()
        .map(|top| workup_for(&top.disease))
        .unwrap_or_default()
        .iter()
        .map(|s| s.to_string())
        .collect();

    match urgency {
        Urgency::Immediate => actions.insert(0, IMMEDIATE_ATTENTION.to_string()),
        Urgency::Urgent => actions.push(WITHIN_24_HOURS.to_string()),
        Urgency::Routine => {}
    }
    actions
}

pub fn confidence_statement(diagnoses: &[Diagnosis]) -> &'static str {
    match diagnoses.first() {
        Some(top) if top.probability > HIGH_CONFIDENCE_THRESHOLD => HIGH_CONFIDENCE,
        _ => MODERATE_CONFIDENCE,
    }
}
