//! Static symptom and condition knowledge base.
//!
//! Both tables are read-only and iterated in declaration order, which is
//! also the tie-break order when two conditions end with the same
//! probability.

use twinhealth_core::models::diagnosis::{Rarity, Urgency};

/// A symptom phrase detected by substring match in the complaint text.
#[derive(Debug)]
pub struct SymptomEntry {
    /// Lowercase phrase matched against the complaint text.
    pub phrase: &'static str,
    /// Conditions this symptom points at. Names missing from
    /// [`CONDITIONS`] are ignored when scoring.
    pub conditions: &'static [&'static str],
    /// Baseline urgency for the symptom on its own.
    pub urgency: Urgency,
}

/// A diagnosable condition.
#[derive(Debug)]
pub struct ConditionEntry {
    pub name: &'static str,
    pub icd10: &'static str,
    pub rarity: Rarity,
    /// Finding and symptom tags associated with the condition.
    pub features: &'static [&'static str],
}

pub static SYMPTOMS: &[SymptomEntry] = &[
    SymptomEntry {
        phrase: "chest pain",
        conditions: &[
            "Myocardial Infarction",
            "Angina",
            "Pulmonary Embolism",
            "Anxiety",
            "GERD",
        ],
        urgency: Urgency::Immediate,
    },
    SymptomEntry {
        phrase: "shortness of breath",
        conditions: &[
            "Asthma",
            "COPD",
            "Heart Failure",
            "Pulmonary Embolism",
            "Pneumonia",
        ],
        urgency: Urgency::Urgent,
    },
    SymptomEntry {
        phrase: "fever",
        conditions: &["Infection", "Pneumonia", "UTI", "Sepsis", "Viral Syndrome"],
        urgency: Urgency::Urgent,
    },
    SymptomEntry {
        phrase: "headache",
        conditions: &[
            "Tension Headache",
            "Migraine",
            "Cluster Headache",
            "Sinusitis",
            "Hypertension",
        ],
        urgency: Urgency::Routine,
    },
    SymptomEntry {
        phrase: "abdominal pain",
        conditions: &[
            "Appendicitis",
            "Gastritis",
            "Gallstones",
            "IBS",
            "Peptic Ulcer",
        ],
        urgency: Urgency::Urgent,
    },
];

pub static CONDITIONS: &[ConditionEntry] = &[
    ConditionEntry {
        name: "Myocardial Infarction",
        icd10: "I21.9",
        rarity: Rarity::Common,
        features: &["chest pain", "elevated troponin", "ECG changes", "diaphoresis"],
    },
    ConditionEntry {
        name: "Pneumonia",
        icd10: "J18.9",
        rarity: Rarity::Common,
        features: &["fever", "cough", "shortness of breath", "chest pain"],
    },
    ConditionEntry {
        name: "Type 2 Diabetes",
        icd10: "E11.9",
        rarity: Rarity::Common,
        features: &[
            "elevated glucose",
            "polyuria",
            "polydipsia",
            "elevated HbA1c",
        ],
    },
    ConditionEntry {
        name: "Hypertension",
        icd10: "I10",
        rarity: Rarity::Common,
        features: &["elevated blood pressure", "headache", "dizziness"],
    },
    ConditionEntry {
        name: "Anxiety Disorder",
        icd10: "F41.9",
        rarity: Rarity::Common,
        features: &[
            "chest pain",
            "palpitations",
            "shortness of breath",
            "sweating",
        ],
    },
    ConditionEntry {
        name: "Pulmonary Embolism",
        icd10: "I26.9",
        rarity: Rarity::Uncommon,
        features: &[
            "shortness of breath",
            "chest pain",
            "elevated D-dimer",
            "tachycardia",
        ],
    },
    ConditionEntry {
        name: "Appendicitis",
        icd10: "K35.9",
        rarity: Rarity::Common,
        features: &[
            "right lower quadrant pain",
            "fever",
            "nausea",
            "elevated WBC",
        ],
    },
    ConditionEntry {
        name: "GERD",
        icd10: "K21.9",
        rarity: Rarity::Common,
        features: &["chest pain", "heartburn", "regurgitation", "dysphagia"],
    },
];

/// Look up a symptom by its exact catalog phrase.
pub fn symptom(phrase: &str) -> Option<&'static SymptomEntry> {
    SYMPTOMS.iter().find(|s| s.phrase == phrase)
}

/// Position of a condition in [`CONDITIONS`].
pub fn condition_index(name: &str) -> Option<usize> {
    CONDITIONS.iter().position(|c| c.name == name)
}
