use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Free-text clinician form data, keyed by field name.
///
/// Values are kept as entered; numeric parsing happens in the scorer. Keys
/// outside the [`ClinicalField`] vocabulary are preserved but never read by
/// the scorer. A missing key reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalInput(BTreeMap<String, String>);

impl ClinicalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `fieldName -> text`.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Value of a known field, or `""` when absent.
    pub fn get(&self, field: ClinicalField) -> &str {
        self.get_raw(field.key())
    }

    /// Value under an arbitrary key, or `""` when absent.
    pub fn get_raw(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: ClinicalField, value: impl Into<String>) {
        self.0.insert(field.key().to_string(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: ClinicalField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// True when no field carries any non-whitespace text.
    pub fn is_blank(&self) -> bool {
        self.0.values().all(|v| v.trim().is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(ClinicalField, String)> for ClinicalInput {
    fn from_iter<I: IntoIterator<Item = (ClinicalField, String)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field.key().to_string(), value))
                .collect(),
        )
    }
}

/// Form section a [`ClinicalField`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldGroup {
    Demographics,
    PresentingComplaint,
    Vitals,
    SystemExamination,
    Laboratory,
    History,
    Treatment,
    Social,
    SpecialTests,
    RedFlags,
}

/// The known clinician-mode field vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum ClinicalField {
    PatientId,
    DateOfBirth,
    Ethnicity,
    Bmi,
    Smoking,
    Alcohol,
    ChiefComplaint,
    PresentingSymptoms,
    Onset,
    Duration,
    HeartRate,
    BloodPressure,
    Temperature,
    RespiratoryRate,
    SpO2,
    Glucose,
    PainScore,
    Cardiac,
    Respiratory,
    Gastrointestinal,
    Neurological,
    Skin,
    Cbc,
    Bmp,
    Lfts,
    Crp,
    DDimer,
    Troponin,
    Hba1c,
    LipidPanel,
    Urinalysis,
    Imaging,
    PastHistory,
    Surgeries,
    Allergies,
    FamilyHistory,
    CurrentMedications,
    Occupation,
    Travel,
    Exposures,
    SpecialTests,
    RedFlags,
}

impl ClinicalField {
    pub const ALL: [ClinicalField; 42] = [
        Self::PatientId,
        Self::DateOfBirth,
        Self::Ethnicity,
        Self::Bmi,
        Self::Smoking,
        Self::Alcohol,
        Self::ChiefComplaint,
        Self::PresentingSymptoms,
        Self::Onset,
        Self::Duration,
        Self::HeartRate,
        Self::BloodPressure,
        Self::Temperature,
        Self::RespiratoryRate,
        Self::SpO2,
        Self::Glucose,
        Self::PainScore,
        Self::Cardiac,
        Self::Respiratory,
        Self::Gastrointestinal,
        Self::Neurological,
        Self::Skin,
        Self::Cbc,
        Self::Bmp,
        Self::Lfts,
        Self::Crp,
        Self::DDimer,
        Self::Troponin,
        Self::Hba1c,
        Self::LipidPanel,
        Self::Urinalysis,
        Self::Imaging,
        Self::PastHistory,
        Self::Surgeries,
        Self::Allergies,
        Self::FamilyHistory,
        Self::CurrentMedications,
        Self::Occupation,
        Self::Travel,
        Self::Exposures,
        Self::SpecialTests,
        Self::RedFlags,
    ];

    /// Wire name used as the map key (e.g. `chiefComplaint`).
    pub fn key(self) -> &'static str {
        match self {
            Self::PatientId => "patientId",
            Self::DateOfBirth => "dateOfBirth",
            Self::Ethnicity => "ethnicity",
            Self::Bmi => "bmi",
            Self::Smoking => "smoking",
            Self::Alcohol => "alcohol",
            Self::ChiefComplaint => "chiefComplaint",
            Self::PresentingSymptoms => "presentingSymptoms",
            Self::Onset => "onset",
            Self::Duration => "duration",
            Self::HeartRate => "heartRate",
            Self::BloodPressure => "bloodPressure",
            Self::Temperature => "temperature",
            Self::RespiratoryRate => "respiratoryRate",
            Self::SpO2 => "spO2",
            Self::Glucose => "glucose",
            Self::PainScore => "painScore",
            Self::Cardiac => "cardiac",
            Self::Respiratory => "respiratory",
            Self::Gastrointestinal => "gastrointestinal",
            Self::Neurological => "neurological",
            Self::Skin => "skin",
            Self::Cbc => "cbc",
            Self::Bmp => "bmp",
            Self::Lfts => "lfts",
            Self::Crp => "crp",
            Self::DDimer => "dDimer",
            Self::Troponin => "troponin",
            Self::Hba1c => "hba1c",
            Self::LipidPanel => "lipidPanel",
            Self::Urinalysis => "urinalysis",
            Self::Imaging => "imaging",
            Self::PastHistory => "pastHistory",
            Self::Surgeries => "surgeries",
            Self::Allergies => "allergies",
            Self::FamilyHistory => "familyHistory",
            Self::CurrentMedications => "currentMedications",
            Self::Occupation => "occupation",
            Self::Travel => "travel",
            Self::Exposures => "exposures",
            Self::SpecialTests => "specialTests",
            Self::RedFlags => "redFlags",
        }
    }

    pub fn group(self) -> FieldGroup {
        match self {
            Self::PatientId
            | Self::DateOfBirth
            | Self::Ethnicity
            | Self::Bmi
            | Self::Smoking
            | Self::Alcohol => FieldGroup::Demographics,
            Self::ChiefComplaint | Self::PresentingSymptoms | Self::Onset | Self::Duration => {
                FieldGroup::PresentingComplaint
            }
            Self::HeartRate
            | Self::BloodPressure
            | Self::Temperature
            | Self::RespiratoryRate
            | Self::SpO2
            | Self::Glucose
            | Self::PainScore => FieldGroup::Vitals,
            Self::Cardiac
            | Self::Respiratory
            | Self::Gastrointestinal
            | Self::Neurological
            | Self::Skin => FieldGroup::SystemExamination,
            Self::Cbc
            | Self::Bmp
            | Self::Lfts
            | Self::Crp
            | Self::DDimer
            | Self::Troponin
            | Self::Hba1c
            | Self::LipidPanel
            | Self::Urinalysis
            | Self::Imaging => FieldGroup::Laboratory,
            Self::PastHistory | Self::Surgeries | Self::Allergies | Self::FamilyHistory => {
                FieldGroup::History
            }
            Self::CurrentMedications => FieldGroup::Treatment,
            Self::Occupation | Self::Travel | Self::Exposures => FieldGroup::Social,
            Self::SpecialTests => FieldGroup::SpecialTests,
            Self::RedFlags => FieldGroup::RedFlags,
        }
    }
}

impl fmt::Display for ClinicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ClinicalField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}
