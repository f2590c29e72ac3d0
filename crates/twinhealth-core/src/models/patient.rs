use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Patient self-report form. Every field is free text and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PatientRecord {
    pub name: String,
    pub age: String,
    pub sex: String,
    /// Kilograms.
    pub weight: String,
    /// Centimetres.
    pub height: String,
    pub contact: String,
    pub heart_rate: String,
    pub blood_sugar: String,
    pub temperature: String,
    pub blood_pressure: String,
    #[serde(rename = "spO2")]
    pub spo2: String,
    pub medical_history: String,
    pub medications: String,
}

impl PatientRecord {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
