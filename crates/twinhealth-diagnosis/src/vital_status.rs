//! Patient-mode vital sign classification against adult reference ranges.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use twinhealth_core::models::patient::PatientRecord;

use crate::findings::parse_leading_float;

/// A vital sign captured by either form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalKind {
    HeartRate,
    BloodPressure,
    Temperature,
    RespiratoryRate,
    SpO2,
    /// Patient-reported blood sugar.
    BloodSugar,
    /// Clinician-recorded glucose. Same range as [`VitalKind::BloodSugar`].
    Glucose,
}

impl VitalKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::HeartRate => "Heart Rate",
            Self::BloodPressure => "Blood Pressure",
            Self::Temperature => "Temperature",
            Self::RespiratoryRate => "Respiratory Rate",
            Self::SpO2 => "SpO2",
            Self::BloodSugar => "Blood Sugar",
            Self::Glucose => "Glucose",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::HeartRate => "bpm",
            Self::BloodPressure => "mmHg",
            Self::Temperature => "°C",
            Self::RespiratoryRate => "/min",
            Self::SpO2 => "%",
            Self::BloodSugar | Self::Glucose => "mg/dL",
        }
    }

    pub fn reference_range(self) -> &'static str {
        match self {
            Self::HeartRate => "60-100 bpm",
            Self::BloodPressure => "120/80 mmHg",
            Self::Temperature => "36.1-37.2 °C",
            Self::RespiratoryRate => "12-20/min",
            Self::SpO2 => ">95%",
            Self::BloodSugar | Self::Glucose => "80-140 mg/dL",
        }
    }

    /// Value with its unit for display, or `N/A` when empty. Blood
    /// pressure is shown as entered.
    pub fn display_value(self, value: &str) -> String {
        if value.trim().is_empty() {
            return "N/A".to_string();
        }
        match self {
            Self::BloodPressure => value.to_string(),
            Self::SpO2 | Self::RespiratoryRate => format!("{value}{}", self.unit()),
            _ => format!("{value} {}", self.unit()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalStatus {
    /// Nothing entered yet.
    Pending,
    Invalid,
    Normal,
    Abnormal,
    Low,
    Critical,
    /// Present but not range-checked.
    Recorded,
}

impl VitalStatus {
    /// Wording used in exported reports.
    pub fn report_label(self) -> &'static str {
        match self {
            Self::Pending => "Not recorded",
            Self::Invalid => "Invalid",
            Self::Normal => "Normal",
            Self::Abnormal => "Abnormal",
            Self::Low => "Low",
            Self::Critical => "Critical",
            Self::Recorded => "Recorded",
        }
    }

    /// True for statuses a patient should be alerted to.
    pub fn needs_attention(self) -> bool {
        matches!(self, Self::Abnormal | Self::Low | Self::Critical)
    }
}

/// Classify one reading. Bounds are inclusive.
pub fn classify_vital(kind: VitalKind, value: &str) -> VitalStatus {
    if value.trim().is_empty() {
        return VitalStatus::Pending;
    }
    let Some(reading) = parse_leading_float(value) else {
        return VitalStatus::Invalid;
    };

    let within = |lo: f64, hi: f64| {
        if (lo..=hi).contains(&reading) {
            VitalStatus::Normal
        } else {
            VitalStatus::Abnormal
        }
    };

    match kind {
        VitalKind::HeartRate => within(60.0, 100.0),
        VitalKind::BloodSugar | VitalKind::Glucose => within(80.0, 140.0),
        VitalKind::Temperature => within(36.1, 37.2),
        VitalKind::SpO2 if reading >= 95.0 => VitalStatus::Normal,
        VitalKind::SpO2 if reading >= 90.0 => VitalStatus::Low,
        VitalKind::SpO2 => VitalStatus::Critical,
        VitalKind::BloodPressure | VitalKind::RespiratoryRate => VitalStatus::Recorded,
    }
}

/// A classified reading from a patient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalReading {
    pub kind: VitalKind,
    pub value: String,
    pub status: VitalStatus,
}

/// Classify the vitals on a self-report form, in form order.
pub fn patient_vitals(record: &PatientRecord) -> Vec<VitalReading> {
    [
        (VitalKind::HeartRate, &record.heart_rate),
        (VitalKind::BloodSugar, &record.blood_sugar),
        (VitalKind::Temperature, &record.temperature),
        (VitalKind::BloodPressure, &record.blood_pressure),
        (VitalKind::SpO2, &record.spo2),
    ]
    .into_iter()
    .map(|(kind, value)| VitalReading {
        kind,
        value: value.clone(),
        status: classify_vital(kind, value),
    })
    .collect()
}
