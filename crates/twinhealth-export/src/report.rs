//! Report models: the tabular content of the clinician assessment report
//! and the patient health report, ready for template rendering.

use jiff::Timestamp;
use serde::Serialize;
use twinhealth_core::models::clinical_input::{ClinicalField, ClinicalInput};
use twinhealth_core::models::diagnosis::DiagnosisResult;
use twinhealth_core::models::patient::PatientRecord;
use twinhealth_diagnosis::vital_status::{VitalKind, patient_vitals};
use uuid::Uuid;

pub const DEFAULT_CLINICIAN: &str = "Dr. [Name Required]";
pub const REPORT_STATUS: &str = "DRAFT - Pending Clinician Review";

pub const SAFETY_NOTES: [&str; 4] = [
    "This report is for informational purposes only",
    "Always consult with healthcare professionals for medical advice",
    "Keep this report for your medical records",
    "Contact emergency services if you experience severe symptoms",
];

/// Number of supporting features shown per diagnosis row.
const KEY_FEATURES: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalRow {
    pub parameter: String,
    pub value: String,
    pub normal_range: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisRow {
    pub rank: u32,
    pub disease: String,
    pub icd10: String,
    pub probability: String,
    pub rarity: String,
    pub key_features: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisSection {
    pub rows: Vec<DiagnosisRow>,
    pub recommendations: Vec<String>,
    pub urgency: String,
    pub confidence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditInfo {
    pub engine: String,
    pub generated_at: String,
    pub clinician_confirmation_required: bool,
    pub status: String,
}

/// Clinician assessment report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClinicalReport {
    pub generated_at: String,
    pub patient_id: String,
    pub clinician: String,
    pub demographics: Vec<Row>,
    pub vitals: Vec<VitalRow>,
    pub diagnosis: Option<DiagnosisSection>,
    pub audit: AuditInfo,
}

impl ClinicalReport {
    pub fn build(
        input: &ClinicalInput,
        result: Option<&DiagnosisResult>,
        clinician: Option<&str>,
        generated: Timestamp,
    ) -> Self {
        let demographics = [
            ("Patient ID", ClinicalField::PatientId),
            ("Date of Birth", ClinicalField::DateOfBirth),
            ("Ethnicity", ClinicalField::Ethnicity),
            ("BMI", ClinicalField::Bmi),
            ("Smoking", ClinicalField::Smoking),
            ("Alcohol", ClinicalField::Alcohol),
        ]
        .into_iter()
        .map(|(label, field)| row(label, or_default(input.get(field), "N/A")))
        .collect();

        let vitals = [
            (VitalKind::HeartRate, ClinicalField::HeartRate),
            (VitalKind::BloodPressure, ClinicalField::BloodPressure),
            (VitalKind::Temperature, ClinicalField::Temperature),
            (VitalKind::RespiratoryRate, ClinicalField::RespiratoryRate),
            (VitalKind::SpO2, ClinicalField::SpO2),
            (VitalKind::Glucose, ClinicalField::Glucose),
        ]
        .into_iter()
        .map(|(kind, field)| {
            let value = input.get(field);
            VitalRow {
                parameter: kind.label().to_string(),
                value: cell(&kind.display_value(value)),
                normal_range: kind.reference_range().to_string(),
                status: (if value.trim().is_empty() { "N/A" } else { "Recorded" }).to_string(),
            }
        })
        .collect();

        Self {
            generated_at: generated.strftime("%Y-%m-%d %H:%M UTC").to_string(),
            patient_id: or_default(input.get(ClinicalField::PatientId), "N/A"),
            clinician: cell(clinician.unwrap_or(DEFAULT_CLINICIAN)),
            demographics,
            vitals,
            diagnosis: result.map(diagnosis_section),
            audit: AuditInfo {
                engine: format!("twinhealth rule-based scorer v{}", env!("CARGO_PKG_VERSION")),
                generated_at: generated.to_string(),
                clinician_confirmation_required: true,
                status: REPORT_STATUS.to_string(),
            },
        }
    }

    /// `clinical-report-{patient id}-{YYYY-MM-DD}.{extension}`.
    pub fn file_name(input: &ClinicalInput, generated: Timestamp, extension: &str) -> String {
        let patient = input.get(ClinicalField::PatientId).trim();
        let patient = if patient.is_empty() {
            "patient".to_string()
        } else {
            sanitize_file_component(patient)
        };
        format!(
            "clinical-report-{patient}-{}.{extension}",
            generated.strftime("%Y-%m-%d")
        )
    }
}

fn diagnosis_section(result: &DiagnosisResult) -> DiagnosisSection {
    DiagnosisSection {
        rows: result
            .diagnoses
            .iter()
            .map(|d| DiagnosisRow {
                rank: d.rank,
                disease: cell(&d.disease),
                icd10: d.icd10.clone(),
                probability: format!("{}%", d.probability),
                rarity: d.rarity.to_string(),
                key_features: cell(
                    &d.supporting_features
                        .iter()
                        .take(KEY_FEATURES)
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
            })
            .collect(),
        recommendations: result.recommended_tests.clone(),
        urgency: result.urgency.to_string(),
        confidence: result.confidence.clone(),
    }
}

/// Patient self-report summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientReport {
    pub generated_on: String,
    pub patient_id: String,
    pub patient_info: Vec<Row>,
    pub vitals: Vec<VitalRow>,
    /// Free-text lines, escaped so they render as plain paragraphs.
    pub medical_history: Vec<String>,
    pub medications: Vec<String>,
    pub safety_notes: Vec<String>,
}

impl PatientReport {
    /// Build with the current time and a random patient id suffix.
    pub fn new(record: &PatientRecord) -> Self {
        Self::build(record, Timestamp::now(), random_id_suffix())
    }

    pub fn build(record: &PatientRecord, generated: Timestamp, id_suffix: u32) -> Self {
        let with_unit = |value: &str, unit: &str| {
            if value.trim().is_empty() {
                "N/A".to_string()
            } else {
                cell(&format!("{value} {unit}"))
            }
        };

        let patient_info = vec![
            row("Name", or_default(&record.name, "Not provided")),
            row("Age", or_default(&record.age, "N/A")),
            row("Sex", or_default(&record.sex, "N/A")),
            row("Weight", with_unit(&record.weight, "kg")),
            row("Height", with_unit(&record.height, "cm")),
            row("Contact", or_default(&record.contact, "N/A")),
        ];

        let vitals = patient_vitals(record)
            .into_iter()
            .map(|reading| VitalRow {
                parameter: reading.kind.label().to_string(),
                value: cell(&reading.kind.display_value(&reading.value)),
                normal_range: reading.kind.reference_range().to_string(),
                status: reading.status.report_label().to_string(),
            })
            .collect();

        Self {
            generated_on: generated.strftime("%Y-%m-%d").to_string(),
            patient_id: patient_id(&record.name, id_suffix),
            patient_info,
            vitals,
            medical_history: literal_lines(&record.medical_history),
            medications: literal_lines(&record.medications),
            safety_notes: SAFETY_NOTES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// `patient-health-report-{YYYY-MM-DD}.{extension}`.
    pub fn file_name(generated: Timestamp, extension: &str) -> String {
        format!(
            "patient-health-report-{}.{extension}",
            generated.strftime("%Y-%m-%d")
        )
    }
}

/// Name without whitespace, upper-cased, first six characters, then the
/// suffix. `N/A` when there is no name.
pub fn patient_id(name: &str, suffix: u32) -> String {
    let stem: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .take(6)
        .collect();
    if stem.is_empty() {
        "N/A".to_string()
    } else {
        format!("{stem}{suffix}")
    }
}

fn random_id_suffix() -> u32 {
    (Uuid::new_v4().as_u128() % 1000) as u32
}

fn row(label: &str, value: String) -> Row {
    Row {
        label: label.to_string(),
        value,
    }
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        cell(value)
    }
}

/// Non-blank lines of patient free text. A line starting with a block
/// marker is prefixed with `\` so it renders as plain text.
pub fn literal_lines(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.starts_with(['#', '-', '|', '*', '+', '>', '\\']) {
                format!("\\{line}")
            } else {
                line.to_string()
            }
        })
        .collect()
}

/// Table cells are single-line and must not contain the column separator.
fn cell(value: &str) -> String {
    value
        .replace('|', "/")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn sanitize_file_component(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
