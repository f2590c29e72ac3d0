use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use twinhealth_cli::commands::{self, OutputFormat};
use twinhealth_cli::config::TwinHealthConfig;
use twinhealth_core::models::diagnosis::{DiagnosisResult, Urgency};
use twinhealth_export::render::ExportFormat;

fn write_json(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, json).unwrap();
    path
}

const CLINICAL: &str = r#"{
    "patientId": "MRN-0042",
    "chiefComplaint": "Chest pain and shortness of breath",
    "heartRate": "120",
    "spO2": "88"
}"#;

const PATIENT: &str = r#"{
    "name": "Ada Lovelace",
    "heartRate": "72",
    "temperature": "39.5",
    "spO2": "97"
}"#;

#[tokio::test]
async fn diagnose_json_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "input.json", CLINICAL);

    let json = commands::diagnose(&input, &TwinHealthConfig::default(), OutputFormat::Json)
        .await
        .unwrap();
    let result: DiagnosisResult = serde_json::from_str(&json).unwrap();

    assert_eq!(result.diagnoses[0].disease, "Pulmonary Embolism");
    assert_eq!(result.diagnoses[0].probability, 70);
    assert_eq!(result.urgency, Urgency::Immediate);
}

#[tokio::test]
async fn diagnose_text_lists_ranked_conditions() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "input.json", CLINICAL);

    let text = commands::diagnose(&input, &TwinHealthConfig::default(), OutputFormat::Text)
        .await
        .unwrap();

    assert!(text.starts_with("Urgency:    Immediate"));
    assert!(text.contains("Pulmonary Embolism"));
    assert!(text.contains("  1. Immediate medical attention required"));
}

#[tokio::test]
async fn diagnose_rejects_non_string_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "input.json", r#"{ "heartRate": 120 }"#);

    let err = commands::diagnose(&input, &TwinHealthConfig::default(), OutputFormat::Json)
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("invalid clinical input"));
}

#[tokio::test]
async fn clinical_report_is_written_to_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "input.json", CLINICAL);
    let config = TwinHealthConfig {
        output_dir: Some(dir.path().join("reports")),
        clinician_name: Some("Dr. Okafor".to_string()),
        ..Default::default()
    };

    let path = commands::clinical_report(&input, &config, true, ExportFormat::Markdown, None)
        .await
        .unwrap();

    assert_eq!(path.parent().unwrap(), dir.path().join("reports"));
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("clinical-report-MRN-0042-"));
    assert!(name.ends_with(".md"));

    let markdown = std::fs::read_to_string(&path).unwrap();
    assert!(markdown.contains("Dr. Okafor"));
    assert!(markdown.contains("Pulmonary Embolism"));
}

#[tokio::test]
async fn clinical_report_without_diagnosis() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "input.json", CLINICAL);
    let out = dir.path().join("report.md");

    let path = commands::clinical_report(
        &input,
        &TwinHealthConfig::default(),
        false,
        ExportFormat::Markdown,
        Some(out.clone()),
    )
    .await
    .unwrap();

    assert_eq!(path, out);
    let markdown = std::fs::read_to_string(&path).unwrap();
    assert!(!markdown.contains("Differential Diagnosis"));
}

#[test]
fn patient_report_writes_docx() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "patient.json", PATIENT);
    let out = dir.path().join("patient.docx");

    let path = commands::patient_report(
        &input,
        &TwinHealthConfig::default(),
        ExportFormat::Docx,
        Some(out),
    )
    .unwrap();

    let bytes = std::fs::read(path).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn vitals_flags_abnormal_readings() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "patient.json", PATIENT);

    let text = commands::vitals(&input).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("  Heart Rate"));
    assert!(lines[0].ends_with("Normal"));
    assert!(lines[2].starts_with("! Temperature"));
    assert!(lines[2].ends_with("Abnormal"));
    assert!(lines[1].ends_with("Not recorded"));
}
