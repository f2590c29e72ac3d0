use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use eyre::WrapErr;
use jiff::Timestamp;
use twinhealth_core::models::clinical_input::ClinicalInput;
use twinhealth_core::models::diagnosis::DiagnosisResult;
use twinhealth_core::models::patient::PatientRecord;
use twinhealth_diagnosis::analyzer::Analyzer;
use twinhealth_diagnosis::vital_status::patient_vitals;
use twinhealth_export::render::{
    ExportFormat, export, render_clinical_report, render_patient_report,
};
use twinhealth_export::report::{ClinicalReport, PatientReport};

use crate::config::TwinHealthConfig;

/// How `diagnose` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

pub fn read_clinical_input(path: &Path) -> eyre::Result<ClinicalInput> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read clinical input {}", path.display()))?;
    ClinicalInput::from_json(&json)
        .wrap_err_with(|| format!("invalid clinical input {}", path.display()))
}

pub fn read_patient_record(path: &Path) -> eyre::Result<PatientRecord> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read patient record {}", path.display()))?;
    PatientRecord::from_json(&json)
        .wrap_err_with(|| format!("invalid patient record {}", path.display()))
}

/// Score a clinical input file and format the result.
pub async fn diagnose(
    input_path: &Path,
    config: &TwinHealthConfig,
    format: OutputFormat,
) -> eyre::Result<String> {
    let input = read_clinical_input(input_path)?;
    let result = Analyzer::new(config.latency()).analyze(&input).await?;

    tracing::info!(
        top = result.top().map(|d| d.disease.as_str()),
        urgency = %result.urgency,
        "analysis complete"
    );

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => Ok(format_result(&result)),
    }
}

/// Plain-text rendering of a result for the terminal.
pub fn format_result(result: &DiagnosisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Urgency:    {}", result.urgency);
    let _ = writeln!(out, "Confidence: {}", result.confidence);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:>2}  {:<26} {:<7} {:>5}  {:<9} Supporting features",
        "#", "Disease", "ICD-10", "Prob", "Rarity"
    );
    for d in &result.diagnoses {
        let _ = writeln!(
            out,
            "{:>2}  {:<26} {:<7} {:>4}%  {:<9} {}",
            d.rank,
            d.disease,
            d.icd10,
            d.probability,
            d.rarity.as_str(),
            d.supporting_features.join(", ")
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Recommended next steps:");
    for (idx, step) in result.recommended_tests.iter().enumerate() {
        let _ = writeln!(out, "  {}. {step}", idx + 1);
    }
    out
}

/// Write a clinician report for an input file, optionally scoring it first.
/// Returns the path written.
pub async fn clinical_report(
    input_path: &Path,
    config: &TwinHealthConfig,
    with_diagnosis: bool,
    format: ExportFormat,
    out: Option<PathBuf>,
) -> eyre::Result<PathBuf> {
    let input = read_clinical_input(input_path)?;
    let result = if with_diagnosis {
        Some(Analyzer::new(config.latency()).analyze(&input).await?)
    } else {
        None
    };

    let now = Timestamp::now();
    let report = ClinicalReport::build(
        &input,
        result.as_ref(),
        config.clinician_name.as_deref(),
        now,
    );
    let markdown = render_clinical_report(&report)?;
    let bytes = export(&markdown, format, &config.styles)?;

    let path = out.unwrap_or_else(|| {
        config
            .output_dir()
            .join(ClinicalReport::file_name(&input, now, format.extension()))
    });
    write_output(&path, &bytes)?;
    Ok(path)
}

/// Write a patient health report for a self-report file. Returns the path
/// written.
pub fn patient_report(
    input_path: &Path,
    config: &TwinHealthConfig,
    format: ExportFormat,
    out: Option<PathBuf>,
) -> eyre::Result<PathBuf> {
    let record = read_patient_record(input_path)?;
    let report = PatientReport::new(&record);
    let markdown = render_patient_report(&report)?;
    let bytes = export(&markdown, format, &config.styles)?;

    let path = out.unwrap_or_else(|| {
        config
            .output_dir()
            .join(PatientReport::file_name(Timestamp::now(), format.extension()))
    });
    write_output(&path, &bytes)?;
    Ok(path)
}

/// Vital sign statuses from a patient self-report file, one per line.
pub fn vitals(input_path: &Path) -> eyre::Result<String> {
    let record = read_patient_record(input_path)?;
    let mut out = String::new();
    for reading in patient_vitals(&record) {
        let flag = if reading.status.needs_attention() { "!" } else { " " };
        let _ = writeln!(
            out,
            "{flag} {:<15} {:<12} {}",
            reading.kind.label(),
            reading.kind.display_value(&reading.value),
            reading.status.report_label()
        );
    }
    Ok(out)
}

fn write_output(path: &Path, bytes: &[u8]) -> eyre::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    }
    std::fs::write(path, bytes).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "report written");
    Ok(())
}
