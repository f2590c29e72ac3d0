//! Signal extraction: catalog symptoms from free text, and threshold
//! findings from vital signs and laboratory fields.
//!
//! Unparseable or empty readings never produce a finding and never fail.

use std::sync::LazyLock;

use regex::Regex;
use twinhealth_core::models::clinical_input::{ClinicalField, ClinicalInput};

use crate::catalog::SYMPTOMS;

pub const TACHYCARDIA: &str = "tachycardia";
pub const BRADYCARDIA: &str = "bradycardia";
pub const HYPERTENSION: &str = "hypertension";
pub const HYPOTENSION: &str = "hypotension";
pub const FEVER: &str = "fever";
pub const HYPOTHERMIA: &str = "hypothermia";
pub const HYPOXEMIA: &str = "hypoxemia";
pub const HYPERGLYCEMIA: &str = "hyperglycemia";
pub const HYPOGLYCEMIA: &str = "hypoglycemia";

pub const ELEVATED_TROPONIN: &str = "elevated troponin";
pub const ELEVATED_D_DIMER: &str = "elevated D-dimer";
pub const ELEVATED_CRP: &str = "elevated CRP";
pub const ELEVATED_HBA1C: &str = "elevated HbA1c";

/// First `systolic/diastolic` pair anywhere in the text.
static BLOOD_PRESSURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)/([0-9]+)").unwrap());

/// Catalog symptom phrases present in the chief complaint or presenting
/// symptoms, in catalog order.
///
/// Matching is a case-insensitive substring test on the whole phrase;
/// "pain in my chest" does not yield `chest pain`.
pub fn extract_symptoms(input: &ClinicalInput) -> Vec<&'static str> {
    let text = format!(
        "{} {}",
        input.get(ClinicalField::ChiefComplaint),
        input.get(ClinicalField::PresentingSymptoms)
    )
    .to_lowercase();

    SYMPTOMS
        .iter()
        .filter(|s| text.contains(s.phrase))
        .map(|s| s.phrase)
        .collect()
}

/// Threshold findings from heart rate, blood pressure, temperature, SpO2
/// and glucose. Several may fire at once.
pub fn vital_findings(input: &ClinicalInput) -> Vec<&'static str> {
    let mut findings = Vec::new();

    if let Some(hr) = parse_leading_float(input.get(ClinicalField::HeartRate)) {
        if hr > 100.0 {
            findings.push(TACHYCARDIA);
        }
        if hr < 60.0 {
            findings.push(BRADYCARDIA);
        }
    }

    if let Some((systolic, diastolic)) =
        parse_blood_pressure(input.get(ClinicalField::BloodPressure))
    {
        if systolic > 140.0 || diastolic > 90.0 {
            findings.push(HYPERTENSION);
        }
        if systolic < 90.0 {
            findings.push(HYPOTENSION);
        }
    }

    if let Some(temp) = parse_leading_float(input.get(ClinicalField::Temperature)) {
        if temp > 37.5 {
            findings.push(FEVER);
        }
        if temp < 36.0 {
            findings.push(HYPOTHERMIA);
        }
    }

    if let Some(spo2) = parse_leading_float(input.get(ClinicalField::SpO2))
        && spo2 < 95.0
    {
        findings.push(HYPOXEMIA);
    }

    if let Some(glucose) = parse_leading_float(input.get(ClinicalField::Glucose)) {
        if glucose > 140.0 {
            findings.push(HYPERGLYCEMIA);
        }
        if glucose < 70.0 {
            findings.push(HYPOGLYCEMIA);
        }
    }

    findings
}

/// Laboratory findings. Troponin, D-dimer and CRP are read as text and
/// flagged when they mention "elevated"; HbA1c is numeric.
pub fn lab_findings(input: &ClinicalInput) -> Vec<&'static str> {
    let mut findings = Vec::new();

    if mentions_elevated(input.get(ClinicalField::Troponin)) {
        findings.push(ELEVATED_TROPONIN);
    }
    if mentions_elevated(input.get(ClinicalField::DDimer)) {
        findings.push(ELEVATED_D_DIMER);
    }
    if mentions_elevated(input.get(ClinicalField::Crp)) {
        findings.push(ELEVATED_CRP);
    }
    if let Some(hba1c) = parse_leading_float(input.get(ClinicalField::Hba1c))
        && hba1c > 6.5
    {
        findings.push(ELEVATED_HBA1C);
    }

    findings
}

fn mentions_elevated(value: &str) -> bool {
    value.to_lowercase().contains("elevated")
}

/// Parse `systolic/diastolic` out of free text. `None` when the text holds
/// no such pair.
pub fn parse_blood_pressure(text: &str) -> Option<(f64, f64)> {
    let caps = BLOOD_PRESSURE.captures(text)?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}

/// Read the longest numeric prefix of `text`, after leading whitespace.
///
/// `"120 bpm"` reads as 120, `"37.8C"` as 37.8; `"high"` and `""` read as
/// nothing.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        let frac_digits = frac_end - end - 1;
        if digits + frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
