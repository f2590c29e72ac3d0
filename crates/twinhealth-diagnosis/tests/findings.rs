use pretty_assertions::assert_eq;
use twinhealth_core::models::clinical_input::{ClinicalField, ClinicalInput};
use twinhealth_core::models::diagnosis::Urgency;
use twinhealth_diagnosis::findings::{
    extract_symptoms, lab_findings, parse_blood_pressure, parse_leading_float, vital_findings,
};
use twinhealth_diagnosis::urgency::determine_urgency;

fn vitals(field: ClinicalField, value: &str) -> Vec<&'static str> {
    vital_findings(&ClinicalInput::new().with(field, value))
}

#[test]
fn symptoms_match_whole_phrases_case_insensitively() {
    let input = ClinicalInput::new()
        .with(ClinicalField::ChiefComplaint, "CHEST PAIN since morning")
        .with(ClinicalField::PresentingSymptoms, "Severe abdominal pain, no fever");

    assert_eq!(
        extract_symptoms(&input),
        vec!["chest pain", "fever", "abdominal pain"]
    );
}

#[test]
fn reordered_words_are_not_a_symptom() {
    let input = ClinicalInput::new().with(ClinicalField::ChiefComplaint, "pain in my chest");
    assert!(extract_symptoms(&input).is_empty());
}

#[test]
fn heart_rate_thresholds() {
    assert_eq!(vitals(ClinicalField::HeartRate, "120"), vec!["tachycardia"]);
    assert_eq!(vitals(ClinicalField::HeartRate, "45 bpm"), vec!["bradycardia"]);
    assert!(vitals(ClinicalField::HeartRate, "100").is_empty());
    assert!(vitals(ClinicalField::HeartRate, "60").is_empty());
    assert!(vitals(ClinicalField::HeartRate, "racing").is_empty());
}

#[test]
fn blood_pressure_thresholds() {
    assert_eq!(vitals(ClinicalField::BloodPressure, "150/95"), vec!["hypertension"]);
    assert_eq!(vitals(ClinicalField::BloodPressure, "130/95"), vec!["hypertension"]);
    assert_eq!(vitals(ClinicalField::BloodPressure, "85/50"), vec!["hypotension"]);
    assert!(vitals(ClinicalField::BloodPressure, "BP 120/80 seated").is_empty());
    assert!(vitals(ClinicalField::BloodPressure, "high").is_empty());
}

#[test]
fn blood_pressure_pair_is_found_anywhere() {
    assert_eq!(
        parse_blood_pressure("sitting: 142/88 mmHg"),
        Some((142.0, 88.0))
    );
    assert_eq!(parse_blood_pressure(""), None);
    assert_eq!(parse_blood_pressure("120 over 80"), None);
}

#[test]
fn oversized_blood_pressure_digits_still_score() {
    let input = ClinicalInput::new()
        .with(ClinicalField::BloodPressure, "99999999999999999999999/80")
        .with(ClinicalField::ChiefComplaint, "headache");

    assert_eq!(vital_findings(&input), vec!["hypertension"]);
    let result = twinhealth_diagnosis::score(&input);
    assert_eq!(result.diagnoses[0].disease, "Hypertension");
    assert_eq!(result.diagnoses[0].probability, 25);
}

#[test]
fn temperature_spo2_and_glucose_thresholds() {
    assert_eq!(vitals(ClinicalField::Temperature, "38.2"), vec!["fever"]);
    assert_eq!(vitals(ClinicalField::Temperature, "35.4"), vec!["hypothermia"]);
    assert!(vitals(ClinicalField::Temperature, "37.5").is_empty());
    assert_eq!(vitals(ClinicalField::SpO2, "94%"), vec!["hypoxemia"]);
    assert!(vitals(ClinicalField::SpO2, "95").is_empty());
    assert_eq!(vitals(ClinicalField::Glucose, "180"), vec!["hyperglycemia"]);
    assert_eq!(vitals(ClinicalField::Glucose, "62"), vec!["hypoglycemia"]);
}

#[test]
fn distinct_vitals_fire_together() {
    let input = ClinicalInput::new()
        .with(ClinicalField::HeartRate, "130")
        .with(ClinicalField::BloodPressure, "82/40")
        .with(ClinicalField::Temperature, "39")
        .with(ClinicalField::SpO2, "85");

    assert_eq!(
        vital_findings(&input),
        vec!["tachycardia", "hypotension", "fever", "hypoxemia"]
    );
}

#[test]
fn lab_text_and_hba1c_findings() {
    let input = ClinicalInput::new()
        .with(ClinicalField::Troponin, "ELEVATED at 0.4")
        .with(ClinicalField::DDimer, "within normal limits")
        .with(ClinicalField::Crp, "Mildly elevated")
        .with(ClinicalField::Hba1c, "6.6");

    assert_eq!(
        lab_findings(&input),
        vec!["elevated troponin", "elevated CRP", "elevated HbA1c"]
    );

    let borderline = ClinicalInput::new().with(ClinicalField::Hba1c, "6.5");
    assert!(lab_findings(&borderline).is_empty());
}

#[test]
fn leading_float_reads_numeric_prefix() {
    assert_eq!(parse_leading_float("120"), Some(120.0));
    assert_eq!(parse_leading_float("  37.8C"), Some(37.8));
    assert_eq!(parse_leading_float("-4"), Some(-4.0));
    assert_eq!(parse_leading_float(".5"), Some(0.5));
    assert_eq!(parse_leading_float("5."), Some(5.0));
    assert_eq!(parse_leading_float("1e2 units"), Some(100.0));
    assert_eq!(parse_leading_float("7e"), Some(7.0));
    assert_eq!(parse_leading_float("high"), None);
    assert_eq!(parse_leading_float("."), None);
    assert_eq!(parse_leading_float(""), None);
}

#[test]
fn urgency_prefers_critical_findings() {
    assert_eq!(
        determine_urgency(&["chest pain"], &["hypoxemia"]),
        Urgency::Immediate
    );
    assert_eq!(determine_urgency(&["chest pain"], &["tachycardia"]), Urgency::Urgent);
    assert_eq!(determine_urgency(&["abdominal pain"], &[]), Urgency::Routine);
    assert_eq!(determine_urgency(&["headache"], &["hypertension"]), Urgency::Routine);
}
