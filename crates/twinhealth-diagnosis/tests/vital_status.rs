use pretty_assertions::assert_eq;
use twinhealth_core::models::patient::PatientRecord;
use twinhealth_diagnosis::vital_status::{VitalKind, VitalStatus, classify_vital, patient_vitals};

#[test]
fn empty_and_non_numeric_readings() {
    assert_eq!(classify_vital(VitalKind::HeartRate, ""), VitalStatus::Pending);
    assert_eq!(classify_vital(VitalKind::HeartRate, "fast"), VitalStatus::Invalid);
    assert_eq!(classify_vital(VitalKind::BloodPressure, "high"), VitalStatus::Invalid);
}

#[test]
fn range_bounds_are_inclusive() {
    assert_eq!(classify_vital(VitalKind::HeartRate, "60"), VitalStatus::Normal);
    assert_eq!(classify_vital(VitalKind::HeartRate, "100"), VitalStatus::Normal);
    assert_eq!(classify_vital(VitalKind::HeartRate, "101"), VitalStatus::Abnormal);
    assert_eq!(classify_vital(VitalKind::BloodSugar, "80"), VitalStatus::Normal);
    assert_eq!(classify_vital(VitalKind::Glucose, "141"), VitalStatus::Abnormal);
    assert_eq!(classify_vital(VitalKind::Temperature, "36.1"), VitalStatus::Normal);
    assert_eq!(classify_vital(VitalKind::Temperature, "37.3"), VitalStatus::Abnormal);
}

#[test]
fn spo2_has_three_bands() {
    assert_eq!(classify_vital(VitalKind::SpO2, "98"), VitalStatus::Normal);
    assert_eq!(classify_vital(VitalKind::SpO2, "92"), VitalStatus::Low);
    assert_eq!(classify_vital(VitalKind::SpO2, "89"), VitalStatus::Critical);
    assert!(VitalStatus::Critical.needs_attention());
    assert!(!VitalStatus::Normal.needs_attention());
}

#[test]
fn blood_pressure_is_recorded_not_ranged() {
    assert_eq!(classify_vital(VitalKind::BloodPressure, "180/110"), VitalStatus::Recorded);
    assert_eq!(VitalStatus::Recorded.report_label(), "Recorded");
    assert_eq!(VitalStatus::Pending.report_label(), "Not recorded");
}

#[test]
fn display_values_carry_units() {
    assert_eq!(VitalKind::HeartRate.display_value("72"), "72 bpm");
    assert_eq!(VitalKind::SpO2.display_value("97"), "97%");
    assert_eq!(VitalKind::RespiratoryRate.display_value("16"), "16/min");
    assert_eq!(VitalKind::BloodPressure.display_value("120/80"), "120/80");
    assert_eq!(VitalKind::Temperature.display_value(""), "N/A");
}

#[test]
fn patient_vitals_follow_form_order() {
    let record = PatientRecord {
        heart_rate: "72".to_string(),
        spo2: "91".to_string(),
        ..Default::default()
    };

    let readings = patient_vitals(&record);
    let summary: Vec<_> = readings.iter().map(|r| (r.kind, r.status)).collect();
    assert_eq!(
        summary,
        vec![
            (VitalKind::HeartRate, VitalStatus::Normal),
            (VitalKind::BloodSugar, VitalStatus::Pending),
            (VitalKind::Temperature, VitalStatus::Pending),
            (VitalKind::BloodPressure, VitalStatus::Pending),
            (VitalKind::SpO2, VitalStatus::Low),
        ]
    );
}
