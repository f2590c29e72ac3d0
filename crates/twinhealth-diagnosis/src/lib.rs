//! twinhealth-diagnosis
//!
//! Rule-based differential diagnosis. Pure data and functions over a small
//! static knowledge base: symptoms are matched in the complaint text,
//! vitals and labs are turned into threshold findings, and every catalog
//! condition is scored additively.

pub mod analyzer;
pub mod catalog;
pub mod error;
pub mod findings;
pub mod ranking;
pub mod recommendations;
pub mod urgency;
pub mod vital_status;

use twinhealth_core::models::clinical_input::ClinicalInput;
use twinhealth_core::models::diagnosis::{Diagnosis, DiagnosisResult, Rarity, Urgency};

use error::DiagnosisError;

pub const EVALUATION_REQUIRED: &str = "Clinical Evaluation Required";

/// Score clinical form data into a ranked differential.
///
/// Never fails: any internal error is logged and replaced by
/// [`fallback_result`].
pub fn score(input: &ClinicalInput) -> DiagnosisResult {
    match try_score(input) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "diagnosis scoring failed, returning fallback");
            fallback_result()
        }
    }
}

/// The fallible scoring pipeline behind [`score`].
pub fn try_score(input: &ClinicalInput) -> Result<DiagnosisResult, DiagnosisError> {
    let symptoms = findings::extract_symptoms(input);
    let vital_findings = findings::vital_findings(input);
    let lab_findings = findings::lab_findings(input);

    tracing::debug!(
        ?symptoms,
        ?vital_findings,
        ?lab_findings,
        "extracted clinical signals"
    );

    let diagnoses = ranking::rank_conditions(&symptoms, &vital_findings, &lab_findings);
    let urgency = urgency::determine_urgency(&symptoms, &vital_findings);
    let recommended_tests = recommendations::recommend(&diagnoses, urgency);
    let confidence = recommendations::confidence_statement(&diagnoses).to_string();

    check_ranking(&diagnoses)?;

    tracing::debug!(
        top = diagnoses.first().map(|d| d.disease.as_str()),
        %urgency,
        count = diagnoses.len(),
        "scored differential"
    );

    Ok(DiagnosisResult {
        diagnoses,
        recommended_tests,
        urgency,
        confidence,
    })
}

/// Result returned when scoring could not complete.
pub fn fallback_result() -> DiagnosisResult {
    DiagnosisResult {
        diagnoses: vec![Diagnosis {
            rank: 1,
            disease: EVALUATION_REQUIRED.to_string(),
            icd10: "Z00.00".to_string(),
            probability: 50,
            rarity: Rarity::Common,
            supporting_features: vec![
                "incomplete data".to_string(),
                "requires clinical assessment".to_string(),
            ],
        }],
        recommended_tests: vec![
            "Complete clinical examination".to_string(),
            "Basic laboratory studies".to_string(),
            "Clinical correlation".to_string(),
        ],
        urgency: Urgency::Routine,
        confidence: "Unable to generate reliable diagnosis - clinical evaluation required"
            .to_string(),
    }
}

/// 1..=5 entries, dense ranks, capped and non-increasing probabilities.
fn check_ranking(diagnoses: &[Diagnosis]) -> Result<(), DiagnosisError> {
    if diagnoses.is_empty() || diagnoses.len() > ranking::MAX_DIAGNOSES {
        return Err(DiagnosisError::InconsistentResult(format!(
            "expected 1 to {} diagnoses, got {}",
            ranking::MAX_DIAGNOSES,
            diagnoses.len()
        )));
    }

    for (idx, diagnosis) in diagnoses.iter().enumerate() {
        if diagnosis.rank != idx as u32 + 1 {
            return Err(DiagnosisError::InconsistentResult(format!(
                "{} has rank {} at position {}",
                diagnosis.disease,
                diagnosis.rank,
                idx + 1
            )));
        }
        if diagnosis.probability > ranking::PROBABILITY_CAP {
            return Err(DiagnosisError::InconsistentResult(format!(
                "{} probability {} exceeds cap",
                diagnosis.disease, diagnosis.probability
            )));
        }
    }

    if diagnoses
        .windows(2)
        .any(|pair| pair[0].probability < pair[1].probability)
    {
        return Err(DiagnosisError::InconsistentResult(
            "probabilities increase across ranks".to_string(),
        ));
    }

    Ok(())
}
