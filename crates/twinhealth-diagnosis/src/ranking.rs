//! Additive condition scoring and differential ranking.

use twinhealth_core::models::diagnosis::{Diagnosis, Rarity};

use crate::catalog::{self, CONDITIONS};

/// Points per matched catalog symptom.
pub const SYMPTOM_WEIGHT: u32 = 25;
/// Points per vital finding listed in a condition's features.
pub const VITAL_WEIGHT: u32 = 20;
/// Points per lab finding listed in a condition's features.
pub const LAB_WEIGHT: u32 = 30;
/// Ceiling on the displayed probability. Raw scores are not capped.
pub const PROBABILITY_CAP: u32 = 95;
/// Length of the differential.
pub const MAX_DIAGNOSES: usize = 5;

pub const UNDIFFERENTIATED: &str = "Undifferentiated Symptoms";

/// Running score for one catalog condition.
#[derive(Debug, Clone, Default)]
struct Tally {
    score: u32,
    features: Vec<&'static str>,
}

impl Tally {
    fn add(&mut self, points: u32, feature: &'static str) {
        self.score += points;
        self.features.push(feature);
    }
}

/// Score every catalog condition against the extracted signals and return
/// the top of the differential, ranked 1..=k.
///
/// Never empty: with no scoring condition the result is a single
/// low-confidence "Undifferentiated Symptoms" entry.
pub fn rank_conditions(
    symptoms: &[&'static str],
    vital_findings: &[&'static str],
    lab_findings: &[&'static str],
) -> Vec<Diagnosis> {
    let mut tallies = vec![Tally::default(); CONDITIONS.len()];

    for &phrase in symptoms {
        let Some(entry) = catalog::symptom(phrase) else {
            continue;
        };
        for name in entry.conditions {
            if let Some(idx) = catalog::condition_index(name) {
                tallies[idx].add(SYMPTOM_WEIGHT, phrase);
            }
        }
    }

    add_findings(&mut tallies, vital_findings, VITAL_WEIGHT);
    add_findings(&mut tallies, lab_findings, LAB_WEIGHT);

    let mut diagnoses: Vec<Diagnosis> = CONDITIONS
        .iter()
        .zip(tallies)
        .filter(|(_, tally)| tally.score > 0)
        .map(|(condition, tally)| Diagnosis {
            rank: 0,
            disease: condition.name.to_string(),
            icd10: condition.icd10.to_string(),
            probability: tally.score.min(PROBABILITY_CAP),
            rarity: condition.rarity,
            supporting_features: dedup_preserving_order(&tally.features),
        })
        .collect();

    // Stable, so equal probabilities keep catalog order.
    diagnoses.sort_by(|a, b| b.probability.cmp(&a.probability));
    diagnoses.truncate(MAX_DIAGNOSES);

    if diagnoses.is_empty() {
        return vec![undifferentiated()];
    }

    for (idx, diagnosis) in diagnoses.iter_mut().enumerate() {
        diagnosis.rank = idx as u32 + 1;
    }
    diagnoses
}

fn add_findings(tallies: &mut [Tally], findings: &[&'static str], weight: u32) {
    for &finding in findings {
        for (condition, tally) in CONDITIONS.iter().zip(tallies.iter_mut()) {
            if condition.features.contains(&finding) {
                tally.add(weight, finding);
            }
        }
    }
}

fn dedup_preserving_order(features: &[&'static str]) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::with_capacity(features.len());
    for &feature in features {
        if !seen.contains(&feature) {
            seen.push(feature);
        }
    }
    seen.into_iter().map(str::to_string).collect()
}

fn undifferentiated() -> Diagnosis {
    Diagnosis {
        rank: 1,
        disease: UNDIFFERENTIATED.to_string(),
        icd10: "R69".to_string(),
        probability: 60,
        rarity: Rarity::Common,
        supporting_features: vec![
            "clinical presentation".to_string(),
            "patient history".to_string(),
        ],
    }
}
