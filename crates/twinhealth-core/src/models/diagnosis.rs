use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How quickly the patient should be seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Urgency {
    Immediate,
    Urgent,
    Routine,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::Urgent => "Urgent",
            Self::Routine => "Routine",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Population prevalence tag carried by each catalog condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

impl Rarity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked candidate in a differential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Diagnosis {
    /// 1-based, dense.
    pub rank: u32,
    pub disease: String,
    pub icd10: String,
    /// Displayed probability, 0–95.
    pub probability: u32,
    pub rarity: Rarity,
    /// Symptoms and findings that contributed, first occurrence order.
    pub supporting_features: Vec<String>,
}

/// Output of a single scoring call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiagnosisResult {
    /// Between one and five entries, ordered by rank.
    pub diagnoses: Vec<Diagnosis>,
    pub recommended_tests: Vec<String>,
    pub urgency: Urgency,
    pub confidence: String,
}

impl DiagnosisResult {
    /// The rank-1 entry, if any.
    pub fn top(&self) -> Option<&Diagnosis> {
        self.diagnoses.first()
    }
}
