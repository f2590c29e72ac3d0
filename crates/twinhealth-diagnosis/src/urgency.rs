use twinhealth_core::models::diagnosis::Urgency;

/// Vital findings that demand immediate attention.
///
/// Matched literally against vital findings. `severe tachycardia` is never
/// produced by the vital thresholds (only `tachycardia` is), so it cannot
/// fire today.
pub const CRITICAL_FINDINGS: [&str; 4] =
    ["hypoxemia", "hypotension", "severe tachycardia", "fever"];

/// Catalog symptoms that warrant same-day evaluation.
///
/// `severe abdominal pain` is not a catalog phrase, so only the first two
/// entries can match.
pub const URGENT_SYMPTOMS: [&str; 3] =
    ["chest pain", "shortness of breath", "severe abdominal pain"];

/// Critical vital findings win over urgent symptoms; otherwise routine.
pub fn determine_urgency(symptoms: &[&str], vital_findings: &[&str]) -> Urgency {
    if vital_findings.iter().any(|f| CRITICAL_FINDINGS.contains(f)) {
        Urgency::Immediate
    } else if symptoms.iter().any(|s| URGENT_SYMPTOMS.contains(s)) {
        Urgency::Urgent
    } else {
        Urgency::Routine
    }
}
