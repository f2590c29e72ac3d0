use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiagnosisError {
    #[error("inconsistent result: {0}")]
    InconsistentResult(String),

    #[error("an analysis is already in progress")]
    AnalysisInProgress,
}
