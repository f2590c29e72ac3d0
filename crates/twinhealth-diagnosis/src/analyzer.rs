//! Async front door for the scorer, for UIs that show an "analysing"
//! state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use twinhealth_core::models::clinical_input::ClinicalInput;
use twinhealth_core::models::diagnosis::DiagnosisResult;

use crate::error::DiagnosisError;

/// Runs [`crate::score`] after a simulated processing latency, allowing at
/// most one analysis in flight.
///
/// A second call while one is pending fails with
/// [`DiagnosisError::AnalysisInProgress`] rather than queueing. Dropping
/// the pending future abandons the analysis and frees the slot.
#[derive(Debug, Default)]
pub struct Analyzer {
    latency: Duration,
    in_flight: AtomicBool,
}

impl Analyzer {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn is_analyzing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn analyze(&self, input: &ClinicalInput) -> Result<DiagnosisResult, DiagnosisError> {
        let _slot =
            InFlight::acquire(&self.in_flight).ok_or(DiagnosisError::AnalysisInProgress)?;

        if !self.latency.is_zero() {
            tracing::debug!(
                latency_ms = self.latency.as_millis() as u64,
                "simulating analysis latency"
            );
            tokio::time::sleep(self.latency).await;
        }

        Ok(crate::score(input))
    }
}

/// Holds the in-flight flag; clears it on drop.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
