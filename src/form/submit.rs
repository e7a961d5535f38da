//! Submission capability for the application form
//!
//! The form only knows the `FormSubmitter` trait. `SimulatedSubmitter` stands
//! in for a backend by waiting a fixed delay.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use super::types::FormData;

/// Delay used by the simulated submission
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1000);

/// Failure of the submission capability
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("submission timed out after {0:?}")]
    Timeout(Duration),
}

/// Async capability that delivers a completed form somewhere
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit(&self, data: &FormData) -> Result<(), SubmissionError>;
}

/// How the simulated submission ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulatedOutcome {
    #[default]
    Succeed,
    Fail,
}

/// Fixed-delay submitter with no backend behind it
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
    outcome: SimulatedOutcome,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(SIMULATED_DELAY)
    }
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            outcome: SimulatedOutcome::Succeed,
        }
    }

    pub fn with_outcome(mut self, outcome: SimulatedOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl FormSubmitter for SimulatedSubmitter {
    async fn submit(&self, _data: &FormData) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.delay).await;
        match self.outcome {
            SimulatedOutcome::Succeed => Ok(()),
            SimulatedOutcome::Fail => Err(SubmissionError::Rejected(
                "simulated backend failure".to_string(),
            )),
        }
    }
}
