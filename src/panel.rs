use serde::Serialize;
use tracing::{debug, info};

use crate::client::Verifier;
use crate::error::Failure;
use crate::types::VerificationResult;

pub type Outcome = Result<VerificationResult, Failure>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded(VerificationResult),
    Failed(Failure),
}

/// State container for one verification panel.
///
/// The input text may be edited at any time. Outcome fields are only
/// written by [`begin_submit`](Self::begin_submit) and
/// [`complete`](Self::complete), so at most one request is ever in flight.
#[derive(Debug, Default)]
pub struct VerificationPanel {
    input: String,
    status: RequestStatus,
}

/// A submission that passed validation and is waiting to be sent.
#[must_use = "a submission does nothing until it is run"]
#[derive(Debug)]
pub struct Submission {
    text: String,
}

impl Submission {
    pub fn text(&self) -> &str { &self.text }

    /// Issues exactly one request to the verifier.
    pub async fn run(self, verifier: &dyn Verifier) -> Outcome {
        match verifier.verify(&self.text).await {
            Ok(resp) => Ok(resp.into()),
            Err(e) => Err(Failure::from(&e)),
        }
    }
}

impl VerificationPanel {
    pub fn new() -> Self { Self::default() }

    pub fn with_input(text: impl Into<String>) -> Self {
        Self { input: text.into(), ..Self::default() }
    }

    pub fn input(&self) -> &str { &self.input }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn status(&self) -> &RequestStatus { &self.status }

    pub fn is_busy(&self) -> bool { matches!(self.status, RequestStatus::Pending) }

    pub fn result(&self) -> Option<&VerificationResult> {
        match &self.status {
            RequestStatus::Succeeded(r) => Some(r),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match &self.status {
            RequestStatus::Failed(f) => Some(f),
            _ => None,
        }
    }

    /// Validates the current input and moves to `Pending`.
    ///
    /// Returns `None` without touching the network when a request is already
    /// in flight (the trigger is disabled) or when the input is blank (the
    /// panel fails locally).
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.is_busy() {
            debug!("submission ignored while a request is pending");
            return None;
        }
        if self.input.trim().is_empty() {
            info!("rejected empty submission");
            self.status = RequestStatus::Failed(Failure::missing_input());
            return None;
        }
        self.status = RequestStatus::Pending;
        Some(Submission { text: self.input.clone() })
    }

    /// Records the outcome of the in-flight submission and clears the busy flag.
    pub fn complete(&mut self, outcome: Outcome) {
        if !self.is_busy() {
            debug!("dropping outcome with no pending submission");
            return;
        }
        self.status = match outcome {
            Ok(result) => {
                info!(verdict = result.verdict.label(), "verification succeeded");
                RequestStatus::Succeeded(result)
            }
            Err(failure) => {
                info!(kind = ?failure.kind, "verification failed");
                RequestStatus::Failed(failure)
            }
        };
    }

    pub async fn submit(&mut self, verifier: &dyn Verifier) -> &RequestStatus {
        if let Some(submission) = self.begin_submit() {
            let outcome = submission.run(verifier).await;
            self.complete(outcome);
        }
        &self.status
    }
}
