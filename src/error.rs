use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

pub const MISSING_INPUT: &str = "Please enter some text to verify.";
pub const CONNECTION_FAILED: &str = "Could not connect to the analysis server. Please ensure it's running.";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while talking to the verification endpoint.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("server responded with status: {0}")]
    Server(StatusCode),

    #[error("verification request failed: {0}")]
    Transport(#[source] BoxError),
}

impl VerifyError {
    pub fn transport(err: impl Into<BoxError>) -> Self {
        VerifyError::Transport(err.into())
    }
}

impl From<reqwest::Error> for VerifyError {
    fn from(err: reqwest::Error) -> Self {
        VerifyError::transport(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureKind {
    MissingInput,
    Server { status: u16 },
    Connection,
}

/// What the panel shows when a submission does not produce a verdict.
/// Carries no low-level error detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Failure {
    #[serde(flatten)]
    pub kind: FailureKind,
}

impl Failure {
    pub fn missing_input() -> Self {
        Self { kind: FailureKind::MissingInput }
    }

    pub fn message(&self) -> &'static str {
        match self.kind {
            FailureKind::MissingInput => MISSING_INPUT,
            FailureKind::Server { .. } | FailureKind::Connection => CONNECTION_FAILED,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::Server { status } => Some(status),
            _ => None,
        }
    }
}

impl From<&VerifyError> for Failure {
    fn from(err: &VerifyError) -> Self {
        let kind = match err {
            VerifyError::Server(status) => FailureKind::Server { status: status.as_u16() },
            VerifyError::Transport(_) => FailureKind::Connection,
        };
        Self { kind }
    }
}
