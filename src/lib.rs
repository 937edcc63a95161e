pub mod client;
pub mod config;
pub mod error;
pub mod panel;
pub mod presenter;
pub mod types;

pub use client::{HttpVerifier, Verifier};
pub use config::ClientConfig;
pub use error::{Failure, FailureKind, VerifyError};
pub use panel::{Outcome, RequestStatus, Submission, VerificationPanel};
pub use presenter::{render, PanelView};
pub use types::{VerificationResult, Verdict};
