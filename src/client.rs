// src/client.rs
use anyhow::Result;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::VerifyError;
use crate::types::{VerifyRequest, VerifyResponse};

/// The remote service that classifies a piece of news text.
#[async_trait::async_trait]
pub trait Verifier: Send + Sync {
    async fn verify(&self, news_text: &str) -> Result<VerifyResponse, VerifyError>;
}

pub struct HttpVerifier {
    http: Client,
    url: Url,
}

impl HttpVerifier {
    pub fn new(cfg: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { http: builder.build()?, url: cfg.verify_url()? })
    }

    pub fn url(&self) -> &Url { &self.url }
}

#[async_trait::async_trait]
impl Verifier for HttpVerifier {
    async fn verify(&self, news_text: &str) -> Result<VerifyResponse, VerifyError> {
        debug!(url = %self.url, chars = news_text.chars().count(), "posting verification request");
        let resp = self.http
            .post(self.url.clone())
            .json(&VerifyRequest { news_text })
            .send().await
            .inspect_err(|e| warn!(error = %e, "verification endpoint unreachable"))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "verification endpoint returned an error status");
            return Err(VerifyError::Server(status));
        }

        let body = resp.json::<VerifyResponse>().await
            .inspect_err(|e| warn!(error = %e, "malformed verification response"))?;
        debug!(verdict = %body.verdict, "verification response received");
        Ok(body)
    }
}
