use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";
pub const DEFAULT_VERIFY_PATH: &str = "/api/verify";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub verify_path: String,
    /// `None` leaves timing to the transport.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint, verify_path: DEFAULT_VERIFY_PATH.to_string(), timeout: None }
    }

    pub fn verify_url(&self) -> anyhow::Result<Url> {
        let mut base = self.endpoint.clone();
        // keep any prefix already on the endpoint, e.g. http://host/proxy
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        Ok(base.join(self.verify_path.trim_start_matches('/'))?)
    }
}
