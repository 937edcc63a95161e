use serde::{Deserialize, Serialize};

pub const NO_ENTITIES: &str = "No specific entities found.";
pub const NO_EVIDENCE: &str = "No relevant search results were found.";

#[derive(Debug, Clone, Serialize)]
pub struct VerifyRequest<'a> {
    pub news_text: &'a str, // field name is fixed by the verification endpoint
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    pub verdict: String,
    #[serde(default)]
    pub entities: Option<Vec<String>>, // null and absent both mean "none found"
    #[serde(default)]
    pub evidence: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "true")]
    Factual,
    #[serde(rename = "false")]
    Fake,
    #[serde(rename = "inconclusive")]
    Inconclusive,
}

impl Verdict {
    /// Case-insensitive; anything other than "true"/"false" is inconclusive.
    pub fn from_wire(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "true" => Verdict::Factual,
            "false" => Verdict::Fake,
            _ => Verdict::Inconclusive,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Factual => "FACTUAL",
            Verdict::Fake => "FAKE",
            Verdict::Inconclusive => "INCONCLUSIVE",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Verdict::Factual => "The claim appears to be FACTUAL.",
            Verdict::Fake => "The claim appears to be FAKE.",
            Verdict::Inconclusive => "The verdict was inconclusive.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    pub verdict: Verdict,
    pub entities: Vec<String>,
    pub evidence: String,
}

impl VerificationResult {
    pub fn entities_text(&self) -> String {
        let joined = self.entities.join(", ");
        if joined.is_empty() { NO_ENTITIES.to_string() } else { joined }
    }

    pub fn evidence_text(&self) -> &str {
        if self.evidence.is_empty() { NO_EVIDENCE } else { &self.evidence }
    }
}

impl From<VerifyResponse> for VerificationResult {
    fn from(resp: VerifyResponse) -> Self {
        Self {
            verdict: Verdict::from_wire(&resp.verdict),
            entities: resp.entities.unwrap_or_default(),
            evidence: resp.evidence.unwrap_or_default(),
        }
    }
}
