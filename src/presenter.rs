//! Pure rendering of panel state into a view model plus a plain-text form.
use std::fmt;

use crate::panel::{RequestStatus, VerificationPanel};
use crate::types::{VerificationResult, Verdict};

pub const HEADING: &str = "Fake or Factual?";
pub const SUBTITLE: &str = "Enter the news headline or text below to check its authenticity.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone { Positive, Negative }

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button { pub label: &'static str, pub enabled: bool }

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub tone: Tone,
    pub icon: &'static str,
    pub title: &'static str,
    pub entities: String,
    pub evidence: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Empty,
    Error(String),
    Result(ResultCard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub input_editable: bool,
    pub button: Button,
    pub body: Body,
}

impl From<&VerificationResult> for ResultCard {
    fn from(r: &VerificationResult) -> Self {
        let factual = r.verdict == Verdict::Factual;
        Self {
            tone: if factual { Tone::Positive } else { Tone::Negative },
            icon: if factual { "✅" } else { "❌" },
            title: r.verdict.title(),
            entities: r.entities_text(),
            evidence: r.evidence_text().to_string(),
        }
    }
}

pub fn render(panel: &VerificationPanel) -> PanelView {
    let busy = panel.is_busy();
    let body = match panel.status() {
        RequestStatus::Idle | RequestStatus::Pending => Body::Empty,
        RequestStatus::Succeeded(r) => Body::Result(r.into()),
        RequestStatus::Failed(f) => Body::Error(f.message().to_string()),
    };
    PanelView {
        input_editable: !busy,
        button: Button { label: if busy { "Analyzing..." } else { "Analyze" }, enabled: !busy },
        body,
    }
}

impl fmt::Display for ResultCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.icon, self.title)?;
        writeln!(f)?;
        writeln!(f, "1. Extracted Entities")?;
        writeln!(f, "   {}", self.entities)?;
        writeln!(f)?;
        writeln!(f, "2. Gathered Evidence")?;
        write!(f, "   {}", self.evidence)
    }
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            Body::Empty if !self.button.enabled => write!(f, "{}", self.button.label),
            Body::Empty => Ok(()),
            Body::Error(msg) => write!(f, "Error: {msg}"),
            Body::Result(card) => write!(f, "{card}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Failure, FailureKind, CONNECTION_FAILED};
    use crate::types::{NO_ENTITIES, NO_EVIDENCE};
    use pretty_assertions::assert_eq;

    fn settled(outcome: crate::panel::Outcome) -> VerificationPanel {
        let mut panel = VerificationPanel::with_input("text");
        let _pending = panel.begin_submit().unwrap();
        panel.complete(outcome);
        panel
    }

    #[test]
    fn idle_panel_offers_analyze() {
        let view = render(&VerificationPanel::new());
        assert_eq!(view.button, Button { label: "Analyze", enabled: true });
        assert_eq!(view.body, Body::Empty);
        assert_eq!(view.to_string(), "");
    }

    #[test]
    fn pending_panel_disables_the_control() {
        let mut panel = VerificationPanel::with_input("text");
        let _pending = panel.begin_submit().unwrap();
        let view = render(&panel);
        assert_eq!(view.button, Button { label: "Analyzing...", enabled: false });
        assert!(!view.input_editable);
        assert_eq!(view.to_string(), "Analyzing...");
    }

    #[test]
    fn fake_verdict_renders_full_card() {
        let panel = settled(Ok(VerificationResult {
            verdict: Verdict::Fake,
            entities: vec!["moon".into()],
            evidence: "No credible source confirms this.".into(),
        }));
        let view = render(&panel);
        let Body::Result(card) = &view.body else { panic!("expected a result card") };
        assert_eq!(card.title, "The claim appears to be FAKE.");
        assert_eq!(card.tone, Tone::Negative);
        assert_eq!(
            view.to_string(),
            "❌ The claim appears to be FAKE.\n\n1. Extracted Entities\n   moon\n\n2. Gathered Evidence\n   No credible source confirms this."
        );
    }

    #[test]
    fn factual_and_inconclusive_cards() {
        let card = ResultCard::from(&VerificationResult { verdict: Verdict::Factual, entities: vec![], evidence: String::new() });
        assert_eq!((card.icon, card.tone), ("✅", Tone::Positive));
        assert_eq!(card.entities, NO_ENTITIES);
        assert_eq!(card.evidence, NO_EVIDENCE);

        let card = ResultCard::from(&VerificationResult { verdict: Verdict::Inconclusive, entities: vec![], evidence: String::new() });
        assert_eq!((card.icon, card.tone, card.title), ("❌", Tone::Negative, "The verdict was inconclusive."));
    }

    #[test]
    fn failures_render_as_error_text() {
        let view = render(&settled(Err(Failure { kind: FailureKind::Server { status: 503 } })));
        assert_eq!(view.body, Body::Error(CONNECTION_FAILED.to_string()));
        assert_eq!(view.to_string(), format!("Error: {CONNECTION_FAILED}"));
        assert!(view.button.enabled);
    }
}
