use serde_json::Value;
use verinews::{ClientConfig, HttpVerifier};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const VERIFY_PATH: &str = "/api/verify";

/// Starts a mock verification endpoint that answers every POST with `template`.
pub async fn collaborator(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(VERIFY_PATH))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

pub fn verifier_for(server: &MockServer) -> HttpVerifier {
    verifier_at(&server.uri())
}

pub fn verifier_at(uri: &str) -> HttpVerifier {
    let cfg = ClientConfig::new(uri.parse().expect("mock uri"));
    HttpVerifier::new(&cfg).expect("http client")
}

pub fn verdict_body(verdict: &str, entities: &[&str], evidence: &str) -> Value {
    serde_json::json!({ "verdict": verdict, "entities": entities, "evidence": evidence })
}

pub async fn request_bodies(server: &MockServer) -> Vec<Value> {
    let requests = server.received_requests().await.expect("request recording enabled");
    requests.iter().map(|r| r.body_json().expect("json body")).collect()
}
