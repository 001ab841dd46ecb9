//! Mediator against a stubbed Gemini HTTP endpoint.

use nexus_exec::LlmError;
use nexus_exec::llm::GeminiProvider;
use nexus_exec::mediator::ResponseMediator;
use nexus_exec::transcript::StructuredReply;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-3-pro-preview";

fn mediator_for(server: &MockServer, api_key: Option<&str>) -> ResponseMediator {
    let provider =
        GeminiProvider::new(api_key).with_base_url(format!("{}/v1beta", server.uri()));
    ResponseMediator::new(Box::new(provider), MODEL, 0.7)
}

fn gemini_envelope(reply_json: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"parts": [{"text": reply_json}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 80}
    })
}

#[tokio::test]
async fn submit_parses_a_schema_conformant_reply() {
    let server = MockServer::start().await;
    let body = r###"{"plan":["Research","Draft"],"execution":"## Plan\n...","verification":"Limited to Q1 data."}"###;

    Mock::given(method("POST"))
        .and(path(format!("/v1beta/models/{MODEL}:generateContent")))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_envelope(body)))
        .expect(1)
        .mount(&server)
        .await;

    let mediator = mediator_for(&server, Some("test-key"));
    let reply = mediator.submit("Plan a launch").await.unwrap();

    assert_eq!(
        reply,
        StructuredReply {
            plan: vec!["Research".into(), "Draft".into()],
            execution: "## Plan\n...".into(),
            verification: "Limited to Q1 data.".into(),
        }
    );
}

#[tokio::test]
async fn request_carries_the_fixed_contract() {
    let server = MockServer::start().await;
    let body = r#"{"plan":[],"execution":"e","verification":"v"}"#;

    Mock::given(method("POST"))
        .and(path(format!("/v1beta/models/{MODEL}:generateContent")))
        .and(body_partial_json(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "required": ["plan", "execution", "verification"]
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_envelope(body)))
        .expect(1)
        .mount(&server)
        .await;

    let mediator = mediator_for(&server, Some("test-key"));
    assert!(mediator.submit("Plan a launch").await.is_ok());
}

#[tokio::test]
async fn server_error_surfaces_the_uniform_kind() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let mediator = mediator_for(&server, Some("test-key"));
    let err = mediator.submit("Plan a launch").await.unwrap_err();

    assert!(matches!(err, LlmError::Generation(_)));
    assert!(err.to_string().starts_with("response generation failed"));
}

#[tokio::test]
async fn off_schema_payload_surfaces_the_uniform_kind() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_envelope("I decided to answer in prose instead.")),
        )
        .mount(&server)
        .await;

    let mediator = mediator_for(&server, Some("test-key"));
    let err = mediator.submit("Plan a launch").await.unwrap_err();
    assert!(matches!(err, LlmError::Generation(_)));
}

#[tokio::test]
async fn empty_candidates_surfaces_the_uniform_kind() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let mediator = mediator_for(&server, Some("test-key"));
    assert!(matches!(
        mediator.submit("Plan a launch").await,
        Err(LlmError::Generation(_))
    ));
}

#[tokio::test]
async fn missing_credential_still_reaches_the_service() {
    // Credential absence is not validated locally: the call is made with an
    // empty key and the remote rejection comes back through the uniform
    // failure path.
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(Some(""))
        .with_base_url(format!("{}/v1beta", server.uri()));
    let mediator = ResponseMediator::new(Box::new(provider), MODEL, 0.7);

    let err = mediator.submit("Plan a launch").await.unwrap_err();
    assert!(matches!(err, LlmError::Generation(_)));
}

#[tokio::test]
async fn api_error_body_is_surfaced_sanitized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string("denied for key=AIzaSyVerySecretValue123"),
        )
        .mount(&server)
        .await;

    let mediator = mediator_for(&server, Some("test-key"));
    let err = mediator.submit("Plan a launch").await.unwrap_err();

    let message = err.to_string();
    assert!(!message.contains("AIzaSyVerySecretValue123"));
    assert!(message.contains("[REDACTED]"));
}
