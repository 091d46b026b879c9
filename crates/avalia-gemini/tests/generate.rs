use avalia_gemini::{AnalysisError, AnalysisService, GeminiClient, GeminiConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "test-key-0123456789";
const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    let config = GeminiConfig::new(Some(KEY.to_string()))
        .with_base_url(format!("{}/v1beta", server.uri()));
    GeminiClient::new(config)
}

fn reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 120,
            "candidatesTokenCount": 14,
            "totalTokenCount": 134
        }
    })
}

#[tokio::test]
async fn returns_reply_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", KEY))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "avalie" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("**Resumo:** Boa condição.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let text = client.generate("avalie").await.unwrap();
    assert_eq!(text, "**Resumo:** Boa condição.");
}

#[tokio::test]
async fn works_through_the_trait_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("ok")))
        .mount(&server)
        .await;

    let service: Box<dyn AnalysisService> = Box::new(client_for(&server));
    assert_eq!(service.model(), "gemini-2.5-flash");
    assert!(service.has_credential());
    assert_eq!(service.analyze("p").await.unwrap(), "ok");
}

#[tokio::test]
async fn missing_key_fails_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("never")))
        .expect(0)
        .mount(&server)
        .await;

    let client = GeminiClient::new(
        GeminiConfig::new(None).with_base_url(format!("{}/v1beta", server.uri())),
    );
    let err = client.generate("avalie").await.unwrap_err();
    assert!(matches!(err, AnalysisError::Unauthenticated(_)));
}

#[tokio::test]
async fn rejected_credentials_are_unauthenticated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT",
                "details": [{
                    "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                    "reason": "API_KEY_INVALID"
                }]
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("avalie").await.unwrap_err();
    assert!(matches!(err, AnalysisError::Unauthenticated(_)));
}

#[tokio::test]
async fn forbidden_is_unauthenticated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("avalie").await.unwrap_err();
    assert!(matches!(err, AnalysisError::Unauthenticated(ref m) if m == "forbidden"));
}

#[tokio::test]
async fn server_errors_are_service_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": 500, "message": "Internal error encountered.", "status": "INTERNAL" }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("avalie").await.unwrap_err();
    match err {
        AnalysisError::Service { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "INTERNAL: Internal error encountered.");
        }
        other => panic!("expected service failure, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("avalie").await.unwrap_err();
    assert!(matches!(err, AnalysisError::ResponseParse(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_failure() {
    let client = GeminiClient::new(
        GeminiConfig::new(Some(KEY.to_string())).with_base_url("http://127.0.0.1:1/v1beta"),
    );
    let err = client.generate("avalie").await.unwrap_err();
    assert!(matches!(err, AnalysisError::Transport(_)));
}
