/// Integration tests with a mocked text generation service
/// Exercises the HTTP client and the assistant fallbacks without network access
use cv_insight::catalog::SkillCatalog;
use cv_insight::compose::{CvAssistant, GuideStep};
use cv_insight::llm::{GenerationRequest, HuggingFaceClient, TextGenerator};
use cv_insight::GenerationError;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/models/test/model";

fn client(server: &MockServer) -> HuggingFaceClient {
    HuggingFaceClient::new(
        server.uri(),
        "test/model",
        Some("test-token".to_string()),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn assistant(server: &MockServer, timeout: Duration) -> CvAssistant {
    CvAssistant::new(
        Arc::new(client(server)),
        Arc::new(SkillCatalog::default()),
        timeout,
    )
}

#[tokio::test]
async fn test_generate_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("authorization", "Bearer test-token"))
        .and(body_partial_json(json!({
            "parameters": { "max_new_tokens": 150, "return_full_text": false }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "  Rust, Tokio, SQL  " }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reply = client(&mock_server)
        .generate(&GenerationRequest::new("prompt", 150, 0.3))
        .await
        .unwrap();
    assert_eq!(reply, "Rust, Tokio, SQL");
}

#[tokio::test]
async fn test_generate_service_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": "Model test/model is currently loading"
        })))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .generate(&GenerationRequest::new("prompt", 50, 0.5))
        .await;

    match result {
        Err(GenerationError::Api { status, message }) => {
            assert_eq!(status, 503);
            assert!(message.contains("loading"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_malformed_and_empty_replies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({ "inputs": "malformed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "oops" })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({ "inputs": "empty" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "generated_text": "   " }])))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);

    let malformed = client.generate(&GenerationRequest::new("malformed", 10, 0.5)).await;
    assert!(matches!(malformed, Err(GenerationError::Malformed(_))));

    let empty = client.generate(&GenerationRequest::new("empty", 10, 0.5)).await;
    assert!(matches!(empty, Err(GenerationError::EmptyResponse)));
}

#[tokio::test]
async fn test_suggest_skills_parses_generated_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "Rust, Tokio, SQL, Docker, Git, Kubernetes" }
        ])))
        .mount(&mock_server)
        .await;

    let skills = assistant(&mock_server, Duration::from_secs(5))
        .suggest_skills("Développeur Backend")
        .await;
    assert_eq!(skills, vec!["Rust", "Tokio", "SQL", "Docker", "Git"]);
}

#[tokio::test]
async fn test_suggest_skills_falls_back_on_service_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let skills = assistant(&mock_server, Duration::from_secs(5))
        .suggest_skills("Data Scientist junior")
        .await;
    assert_eq!(skills, vec!["Python", "R", "Machine Learning", "SQL", "Statistiques"]);
}

#[tokio::test]
async fn test_chatbot_reply_uses_both_generations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({ "parameters": { "max_new_tokens": 200 } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "Mettez vos diplômes récents en premier." }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({ "parameters": { "max_new_tokens": 150 } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "Ajoutez vos dates. Indiquez vos mentions. Citez vos projets. Restez bref." }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reply = assistant(&mock_server, Duration::from_secs(5))
        .chatbot_reply("Comment présenter ma formation ?", Some("Développeur"))
        .await;

    assert_eq!(reply.message, "Mettez vos diplômes récents en premier.");
    assert_eq!(
        reply.suggestions,
        vec!["Ajoutez vos dates", "Indiquez vos mentions", "Citez vos projets"]
    );
    assert_eq!(reply.next_step, Some(GuideStep::Education));
}

#[tokio::test]
async fn test_chatbot_reply_falls_back_on_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "generated_text": "trop tard" }]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let reply = assistant(&mock_server, Duration::from_millis(100))
        .chatbot_reply("Quelle expérience mettre en avant ?", None)
        .await;

    assert!(reply.message.starts_with("Je suis désolé"));
    assert_eq!(reply.suggestions.len(), 3);
    assert_eq!(reply.next_step, Some(GuideStep::Experience));
}

#[tokio::test]
async fn test_guide_skills_step_calls_service() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "- Figma\n- Photoshop\n- UI/UX" }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reply = assistant(&mock_server, Duration::from_secs(5))
        .guide("skills", "Designer")
        .await;

    assert_eq!(reply.suggestions, vec!["Figma", "Photoshop", "UI/UX"]);
    assert_eq!(reply.next_step, Some(GuideStep::Summary));
}
