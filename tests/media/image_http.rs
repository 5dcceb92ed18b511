use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;
use wargate::config::ImageConfig;
use wargate::jpp::{GuidanceResult, JppPhase, PhaseResult};
use wargate::media::{ImageClient, INFOGRAPHIC_FILE, render_phase_image};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/models/gemini-2.5-flash-image:generateContent";

fn config(server: &MockServer) -> ImageConfig {
    ImageConfig {
        enabled: true,
        api_key: Some("g-key".into()),
        base_url: server.uri(),
        max_retries: 2,
        initial_backoff_ms: 1,
        ..ImageConfig::default()
    }
}

fn image_body(bytes: &[u8]) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": STANDARD.encode(bytes)}}]}
        }]
    })
}

#[tokio::test]
async fn generate_decodes_inline_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "g-key"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "draw a slide"}]}],
            "generationConfig": {"responseModalities": ["Image"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(image_body(b"\x89PNG")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ImageClient::from_config(&config(&server)).unwrap();
    assert_eq!(client.generate("draw a slide").await.unwrap(), b"\x89PNG");
    server.verify().await;
}

#[tokio::test]
async fn rate_limits_are_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(image_body(b"ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ImageClient::from_config(&config(&server)).unwrap();
    assert_eq!(client.generate("p").await.unwrap(), b"ok");
    server.verify().await;
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad prompt"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ImageClient::from_config(&config(&server)).unwrap();
    let err = client.generate("p").await.unwrap_err();
    assert!(format!("{err:#}").contains("400"));
    server.verify().await;
}

#[tokio::test]
async fn phase_image_is_saved_or_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(image_body(b"img")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let tmp = tempfile::tempdir().unwrap();
    let client = ImageClient::from_config(&config(&server)).unwrap();
    let result = PhaseResult {
        phase_name: "COA Analysis".into(),
        guidance: GuidanceResult {
            guidance_text: "Wargame all three COAs.".into(),
            ..GuidanceResult::default()
        },
        ..PhaseResult::default()
    };

    let saved = render_phase_image(&client, JppPhase::CoaAnalysis, &result, "Op Test", tmp.path())
        .await
        .unwrap();
    assert_eq!(
        saved,
        tmp.path().join("Op_Test").join("COAAnalysis").join(INFOGRAPHIC_FILE)
    );

    let skipped =
        render_phase_image(&client, JppPhase::CoaComparison, &result, "Op Test", tmp.path()).await;
    assert!(skipped.is_none());
}
