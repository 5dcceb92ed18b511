use serde_json::json;
use std::io::Read;
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use wargate::error::LlmError;
use wargate::llm::{OpenAiProvider, Provider, ProviderMessage, RetryPolicy, invoke_with_retry};
use wargate::tools::ToolSpec;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion(content: &str) -> serde_json::Value {
    json!({
        "model": "gpt-4.1",
        "choices": [{
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 3}
    })
}

#[tokio::test]
async fn chat_with_system_posts_bearer_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4.1",
            "max_tokens": 256,
            "messages": [
                {"role": "system", "content": "You are the J2"},
                {"role": "user", "content": "Assess the threat"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("MLCOA: envelopment")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAiProvider::new("sk-test", &format!("{}/v1", server.uri()), 10, Some(256));
    let reply = provider
        .chat_with_system(Some("You are the J2"), "Assess the threat", "gpt-4.1", 0.7)
        .await
        .unwrap();
    assert_eq!(reply, "MLCOA: envelopment");
    server.verify().await;
}

#[tokio::test]
async fn tool_calls_are_parsed_into_blocks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {"name": "doctrine_retriever", "arguments": "{\"query\":\"JP 5-0\"}"}
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        })))
        .mount(&server)
        .await;

    let provider = OpenAiProvider::new("sk-test", &server.uri(), 10, None);
    let tools = [ToolSpec {
        name: "doctrine_retriever".into(),
        description: "Doctrine lookup".into(),
        parameters: json!({"type": "object"}),
    }];
    let response = provider
        .chat_with_tools(None, &[ProviderMessage::user("plan")], &tools, "gpt-4.1", 0.2)
        .await
        .unwrap();
    assert!(response.has_tool_use());
}

#[tokio::test]
async fn api_errors_are_typed_and_scrubbed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string("Incorrect API key provided: sk-proj-abc123XYZ"),
        )
        .mount(&server)
        .await;

    let provider = OpenAiProvider::new("sk-test", &server.uri(), 10, None);
    let err = provider
        .chat_with_system(None, "hi", "gpt-4.1", 0.7)
        .await
        .unwrap_err();
    match err.downcast_ref::<LlmError>() {
        Some(LlmError::Api { status, message, .. }) => {
            assert_eq!(*status, 401);
            assert!(!message.contains("abc123XYZ"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn api_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAiProvider::new("sk-test", &server.uri(), 10, None);
    let provider = &provider;
    let result = invoke_with_retry(
        RetryPolicy::new(3, Duration::from_millis(1)),
        "test",
        move || provider.chat_with_system(None, "hi", "gpt-4.1", 0.7),
    )
    .await;
    assert!(result.is_err());
    server.verify().await;
}

/// Accepts connections, reads each request head and hangs up without a reply.
fn spawn_hangup_server() -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&accepted);
    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            counter.fetch_add(1, Ordering::SeqCst);
            let mut buf = [0u8; 8192];
            let mut seen = Vec::new();
            while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => seen.extend_from_slice(&buf[..n]),
                }
            }
            drop(stream);
        }
    });
    (format!("http://{addr}/v1"), accepted)
}

#[tokio::test]
async fn dropped_connections_are_retried() {
    let (base_url, accepted) = spawn_hangup_server();
    let provider = OpenAiProvider::new("sk-test", &base_url, 10, None);
    let provider = &provider;

    let err = invoke_with_retry(
        RetryPolicy::new(3, Duration::from_millis(1)),
        "test",
        move || provider.chat_with_system(None, "hi", "gpt-4.1", 0.7),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<LlmError>(),
        Some(LlmError::Transport { .. })
    ));
    assert_eq!(accepted.load(Ordering::SeqCst), 4);
}
