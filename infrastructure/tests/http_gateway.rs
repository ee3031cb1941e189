//! HttpChatGateway against a mock chat-completion proxy

use chatline_application::{
    ChatGateway, ConversationSession, SessionConfig, SessionEvent, SessionEventSender,
    TransportError,
};
use chatline_domain::{FALLBACK_MESSAGE, Message, Role};
use chatline_infrastructure::HttpChatGateway;
use reqwest::Url;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn gateway_for(server: &MockServer) -> HttpChatGateway {
    let endpoint = Url::parse(&format!("{}/", server.uri())).unwrap();
    HttpChatGateway::new(endpoint).unwrap()
}

fn success_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn posts_transcript_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "messages": [
                {"role": "system", "content": "You are a beauty advisor."},
                {"role": "user", "content": "Hi"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Hello! 😊")))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let messages = vec![
        Message::system("You are a beauty advisor."),
        Message::user("Hi"),
    ];

    let reply = gateway.complete(&messages).await.unwrap();
    assert_eq!(reply, "Hello! 😊");
}

#[tokio::test]
async fn non_success_status_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(success_body("ignored")))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let err = gateway.complete(&[Message::user("Hi")]).await.unwrap_err();
    assert_eq!(err, TransportError::Status(500));
}

#[tokio::test]
async fn malformed_success_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let err = gateway.complete(&[Message::user("Hi")]).await.unwrap_err();
    assert!(matches!(err, TransportError::MalformedBody(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_connection_error() {
    // Bind then drop a listener so the port is very likely closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let endpoint = Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap();

    let gateway = HttpChatGateway::new(endpoint).unwrap();
    let err = gateway.complete(&[Message::user("Hi")]).await.unwrap_err();
    assert!(matches!(err, TransportError::Connection(_)));
}

#[tokio::test]
async fn session_over_http_success_scenario() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"choices":[{"message":{"content":"Hello! 😊"}}]}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let gateway = Arc::new(gateway_for(&server).await);
    let config = SessionConfig::default().with_system_prompt("You are a beauty advisor.");
    let mut session = ConversationSession::new(gateway, config).unwrap();
    let (observer, mut rx) = SessionEventSender::channel();

    let outcome = session.submit("Hi", &observer).await.unwrap();

    assert_eq!(outcome.reply(), Some("Hello! 😊"));
    let transcript: Vec<(Role, &str)> = session
        .transcript()
        .messages()
        .iter()
        .map(|m| (m.role(), m.content()))
        .collect();
    assert_eq!(
        transcript,
        vec![
            (Role::System, "You are a beauty advisor."),
            (Role::User, "Hi"),
            (Role::Assistant, "Hello! 😊"),
        ]
    );

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    assert!(events.contains(&SessionEvent::AssistantMessage("Hello! 😊".to_string())));
}

#[tokio::test]
async fn session_over_http_failure_scenario() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let gateway = Arc::new(gateway_for(&server).await);
    let mut session = ConversationSession::new(gateway, SessionConfig::default()).unwrap();
    let (observer, mut rx) = SessionEventSender::channel();

    assert!(session.submit("Hi", &observer).await.is_err());

    assert_eq!(session.transcript().len(), 2);
    assert_eq!(session.transcript().last().unwrap().role(), Role::User);

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    assert_eq!(
        events.last(),
        Some(&SessionEvent::Error(FALLBACK_MESSAGE.to_string()))
    );
}

#[tokio::test]
async fn slow_endpoint_hits_session_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_body("too late"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let gateway = Arc::new(gateway_for(&server).await);
    let config = SessionConfig::default().with_request_timeout(Some(Duration::from_millis(100)));
    let mut session = ConversationSession::new(gateway, config).unwrap();
    let (observer, _rx) = SessionEventSender::channel();

    let err = session.submit("Hi", &observer).await.unwrap_err();
    assert_eq!(err.to_string(), "Transport error: Request timed out");
    assert_eq!(session.transcript().len(), 2);
}
