use folio_gateway::{routes, AppState, GatewayConfig};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Helper to spawn a gateway on a random port, pointed at `upstream_url`
async fn spawn_gateway(upstream_url: String) -> String {
    spawn_gateway_with(GatewayConfig {
        upstream_url,
        ..Default::default()
    })
    .await
}

async fn spawn_gateway_with(mut config: GatewayConfig) -> String {
    config.host = "127.0.0.1".to_string();
    config.port = 0;

    let state = Arc::new(AppState::new(config).unwrap());
    let app = routes::create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn upstream_replying(template: ResponseTemplate) -> MockServer {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(template)
        .mount(&upstream)
        .await;
    upstream
}

// Upstream that writes `response` verbatim on one connection and holds the
// socket open for `hold` before closing it
async fn raw_upstream(response: &'static str, hold: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        tokio::time::sleep(hold).await;
    });

    format!("http://{}/api/random", addr)
}

async fn get_quote(base_url: &str) -> (StatusCode, Value) {
    let res = Client::new()
        .get(format!("{}/api/quote", base_url))
        .send()
        .await
        .unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

#[tokio::test]
async fn test_quote_with_author() {
    let upstream = upstream_replying(
        ResponseTemplate::new(200).set_body_json(json!([{ "q": "Hi", "a": "Bob", "h": "<p>Hi</p>" }])),
    )
    .await;
    let base_url = spawn_gateway(format!("{}/api/random", upstream.uri())).await;

    let (status, body) = get_quote(&base_url).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "content": "Hi", "author": "Bob" }));
}

#[tokio::test]
async fn test_quote_without_author() {
    let upstream =
        upstream_replying(ResponseTemplate::new(200).set_body_json(json!([{ "q": "Hello" }]))).await;
    let base_url = spawn_gateway(format!("{}/api/random", upstream.uri())).await;

    let (status, body) = get_quote(&base_url).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "content": "Hello", "author": "Unknown" }));
}

#[tokio::test]
async fn test_post_is_rejected_without_upstream_call() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "q": "Hello" }])))
        .expect(0)
        .mount(&upstream)
        .await;
    let base_url = spawn_gateway(format!("{}/api/random", upstream.uri())).await;

    let res = Client::new()
        .post(format!("{}/api/quote", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Method not allowed" }));

    upstream.verify().await;
}

#[tokio::test]
async fn test_upstream_unavailable() {
    let upstream = upstream_replying(ResponseTemplate::new(503)).await;
    let base_url = spawn_gateway(format!("{}/api/random", upstream.uri())).await;

    let (status, body) = get_quote(&base_url).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "error": "Quote fetch failed" }));
}

#[tokio::test]
async fn test_malformed_payloads() {
    for payload in [json!({}), json!([]), json!([{}])] {
        let upstream = upstream_replying(ResponseTemplate::new(200).set_body_json(payload)).await;
        let base_url = spawn_gateway(format!("{}/api/random", upstream.uri())).await;

        let (status, body) = get_quote(&base_url).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, json!({ "error": "Invalid quote payload" }));
    }
}

#[tokio::test]
async fn test_non_json_body() {
    let upstream =
        upstream_replying(ResponseTemplate::new(200).set_body_string("<html>Too many requests</html>"))
            .await;
    let base_url = spawn_gateway(format!("{}/api/random", upstream.uri())).await;

    let (status, body) = get_quote(&base_url).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Unexpected server error" }));
}

#[tokio::test]
async fn test_connection_refused() {
    // Reserve a port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_addr = listener.local_addr().unwrap();
    drop(listener);

    let base_url = spawn_gateway(format!("http://{}/api/random", dead_addr)).await;

    let (status, body) = get_quote(&base_url).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Unexpected server error" }));
}

#[tokio::test]
async fn test_health_check() {
    let base_url = spawn_gateway("http://127.0.0.1:9/api/random".to_string()).await;

    let res = Client::new()
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_error_status_with_truncated_body() {
    let upstream_url = raw_upstream(
        "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 100\r\n\r\nshort",
        Duration::ZERO,
    )
    .await;
    let base_url = spawn_gateway(upstream_url).await;

    let (status, body) = get_quote(&base_url).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "error": "Quote fetch failed" }));
}

#[tokio::test]
async fn test_error_status_with_stalled_body_and_timeout() {
    let upstream_url = raw_upstream(
        "HTTP/1.1 429 Too Many Requests\r\nContent-Length: 100\r\n\r\nslow",
        Duration::from_secs(3),
    )
    .await;
    let base_url = spawn_gateway_with(GatewayConfig {
        upstream_url,
        upstream_timeout_secs: Some(1),
        ..Default::default()
    })
    .await;

    let (status, body) = get_quote(&base_url).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body, json!({ "error": "Quote fetch failed" }));
}
