//! HTTP contract tests: the real `HttpTransport` against a fake
//! remote-control server.
//!
//! The fake server is an `axum` app bound to `127.0.0.1:0`.  A single
//! fallback handler records every request (method, path, headers, body) and
//! answers from a per-path table, so each test can assert exactly what went
//! over the wire.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};

use remote_client::application::{
    CommandDispatcher, RepeatPressController, TelemetryError, TelemetryPoller, TransportError,
};
use remote_client::infrastructure::transport::HttpTransport;
use remote_core::Command;

// ── Fake server ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Default)]
struct FakeServer {
    requests: Mutex<Vec<Recorded>>,
    routes: Mutex<HashMap<String, (StatusCode, Value)>>,
}

impl FakeServer {
    fn route(&self, path: &str, status: StatusCode, body: Value) {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body));
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn posts_to(&self, path: &str) -> Vec<Value> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == Method::POST && r.path == path)
            .map(|r| serde_json::from_slice(&r.body).unwrap_or(Value::Null))
            .collect()
    }
}

async fn record(
    State(server): State<Arc<FakeServer>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    server.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        headers,
        body,
    });

    if method == Method::POST {
        return StatusCode::OK.into_response();
    }
    let route = server.routes.lock().unwrap().get(&path).cloned();
    match route {
        Some((status, body)) => (status, Json(body)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Starts the fake server and returns it with its base URL.
async fn start_server() -> (Arc<FakeServer>, String) {
    let server = Arc::new(FakeServer::default());
    server.route("/system-info", StatusCode::OK, json!({ "temperature": 55.0, "hostname": "salon" }));
    server.route("/cpu-load", StatusCode::OK, json!({ "load": 37.5 }));
    server.route(
        "/memory-info",
        StatusCode::OK,
        json!({ "total": 8_589_934_592u64, "free": 2_147_483_648u64, "used": 6_442_450_944u64,
                "active": 4_294_967_296u64, "available": 3_221_225_472u64 }),
    );
    server.route(
        "/disk-info",
        StatusCode::OK,
        json!([{ "fs": "/dev/sda1", "type": "ext4", "used": 1_000_000u64, "size": 2_000_000u64 }]),
    );

    let app = Router::new()
        .fallback(record)
        .with_state(Arc::clone(&server));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake server");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake server");
    });

    (server, format!("http://{addr}"))
}

fn transport_for(base_url: &str) -> Arc<HttpTransport> {
    // Bypass any proxy configured in the environment; the server is local.
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client");
    Arc::new(HttpTransport::with_client(base_url, client))
}

// ── Telemetry ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_system_info_merges_four_endpoints() {
    // Arrange
    let (server, base_url) = start_server().await;
    let poller = TelemetryPoller::new(transport_for(&base_url));

    // Act
    let info = poller.fetch_system_info().await.expect("fetch");

    // Assert
    assert_eq!(info.temperature, 55.0);
    assert_eq!(info.cpu_load, 37.5);
    assert_eq!(info.memory.total, 8_589_934_592);
    assert_eq!(info.disk.len(), 1);
    assert_eq!(info.extra.get("hostname"), Some(&json!("salon")));

    let mut paths: Vec<String> = server.requests().into_iter().map(|r| r.path).collect();
    paths.sort();
    assert_eq!(paths, vec!["/cpu-load", "/disk-info", "/memory-info", "/system-info"]);
}

#[tokio::test]
async fn test_get_requests_disable_caching() {
    let (server, base_url) = start_server().await;
    let poller = TelemetryPoller::new(transport_for(&base_url));

    poller.fetch_system_info().await.expect("fetch");

    for request in server.requests() {
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.headers["cache-control"], "no-cache", "{}", request.path);
        assert_eq!(request.headers["pragma"], "no-cache", "{}", request.path);
        assert_eq!(request.headers["expires"], "0", "{}", request.path);
        assert_eq!(request.headers["content-type"], "application/json", "{}", request.path);
    }
}

#[tokio::test]
async fn test_one_failing_endpoint_fails_the_whole_fetch() {
    // Arrange
    let (server, base_url) = start_server().await;
    server.route("/disk-info", StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "boom" }));
    let poller = TelemetryPoller::new(transport_for(&base_url));

    // Act
    let result = poller.fetch_system_info().await;

    // Assert
    match result {
        Err(TelemetryError::Transport(TransportError::Status { path, status })) => {
            assert_eq!(path, "/disk-info");
            assert_eq!(status, 500);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_volume_up_posts_bare_command() {
    // Arrange
    let (server, base_url) = start_server().await;
    let dispatcher = CommandDispatcher::new(transport_for(&base_url));

    // Act
    dispatcher
        .send_volume_command(Command::VolumeUp)
        .await
        .expect("post");

    // Assert
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].headers["content-type"], "application/json");
    assert_eq!(server.posts_to("/"), vec![json!({ "command": "volume_up" })]);
}

#[tokio::test]
async fn test_power_actions_post_to_their_paths() {
    let (server, base_url) = start_server().await;
    let dispatcher = CommandDispatcher::new(transport_for(&base_url));

    dispatcher.handle_turn_off().await.expect("turn off");
    dispatcher.handle_turn_on().await.expect("restart");
    dispatcher.handle_turn_suspend().await.expect("suspend");

    let requests = server.requests();
    let paths: Vec<&str> = requests.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["/turn-off", "/restart", "/suspend"]);
    assert!(requests.iter().all(|r| r.method == Method::POST && r.body.is_empty()));
}

#[tokio::test]
async fn test_hold_right_350ms_posts_moves_then_stops() {
    // Arrange
    let (server, base_url) = start_server().await;
    let dispatcher = Arc::new(CommandDispatcher::new(transport_for(&base_url)));
    let mut controller = RepeatPressController::new(dispatcher);

    // Act: real clock, so allow one tick of jitter either way
    controller.start_moving(Command::MoveMouse, 45, 0);
    tokio::time::sleep(Duration::from_millis(350)).await;
    controller.stop_moving();
    tokio::time::sleep(Duration::from_millis(100)).await;
    let at_release = server.posts_to("/").len();
    tokio::time::sleep(Duration::from_millis(300)).await;

    // Assert
    let moves = server.posts_to("/");
    assert!((2..=4).contains(&moves.len()), "got {} moves", moves.len());
    assert!(moves
        .iter()
        .all(|m| *m == json!({ "command": "move_mouse", "x": 45, "y": 0 })));
    assert_eq!(moves.len(), at_release, "no moves after release");
}
