//! End-to-end tests against a real listener on an ephemeral port.

use std::net::SocketAddr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tokio::sync::oneshot;

use pipeline_probe::api::create_router;
use pipeline_probe::server::{bind, serve};

/// Running server; dropping it triggers graceful shutdown.
struct TestServer {
    addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            serve(listener, create_router(), async {
                let _ = rx.await;
            })
            .await
            .unwrap();
        });

        Self {
            addr,
            _shutdown: tx,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

#[tokio::test]
async fn health_returns_exact_body() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/health")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"success":"true","message":"api is working"}"#
    );
}

#[tokio::test]
async fn argo_timestamp_is_current() {
    let server = TestServer::start().await;

    let issued = Utc::now();
    let response = reqwest::get(server.url("/argo")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], "true");
    assert_eq!(body["message"], "our CI/CD pipeline is working");

    let timestamp = DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc);
    let skew = (timestamp - issued).num_milliseconds().abs();
    assert!(skew <= 5_000, "timestamp {} too far from {}", timestamp, issued);
}

#[tokio::test]
async fn undefined_route_returns_404() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/does-not-exist")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_all_succeed() {
    let server = TestServer::start().await;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    let requests = (0..100).map(|i| {
        let client = client.clone();
        let url = if i % 2 == 0 {
            server.url("/health")
        } else {
            server.url("/argo")
        };
        async move {
            let response = client.get(&url).send().await.unwrap();
            let status = response.status();
            let body: Value = response.json().await.unwrap();
            (status, body)
        }
    });

    let results = join_all(requests).await;

    assert_eq!(results.len(), 100);
    for (status, body) in results {
        assert_eq!(status, reqwest::StatusCode::OK);
        assert_eq!(body["success"], "true");
    }
}
