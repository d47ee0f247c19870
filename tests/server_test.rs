use pipeline_demo::{config::AppConfig, http::http_server::run_http_server, state::AppState};
use serde_json::Value;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::watch};

#[tokio::test]
async fn test_server_serves_and_shuts_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = watch::channel(());
    let app_state = Arc::new(AppState::new(AppConfig::load(None).unwrap()));

    let server = tokio::spawn(run_http_server(listener, shutdown_rx, app_state));

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/api/hello/personalized", addr))
        .query(&[("name", "IntegrationTest")])
        .send()
        .await
        .expect("Failed to connect to server");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Hello, IntegrationTest!");
    assert_eq!(body["status"], "success");

    let response = client
        .get(format!("http://{}/api/health", addr))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "UP");

    drop(client);
    shutdown_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
