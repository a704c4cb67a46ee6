//! KaalClient against an in-process kaald on an ephemeral port.

use kaal_common::{Dispatcher, FakeEncyclopedia, FixedJokes, Reply, SiteMap};
use kaalctl::client::KaalClient;
use kaalctl::errors::{exit_code_for, ClientError, EXIT_DAEMON_UNAVAILABLE};
use kaald::config::ServerConfig;
use kaald::server::{build_router, AppState};
use std::path::PathBuf;
use std::sync::Arc;

async fn spawn_daemon() -> String {
    let config = ServerConfig {
        static_dir: PathBuf::from("/nonexistent/kaal-static"),
        ..ServerConfig::default()
    };
    let dispatcher = Dispatcher::new(SiteMap::builtin(), Arc::new(FakeEncyclopedia::new()))
        .with_jokes(Arc::new(FixedJokes::new("Knock knock.")));
    let app = build_router(AppState::new(dispatcher), &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_command_round_trip() {
    let client = KaalClient::new(&spawn_daemon().await).unwrap();

    let reply = client.command("open github").await.unwrap();
    assert_eq!(reply, Reply::open_url("https://github.com"));

    let reply = client.command("tell me a joke").await.unwrap();
    assert_eq!(reply, Reply::text("Knock knock."));
}

#[tokio::test]
async fn test_empty_command_rejected() {
    let client = KaalClient::new(&spawn_daemon().await).unwrap();

    match client.command("   ").await {
        Err(ClientError::Rejected(message)) => {
            assert_eq!(message, "Please say something for me to process.")
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_health() {
    let client = KaalClient::new(&spawn_daemon().await).unwrap();
    let health = client.health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.sites, 6);
}

#[tokio::test]
async fn test_unreachable_daemon() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = KaalClient::new(&format!("http://{}/", addr)).unwrap();
    let err = client.command("hello").await.unwrap_err();
    assert!(matches!(err, ClientError::Unavailable { .. }));
    assert_eq!(exit_code_for(&anyhow::Error::new(err)), EXIT_DAEMON_UNAVAILABLE);
}
