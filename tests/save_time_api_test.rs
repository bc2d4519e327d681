//! End-to-end tests for the record service

use std::sync::Arc;

use tile_slide::report::{router, SavedTime, TimeParts, TimeStore};

fn temp_store(name: &str) -> TimeStore {
    let path = std::env::temp_dir().join(format!(
        "tile-slide-api-{}-{}.json",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    TimeStore::new(path)
}

fn entry(moves: u32) -> SavedTime {
    SavedTime {
        moves,
        time: TimeParts::from_millis(83_456),
        date: "2026-08-06T10:00:00.000Z".to_string(),
    }
}

async fn spawn_service(store: Arc<TimeStore>) -> std::net::SocketAddr {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_save_time_appends_records() {
    let store = Arc::new(temp_store("append"));
    let addr = spawn_service(Arc::clone(&store)).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/save-time", addr))
        .json(&entry(42))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    // The deployed route aliases the same handler
    let response = client
        .post(format!("http://{}/api/save-time", addr))
        .json(&entry(17))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let entries = store.load().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].moves, 42);
    assert_eq!(entries[1].moves, 17);
    assert_eq!(entries[0].time.total_millis(), 83_456);

    let _ = std::fs::remove_file(store.path());
}

#[tokio::test]
async fn test_non_post_methods_are_rejected() {
    let store = Arc::new(temp_store("method"));
    let addr = spawn_service(Arc::clone(&store)).await;

    let response = reqwest::Client::new()
        .get(format!("http://{}/save-time", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);

    // Nothing was stored
    assert!(store.load().await.unwrap().is_empty());
}
