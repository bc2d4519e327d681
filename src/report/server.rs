//! Server module - HTTP endpoint that persists completion records
//!
//! `POST /save-time` (and `/api/save-time`, the deployed route) appends
//! the submitted record to the JSON store and answers
//! `{"success": true}`. Storage failures are logged and answered with a
//! 500; other methods are rejected by the router.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::report::record::SavedTime;
use crate::report::store::TimeStore;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            data_path: PathBuf::from("time.json"),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let host = env::var("SLIDE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SLIDE_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);
        let data_path = env::var("SLIDE_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("time.json"));

        Self {
            host,
            port,
            data_path,
        }
    }
}

/// Build the record-service router over a shared store
pub fn router(store: Arc<TimeStore>) -> Router {
    Router::new()
        .route("/save-time", post(save_time))
        .route("/api/save-time", post(save_time))
        .with_state(store)
}

async fn save_time(
    State(store): State<Arc<TimeStore>>,
    Json(entry): Json<SavedTime>,
) -> (StatusCode, Json<Value>) {
    match store.append(entry).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))),
        Err(err) => {
            error!(%err, "failed to persist completion record");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Error saving time" })),
            )
        }
    }
}

/// Bind and serve the record service
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let store = Arc::new(TimeStore::new(config.data_path));
    let app = router(Arc::clone(&store));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;
    info!(
        addr = %listener.local_addr()?,
        store = %store.path().display(),
        "record service listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
