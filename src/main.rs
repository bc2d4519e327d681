//! Record service runner (default binary).
//!
//! Serves the completion-record endpoint the puzzle front end posts to.
//! Configuration comes from `SLIDE_HOST`, `SLIDE_PORT` and
//! `SLIDE_DATA_PATH`.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tile_slide::report::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run_server(ServerConfig::from_env()).await
}
