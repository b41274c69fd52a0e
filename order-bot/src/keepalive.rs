//! Keep-alive HTTP endpoint: `GET /` answers with a fixed liveness text so an external
//! uptime monitor can keep the host awake.

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tracing::info;

/// Body of the liveness response.
pub const LIVENESS_TEXT: &str = "Bot is running!";

async fn liveness() -> &'static str {
    LIVENESS_TEXT
}

/// Routes of the keep-alive server.
pub fn app() -> Router {
    Router::new().route("/", get(liveness))
}

/// Binds `0.0.0.0:<port>` and serves until the process exits.
pub async fn serve(port: u16) -> anyhow::Result<()> {
    let bind_address = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Keep-alive server listening");
    axum::serve(listener, app()).await?;
    Ok(())
}
