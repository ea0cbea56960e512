//! HTTP file server for playlists and mp3 files.
//!
//! Any file readable by the process can be requested; there is no path
//! sanitisation or authentication. Only run this on trusted networks.

pub mod handler;

use axum::Router;
use tracing::info;

use crate::config::Config;
use crate::error::Result;

pub use handler::{file_from_target, handle_request, FILE_PARAM};

/// Build the router. Every path is handled by [`handle_request`].
pub fn router() -> Router {
    Router::new().fallback(handle_request)
}

/// Bind the configured address and serve until the process exits.
///
/// Each connection is driven by its own task on the tokio runtime, so a slow
/// file read does not hold up other requests.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Serving files on http://{}", listener.local_addr()?);
    info!("Request files with GET /?{}=/path/to/file", FILE_PARAM);

    axum::serve(listener, router()).await?;

    Ok(())
}
