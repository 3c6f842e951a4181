//! HTTP surface

mod router;
mod state;

pub use router::{build_router, LanguageEntry, LanguagesResponse, TextRequest};
pub use state::AppState;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::error::ServerError;

/// Bind `addr` and serve requests until the process is stopped
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| ServerError::BindError(addr.to_string()))?;
    let local = listener.local_addr().context("listener has no local address")?;
    log::info!("{} listening on http://{local}", state.service_name());

    axum::serve(listener, build_router(state))
        .await
        .context("HTTP server terminated")?;
    Ok(())
}
