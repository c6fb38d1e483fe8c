//! parentdesk-web - Parent portal frontend using Leptos + Axum

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;
#[cfg(feature = "ssr")]
pub mod shell;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
use anyhow::{Context, Result};
#[cfg(feature = "ssr")]
use std::net::SocketAddr;
#[cfg(feature = "ssr")]
use tokio::net::TcpListener;
#[cfg(feature = "ssr")]
use tracing::info;

/// Run the web server until Ctrl-C
#[cfg(feature = "ssr")]
pub async fn run(addr: SocketAddr) -> Result<()> {
    let router = create_router(parentdesk_types::NavMenu::parent());

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Web server listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .context("Web server terminated unexpectedly")?;

    Ok(())
}
