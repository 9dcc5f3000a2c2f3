//! EduTrack portal web server entry point.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use edutrack::utils::shutdown_signal;
use edutrack::web::{self, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Fixed port, no flags, no overrides
    let addr = SocketAddr::from(([0, 0, 0, 0], web::PORT));
    let listener = TcpListener::bind(addr).await?;
    info!("Server running at http://localhost:{}", web::PORT);

    let router = create_router();

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
