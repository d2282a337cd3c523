// Portfolio server binary entry point
//
// Usage: cargo run --bin portfolio_server
// Environment: CONTENT_DIR, IMAGE_DIR, PORT, CONTENT_CACHE, RUST_LOG

use portfolio_site::config::{ServerConfig, SITE};
use portfolio_site::{create_router, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "portfolio_site=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting {}...", SITE.page_title);

    let config = ServerConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  CONTENT_DIR: {}", config.content_dir.display());
    tracing::info!("  IMAGE_DIR: {}", config.image_dir.display());
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  CONTENT_CACHE: {}", config.cache_enabled);

    let state = AppState::new(&config);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
