use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tuition_ledger_backend::{config::AppConfig, create_router, initialize_backend};

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let app_state = initialize_backend(&config).await?;
    let app = create_router(app_state, config.cors_origin.as_deref())?;

    info!("Starting server on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
