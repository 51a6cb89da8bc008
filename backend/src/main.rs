use anyhow::Context;
use earnings_calculator_backend::{
    config::ServerConfig, create_router, init_logging, initialize_backend,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging();

    let config = ServerConfig::from_env().context("Failed to load server configuration")?;

    let app_state = initialize_backend();
    let app = create_router(app_state, &config);

    info!("Starting server on {}", config.bind_addr);
    info!("Serving frontend from {}", config.static_dir.display());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
