use anyhow::{Context, Result};
use express_localization::config::Config;
use express_localization::server::{build_router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("express_localization=info".parse()?),
        )
        .init();

    info!("Starting localization sample server");

    // Load configuration from environment
    let config = Config::from_env()?;
    let options = &config.localization;
    info!(
        "Localization: {} cultures, default '{}', resources in '{}'",
        options.supported().len(),
        options.default_culture(),
        options.resources_path()
    );
    if !options.use_all_providers() {
        info!("Only the route segment culture provider is enabled");
    }

    let app = build_router(AppState::new(config.localization.clone()));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    info!("Listening on port {}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
