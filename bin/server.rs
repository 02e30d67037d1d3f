// Card Collector - Web Server entry point

use anyhow::{Context, Result};
use card_collector::server::{router, AppState};
use card_collector::{AppConfig, ServerSettings, VERSION};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "card_collector=info,card_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let settings = ServerSettings::from_env()?;

    tracing::info!(
        version = VERSION,
        api_base_url = %config.api_base_url,
        categories = config.categories.count(),
        conditions = config.conditions.count(),
        "configuration loaded"
    );

    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", settings.bind_addr))?;

    tracing::info!(addr = %settings.bind_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }
}
