use tracing_subscriber::EnvFilter;

use vigie_api::build_router;
use vigie_api::config::{LogFormat, ServiceConfig};
use vigie_api::state::AppState;
use vigie_engine::Engine;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServiceConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let engine = Engine::new();
    tracing::info!(
        bind_addr = %config.bind_addr,
        rules = engine.rules().len(),
        reference_date = ?config.reference_date,
        "starting vigie-api"
    );

    let app = build_router(AppState::new(engine, config.reference_date));
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
