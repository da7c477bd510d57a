use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use counsel_booking::config::AppConfig;
use counsel_booking::handlers;
use counsel_booking::services::BookingController;
use counsel_booking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let catalog = config.load_catalog()?;
    match &config.counselors_path {
        Some(path) => tracing::info!(
            "loaded {} counselors from {path}",
            catalog.counselors().len()
        ),
        None => tracing::info!("using built-in counselor catalog"),
    }

    let state = Arc::new(AppState {
        config: config.clone(),
        controller: BookingController::new(Arc::new(catalog)),
    });

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
