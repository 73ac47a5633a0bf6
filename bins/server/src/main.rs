//! FinBot API Server
//!
//! Main entry point for the FinBot budget and advice service.

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finbot_advisor::GeminiAdvisor;
use finbot_api::{AppState, create_router};
use finbot_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finbot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    let advisor = GeminiAdvisor::from_config(&config.advisor)?;
    if advisor.has_api_key() {
        info!(model = %config.advisor.model, "Advisor configured");
    } else {
        warn!("No API key configured; advice requests will explain how to set one");
    }

    let app = create_router(AppState::new(advisor));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
