mod admin;
mod config;
mod errors;
mod flows;
mod forms;
mod llm_client;
mod models;
mod pages;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{LlmClient, ModelRunner, UnconfiguredRunner};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting {} v{}", config.site_name, env!("CARGO_PKG_VERSION"));

    let runner: Arc<dyn ModelRunner> = match config.anthropic_api_key.clone() {
        Some(key) => {
            let llm = LlmClient::new(key, &config)?;
            info!("LLM client initialized (model: {})", llm.model());
            Arc::new(llm)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; advisory flows are disabled");
            Arc::new(UnconfiguredRunner)
        }
    };

    let state = AppState::new(config.clone(), runner);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
