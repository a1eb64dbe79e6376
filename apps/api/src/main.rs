mod config;
mod enhance;
mod errors;
mod export;
mod layout;
mod llm_client;
mod models;
mod render;
mod resume;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::enhance::{LlmEnhancer, TextEnhancer, UnavailableEnhancer};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on invalid env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumify API v{}", env!("CARGO_PKG_VERSION"));

    // Enhancement backend: the LLM when a key is configured, otherwise refuse politely
    let enhancer: Arc<dyn TextEnhancer> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmEnhancer(llm))
        }
        None => {
            warn!("ANTHROPIC_API_KEY is not set; AI enhancement is unavailable");
            Arc::new(UnavailableEnhancer)
        }
    };

    let state = AppState::new(config.clone(), enhancer);
    info!(
        "Layout page: {:.2}x{:.2}pt, margin {:.2}pt, defaults {}/{}",
        state.page_config.page_width_pt,
        state.page_config.page_height_pt,
        state.page_config.margin_pt,
        config.default_language.code(),
        config.default_template.as_str()
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the editor front-end has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
