mod config;
mod errors;
mod keywords;
mod llm_client;
mod profile;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::keywords::dataforseo::DataForSeoClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
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

    info!("Starting Keyword Report API v{}", env!("CARGO_PKG_VERSION"));

    // Keyword data provider
    let keyword_source = DataForSeoClient::new(
        config.dataforseo_login.clone(),
        config.dataforseo_password.clone(),
    )?;
    info!("DataForSEO client initialized");

    // LLM client for profile extraction
    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let engine = config.engine_config();
    info!(
        "Engine config: city cap {}, target {}, seed cap {}, {} blocked brands",
        engine.city_cap,
        engine.target_count,
        engine.seed_cap,
        engine.brand_blocklist.len()
    );

    let state = AppState {
        llm,
        keyword_source: Arc::new(keyword_source),
        engine: Arc::new(engine),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
