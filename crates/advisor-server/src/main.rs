//! Investment Advisor HTTP Server
//!
//! Axum-based server exposing the plan generation API: allocation lookup,
//! dollar breakdown, and LLM-generated explanations.

mod handlers;
mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_core::{GenerationOptions, LlmProvider};
use advisor_runtime::{OpenAiConfig, OpenAiProvider};
use portfolio_advisor::Explainer;

use crate::handlers::{generate_plan, health_check, list_portfolios};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Missing credentials halt startup before the listener binds
    let config = OpenAiConfig::from_env()
        .context("cannot start without LLM credentials")?;
    let model = config.model().to_string();

    let provider = Arc::new(OpenAiProvider::from_config(config)?);

    match provider.health_check().await {
        Ok(true) => tracing::info!("✓ Connected to OpenAI (model: {})", model),
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ OpenAI not reachable - explanations will degrade");
            tracing::warn!("  Plans will still render with an error message in place of advice");
        }
    }

    let explainer = Arc::new(Explainer::new(
        provider.clone(),
        GenerationOptions {
            model,
            ..Default::default()
        },
    ));

    // Build application state
    let state = AppState {
        provider,
        explainer,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/portfolios", get(list_portfolios))
        .route("/api/plan", post(generate_plan))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 advisor-server running on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health          - Health check");
    tracing::info!("  GET  /api/portfolios  - Allocation table by risk tier");
    tracing::info!("  POST /api/plan        - Generate an investment plan");

    axum::serve(listener, app).await?;

    Ok(())
}
