//! Discovery Intake server binary.
//!
//! Wires configuration, the interview engine, the generative text adapter,
//! and the HTTP boundary together. Starts with zero environment variables:
//! without an API key the acknowledgment path degrades to the deterministic
//! fallback and the interview runs unaffected.

use std::sync::Arc;
use std::time::Duration;

use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use discovery_intake::adapters::http::interview::{routes, InterviewAppState};
use discovery_intake::adapters::{AnthropicConfig, AnthropicGenerator, DisabledGenerator};
use discovery_intake::config::AppConfig;
use discovery_intake::domain::interview::InterviewEngine;
use discovery_intake::ports::TextGenerator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    config.validate()?;

    let engine = Arc::new(InterviewEngine::new(
        config.interview.signal_bank(),
        config.interview.engine_config(),
    ));
    if engine.bank().is_empty() {
        warn!("running with an empty signal bank; every answer will be a probe candidate");
    }

    let generator: Arc<dyn TextGenerator> = if config.generative.is_configured() {
        let key = config
            .generative
            .anthropic_api_key
            .clone()
            .unwrap_or_default();
        Arc::new(AnthropicGenerator::new(
            AnthropicConfig::new(key)
                .with_model(config.generative.model.clone())
                .with_base_url(config.generative.base_url.clone())
                .with_timeout(config.generative.ack_timeout()),
        ))
    } else {
        warn!("no generative service configured; acknowledgments will use the fallback table");
        Arc::new(DisabledGenerator::new())
    };

    let app_state = InterviewAppState::new(
        engine,
        generator,
        config.interview.industry_hints(),
        config.generative.ack_timeout(),
    );

    let cors = if config.is_production() {
        let origins: Vec<_> = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|o| o.parse::<http::HeaderValue>().ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    } else {
        CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any)
    };

    let app = routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(cors),
        )
        .with_state(app_state);

    let addr = config.server.socket_addr();
    info!(%addr, "discovery-intake listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
