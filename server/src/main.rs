#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let leptos_options = match get_configuration(None) {
        Ok(conf) => conf.leptos_options,
        Err(e) => {
            tracing::error!(error = %e, "leptos configuration missing");
            std::process::exit(1);
        }
    };

    // Non-fatal: without a relay the page still renders and /api/contact answers 503.
    let relay = match services::relay::build_relay(&config.relay) {
        Ok(Some(relay)) => {
            tracing::info!(relay = relay.name(), "contact relay initialized");
            Some(relay)
        }
        Ok(None) => {
            tracing::warn!("contact relay disabled");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "contact relay unavailable");
            None
        }
    };

    let state = state::AppState::new(relay, leptos_options);
    let app = routes::app(state);

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, port = config.port, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(port = config.port, "portfolio listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
