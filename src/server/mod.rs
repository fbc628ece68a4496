//! HTTP server for the Phone Validator API.
//!
//! This module assembles the axum router, applies the middleware stack and
//! runs the server until a shutdown signal arrives.

pub mod handlers;
pub mod middleware;
pub mod responses;

pub use handlers::AppState;

use crate::config::Config;
use crate::services::PhoneNumberService;
use anyhow::Result;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Path shared by the query-parameter and JSON-body endpoints.
pub const PHONE_NUMBERS_PATH: &str = "/v1/phone-numbers";

/// Assembles the axum router with all routes and middleware.
///
/// Routes:
/// - `GET /v1/phone-numbers` -- validate from query parameters
/// - `POST /v1/phone-numbers` -- validate from a JSON body
/// - `GET /health` -- liveness probe
pub fn build_router(service: Arc<dyn PhoneNumberService>, config: &Config) -> Router {
    let state = AppState { service };

    let router = Router::new()
        .route(
            PHONE_NUMBERS_PATH,
            get(handlers::get_phone_number).post(handlers::create_phone_number),
        )
        .route("/health", get(handlers::health_handler));

    middleware::apply_http_layers(router, config).with_state(state)
}

/// Run the HTTP server until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server hits a
/// fatal I/O error.
pub async fn run_server(service: Arc<dyn PhoneNumberService>, config: &Config) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);

    let router = build_router(service, config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C or (on Unix) SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
