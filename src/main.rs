//! Phone Validator API - Main entry point
//!
//! Starts the HTTP server that validates phone numbers and normalizes them
//! to E.164.

use anyhow::Result;
use phone_validator_api::{Config, LibPhoneNumberPlan, PhoneNumberService, PhoneValidator};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can drive the default filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let service =
        Arc::new(PhoneValidator::new(LibPhoneNumberPlan::new())) as Arc<dyn PhoneNumberService>;

    info!(
        "Starting Phone Validator API on {} (request timeout: {}s)",
        config.bind_addr(),
        config.request_timeout
    );

    phone_validator_api::server::run_server(service, &config).await?;

    info!("Phone Validator API shutdown complete");
    Ok(())
}
