//! semtag-api server entry point

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use semtag_api::ApiError;
use semtag_api::api::AppState;
use semtag_api::api::run_server;
use semtag_api::config::Cli;
use semtag_api::service::SemtagApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Parse command-line arguments
  let config = Cli::parse().into_config();

  // Initialise logging with the requested filter
  let filter = EnvFilter::try_new(&config.log_level)
    .map_err(|e| ApiError::config(format!("invalid log level `{}`: {}", config.log_level, e)))?;
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();
  tracing::info!(bind_addr = %config.bind_addr, "configuration loaded");

  // Initialise the service: every pipeline is loaded before the listener
  // binds, so a failed lexicon load keeps the process from becoming ready
  let service = Arc::new(SemtagApiServiceFull::init(&config).await?);
  tracing::info!("tagging pipelines initialised");

  // Create the application state
  let state = AppState::new(config, service);

  // Start the server
  run_server(state).await
}
