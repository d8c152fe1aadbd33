//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::SemtagApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Tagging service
  ///
  /// - Production: `Arc::new(SemtagApiServiceFull::init(&config).await?)`
  /// - Test: `Arc::new(StubSemtagApiService)`
  pub service: Arc<dyn SemtagApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn SemtagApiService>) -> Self {
    Self { config, service }
  }
}
