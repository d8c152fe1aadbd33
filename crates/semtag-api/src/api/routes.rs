//! Router definitions

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::handlers::{get_supported_languages, get_tag};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router
///
/// # Arguments
/// * `state` - Application state
///
/// # Returns
/// The configured Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(get_tag))
    .route("/supported-languages", get(get_supported_languages))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Starts the server
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns an error if the server fails to start
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = &state.config.bind_addr;
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  tracing::info!("server listening on http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  Ok(())
}
