//! HTTP handler definitions

use axum::{
  Json,
  extract::{Query, State},
};
use tracing::{debug, error, info};

use semtag::Language;

use crate::errors::ApiError;
use crate::models::{TagParams, TokenDto};

use super::state::AppState;

/// `GET /` endpoint
///
/// Tokenises, lemmatises (for all languages but chinese), POS tags, and
/// semantic tags the text, returning an array of tokens. `lang` selects
/// the pipeline that is used.
///
/// # Query Parameters
/// - `lang`: language of the text (required)
/// - `text`: text to be tagged (required, may be empty)
///
/// # Response
/// - 200 OK: JSON array of tokens `{text, lemma, pos, usas_tags}`
/// - 422 Unprocessable Entity: `lang`/`text` missing or `lang` unknown
/// - 500 Internal Server Error: internal error
pub async fn get_tag(
  State(state): State<AppState>,
  Query(params): Query<TagParams>,
) -> Result<Json<Vec<TokenDto>>, ApiError> {
  let lang = params
    .lang
    .ok_or_else(|| ApiError::validation("lang", "query parameter is required"))?;
  let language: Language =
    lang.parse().map_err(|reason: String| ApiError::validation("lang", reason))?;
  let text = params
    .text
    .ok_or_else(|| ApiError::validation("text", "query parameter is required"))?;

  debug!(language = %language, text_len = text.len(), "tagging request received");

  // Tagging is CPU bound; run it off the async runtime
  let service = state.service.clone();

  let tokens =
    tokio::task::spawn_blocking(move || service.tag(language, &text)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking error");
      ApiError::internal("failed to execute tagging")
    })??;

  info!(language = %language, token_count = tokens.len(), "tagging completed");

  Ok(Json(tokens))
}

/// `GET /supported-languages` endpoint
///
/// Outputs all languages the tagger supports. Takes no parameters and is
/// deterministic.
pub async fn get_supported_languages(State(state): State<AppState>) -> Json<Vec<Language>> {
  Json(state.service.supported_languages())
}
