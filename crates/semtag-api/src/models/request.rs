//! Request model definitions

use serde::Deserialize;

/// Query parameters of `GET /`.
///
/// Both fields deserialize as optional so that missing parameters reach the
/// handler's own validation (which answers 422 naming the field) instead of
/// being rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct TagParams {
  /// Language of the text
  pub lang: Option<String>,
  /// Text to be tagged
  pub text: Option<String>,
}
