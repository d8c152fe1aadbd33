//! Response model definitions

use serde::{Deserialize, Serialize};

use semtag::AnalyzedToken;

/// Token information (DTO)
///
/// One element of the `GET /` response array. Converted from the semtag
/// crate's token record. `lemma` is always present on the wire and is
/// `null` for tokens without a lemma; it is never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDto {
  /// Token text (string appearing in the original input)
  pub text: String,
  /// Lemma of the token, `null` when the pipeline reports none
  pub lemma: Option<String>,
  /// Universal POS tag of the token
  pub pos: String,
  /// USAS tags in rank order, the most likely tag first
  pub usas_tags: Vec<String>,
}

impl From<AnalyzedToken> for TokenDto {
  fn from(token: AnalyzedToken) -> Self {
    Self {
      text: token.text,
      lemma: token.lemma,
      pos: token.pos.as_str().to_string(),
      usas_tags: token.usas_tags,
    }
  }
}
