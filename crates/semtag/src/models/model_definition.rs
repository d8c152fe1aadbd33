//! Data Model Definition

use serde::Serialize;

use crate::tagset::Upos;

/// One tagged token of an analysed text.
///
/// Produced fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedToken {
  /// Surface form (the string as it appears in the input text)
  pub text: String,
  /// Lemma; `None` when the pipeline has no lemmatiser stage or reported
  /// an empty lemma. Never `Some("")`.
  pub lemma: Option<String>,
  /// Universal POS tag
  pub pos: Upos,
  /// USAS tags in rank order, the most likely tag first. Never empty.
  pub usas_tags: Vec<String>,
}
