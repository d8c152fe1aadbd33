//! Lemmatisation stage.
//!
//! Rule-based Snowball stemming approximates the lemma for the European
//! languages. Chinese has no lemmatiser stage at all; its tokens carry no
//! lemma, which callers must represent as an absent value rather than an
//! empty string.

use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};

use crate::config::Language;

/// Per-language lemmatiser.
#[derive(Clone)]
pub struct Lemmatizer {
  language: Language,
  algorithm: Algorithm,
}

impl Lemmatizer {
  /// Builds the lemmatiser for a language, or `None` when the language has
  /// no lemmatisation support (Chinese).
  pub fn for_language(language: Language) -> Option<Self> {
    let algorithm = match language {
      Language::Dutch => Algorithm::Dutch,
      Language::French => Algorithm::French,
      Language::Italian => Algorithm::Italian,
      Language::Portuguese => Algorithm::Portuguese,
      Language::Spanish => Algorithm::Spanish,
      Language::Chinese => return None,
    };
    Some(Self {
      language,
      algorithm,
    })
  }

  /// Returns the language this lemmatiser was built for.
  pub fn language(&self) -> Language {
    self.language
  }

  /// Returns the lemma of a surface form.
  ///
  /// Lemmas are lower-cased. An empty result collapses to `None` so the
  /// empty string never escapes this stage.
  pub fn lemma(&self, surface: &str) -> Option<String> {
    let stemmer = Stemmer::create(self.algorithm);
    let lemma = stemmer.stem(&surface.to_lowercase()).into_owned();
    if lemma.is_empty() { None } else { Some(lemma) }
  }
}

/// Manual `Debug` implementation: the algorithm is determined by the
/// language, so only the language is shown.
impl fmt::Debug for Lemmatizer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Lemmatizer").field("language", &self.language).finish()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_european_language_has_a_lemmatizer() {
    for language in [
      Language::Dutch,
      Language::French,
      Language::Italian,
      Language::Portuguese,
      Language::Spanish,
    ] {
      let lemmatizer = Lemmatizer::for_language(language);
      assert!(lemmatizer.is_some(), "{language} should have a lemmatizer");
      assert_eq!(lemmatizer.unwrap().language(), language);
    }
  }

  #[test]
  fn chinese_has_no_lemmatizer() {
    assert!(Lemmatizer::for_language(Language::Chinese).is_none());
  }

  #[test]
  fn lemma_is_lower_cased() {
    let lemmatizer = Lemmatizer::for_language(Language::French).unwrap();
    let lemma = lemmatizer.lemma("Bonjour").unwrap();
    assert_eq!(lemma, lemma.to_lowercase());
  }

  #[test]
  fn lemma_is_never_empty_for_nonempty_input() {
    let lemmatizer = Lemmatizer::for_language(Language::Spanish).unwrap();
    for surface in ["casa", "casas", "X", ",", "42"] {
      let lemma = lemmatizer.lemma(surface);
      assert!(lemma.is_some(), "lemma of {surface:?} should not be empty");
      assert!(!lemma.unwrap().is_empty());
    }
  }

  #[test]
  fn inflected_forms_reduce_to_a_common_stem() {
    let lemmatizer = Lemmatizer::for_language(Language::Italian).unwrap();
    assert_eq!(lemmatizer.lemma("libro"), lemmatizer.lemma("libri"));
  }
}
