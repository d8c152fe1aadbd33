// crates/semtag/src/service.rs

//! SemtagService: the integrated facade of the semtag crate.
//!
//! - Lexicon management (LexiconManager)
//! - Pipeline loading (PipelineLoader) - per language
//! - Tagging (LanguagePipeline) - per language
//!
//! Callers (the HTTP API, embedders) only need this struct. The service is
//! constructed once at startup, before any request is accepted, and is
//! immutable afterwards: the pipeline table has no write path, so no
//! locking is needed on the read side, and pipelines accept concurrent
//! `process` calls.

use std::collections::HashMap;

use crate::config::{Language, SemtagConfig};
use crate::errors::{SemtagError, SemtagResult};
use crate::loader::PipelineLoader;
use crate::models::AnalyzedToken;
use crate::pipeline::LanguagePipeline;

/// The integrated facade of the semtag crate.
///
/// Owns one loaded pipeline per configured language.
#[derive(Debug)]
pub struct SemtagService {
  /// Pipelines keyed by language
  pipelines: HashMap<Language, LanguagePipeline>,
}

impl SemtagService {
  /// Initialisation (config validation + eager load of every pipeline).
  ///
  /// # Flow
  /// 1. Validate the configuration
  /// 2. Build the loader over the lexicon cache
  /// 3. Load one pipeline per configured language, fail-fast
  ///
  /// # Errors
  /// - Invalid configuration (empty language list, duplicates, bad cache
  ///   dir)
  /// - Lexicon fetch or parse failure for any language
  pub async fn init(config: &SemtagConfig) -> SemtagResult<Self> {
    config.validate()?;

    let loader = PipelineLoader::new(config)?;
    let pipelines = loader.load_all(config.languages()).await?;

    Ok(Self { pipelines })
  }

  /// Tags a text in the given language.
  ///
  /// Empty text yields an empty token sequence. Read-only: shared pipeline
  /// state is never mutated.
  ///
  /// # Errors
  /// - `UnsupportedLanguage` when no pipeline was loaded for `language`
  pub fn tag(&self, language: Language, text: &str) -> SemtagResult<Vec<AnalyzedToken>> {
    let pipeline = self
      .pipelines
      .get(&language)
      .ok_or(SemtagError::UnsupportedLanguage { language })?;
    Ok(pipeline.process(text))
  }

  // ===== Accessors =====

  /// Returns the loaded languages, in declaration order.
  pub fn supported_languages(&self) -> Vec<Language> {
    Language::ALL.into_iter().filter(|l| self.pipelines.contains_key(l)).collect()
  }

  /// Whether a pipeline is loaded for the given language.
  pub fn is_language_supported(&self, language: Language) -> bool {
    self.pipelines.contains_key(&language)
  }

  /// Returns the pipeline for a language, if loaded.
  pub fn pipeline(&self, language: Language) -> Option<&LanguagePipeline> {
    self.pipelines.get(&language)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
