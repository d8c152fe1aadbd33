//! Pipeline loading.
//!
//! Builds one `LanguagePipeline` per configured language at startup: load
//! the lexicon pair, build the segmenter from it, skip excluded stages,
//! attach the rule-based semantic tagger with both lookup tables. Loading
//! is fail-fast: if any language cannot be built the whole load aborts and
//! the process must not become ready. There is no partial-availability
//! mode and no retry.

use std::collections::HashMap;

use tracing::info;

use crate::config::{Language, SemtagConfig, Stage};
use crate::errors::SemtagResult;
use crate::lexicon::LexiconManager;
use crate::pipeline::{LanguagePipeline, Lemmatizer, PosTagger, RuleBasedTagger, Segmenter};

/// Loads tagging pipelines from lexicon resources.
#[derive(Debug)]
pub struct PipelineLoader {
  lexicon_manager: LexiconManager,
}

impl PipelineLoader {
  /// Creates a loader using the configured lexicon cache directory.
  pub fn new(config: &SemtagConfig) -> SemtagResult<Self> {
    let cache_dir = config.lexicon_cache_dir().map(|p| p.to_path_buf());
    let lexicon_manager = LexiconManager::new(cache_dir)?;
    Ok(Self { lexicon_manager })
  }

  /// Returns the lexicon manager backing this loader.
  pub fn lexicon_manager(&self) -> &LexiconManager {
    &self.lexicon_manager
  }

  /// Builds the pipeline for one language.
  pub async fn load(&self, language: Language) -> SemtagResult<LanguagePipeline> {
    let pair = self.lexicon_manager.load(language).await?;

    let segmenter = Segmenter::for_language(language, &pair.lemma_lexicon_lookup);
    let lemmatizer = if language.excluded_stages().contains(&Stage::Lemmatizer) {
      None
    } else {
      Lemmatizer::for_language(language)
    };
    let pos_tagger = PosTagger::from_lexicon(&pair.lexicon_lookup);
    let usas_tagger = RuleBasedTagger::new(pair.lexicon_lookup, pair.lemma_lexicon_lookup);

    info!(
      language = %language,
      model_id = language.model_id(),
      known_words = pos_tagger.known_words(),
      lemmatizer = lemmatizer.is_some(),
      "pipeline loaded"
    );

    Ok(LanguagePipeline::new(
      language, segmenter, lemmatizer, pos_tagger, usas_tagger,
    ))
  }

  /// Builds one pipeline per language, keyed by language.
  ///
  /// The returned table's key set equals exactly the given language set;
  /// any failure aborts the whole load.
  pub async fn load_all(
    &self,
    languages: &[Language],
  ) -> SemtagResult<HashMap<Language, LanguagePipeline>> {
    let mut pipelines = HashMap::with_capacity(languages.len());

    for &language in languages {
      let pipeline = self.load(language).await?;
      pipelines.insert(language, pipeline);
    }

    Ok(pipelines)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
