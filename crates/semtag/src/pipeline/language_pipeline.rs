//! One language's assembled tagging pipeline.

use tracing::debug;

use crate::config::Language;
use crate::models::AnalyzedToken;
use crate::pipeline::lemmatizer::Lemmatizer;
use crate::pipeline::pos_tagger::PosTagger;
use crate::pipeline::segmenter::Segmenter;
use crate::pipeline::usas_tagger::RuleBasedTagger;

/// A fully assembled pipeline for one language.
///
/// Stages run in order: segmentation, lemmatisation (where the language has
/// that stage), POS tagging, semantic tagging. The pipeline is immutable
/// after construction and every stage takes `&self`, so one instance can
/// serve concurrent requests without locking.
#[derive(Debug)]
pub struct LanguagePipeline {
  language: Language,
  segmenter: Segmenter,
  lemmatizer: Option<Lemmatizer>,
  pos_tagger: PosTagger,
  usas_tagger: RuleBasedTagger,
}

impl LanguagePipeline {
  /// Assembles a pipeline from its stages. Pass `None` for `lemmatizer`
  /// when the language's model excludes that stage.
  pub fn new(
    language: Language,
    segmenter: Segmenter,
    lemmatizer: Option<Lemmatizer>,
    pos_tagger: PosTagger,
    usas_tagger: RuleBasedTagger,
  ) -> Self {
    Self {
      language,
      segmenter,
      lemmatizer,
      pos_tagger,
      usas_tagger,
    }
  }

  /// Returns the language this pipeline serves.
  pub fn language(&self) -> Language {
    self.language
  }

  /// Whether this pipeline carries a lemmatiser stage.
  pub fn has_lemmatizer(&self) -> bool {
    self.lemmatizer.is_some()
  }

  /// Runs the full pipeline over a text.
  ///
  /// Empty input produces an empty token sequence. Tokens come back in
  /// text order; each carries its surface form, optional lemma, UPOS tag,
  /// and ranked USAS tags.
  pub fn process(&self, text: &str) -> Vec<AnalyzedToken> {
    debug!(language = %self.language, text_len = text.len(), "tagging text");

    let surfaces = self.segmenter.segment(text);
    let mut tokens = Vec::with_capacity(surfaces.len());

    for surface in surfaces {
      let lemma = self.lemmatizer.as_ref().and_then(|l| l.lemma(&surface));
      let pos = self.pos_tagger.tag(&surface, lemma.as_deref());
      let usas_tags = self.usas_tagger.tag_token(&surface, lemma.as_deref(), pos);

      tokens.push(AnalyzedToken {
        text: surface,
        lemma,
        pos,
        usas_tags,
      });
    }

    debug!(
      language = %self.language,
      token_count = tokens.len(),
      "tagging completed"
    );

    tokens
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lexicon::LexiconCollection;
  use crate::tagset::Upos;

  const FRENCH_TSV: &str = "lemma\tpos\tsemantic_tags\n\
    bonjour\tintj\tZ4\n\
    aller\tverb\tM1 A1.1.1\n";

  /// Assembles a small French pipeline from an in-memory lexicon.
  fn french_pipeline() -> LanguagePipeline {
    let lexicon_lookup = LexiconCollection::from_tsv(FRENCH_TSV, true).unwrap();
    let lemma_lexicon_lookup = LexiconCollection::from_tsv(FRENCH_TSV, false).unwrap();

    LanguagePipeline::new(
      Language::French,
      Segmenter::for_language(Language::French, &lemma_lexicon_lookup),
      Lemmatizer::for_language(Language::French),
      PosTagger::from_lexicon(&lexicon_lookup),
      RuleBasedTagger::new(lexicon_lookup, lemma_lexicon_lookup),
    )
  }

  /// Assembles a small Chinese pipeline (no lemmatiser stage).
  fn chinese_pipeline() -> LanguagePipeline {
    let tsv = "lemma\tpos\tsemantic_tags\n你好\tintj\tZ4\n世界\tnoun\tW1\n";
    let lexicon_lookup = LexiconCollection::from_tsv(tsv, true).unwrap();
    let lemma_lexicon_lookup = LexiconCollection::from_tsv(tsv, false).unwrap();

    LanguagePipeline::new(
      Language::Chinese,
      Segmenter::for_language(Language::Chinese, &lemma_lexicon_lookup),
      Lemmatizer::for_language(Language::Chinese),
      PosTagger::from_lexicon(&lexicon_lookup),
      RuleBasedTagger::new(lexicon_lookup, lemma_lexicon_lookup),
    )
  }

  #[test]
  fn processes_the_expected_token_count() {
    let tokens = french_pipeline().process("bonjour ca va");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].text, "bonjour");
  }

  #[test]
  fn empty_text_yields_no_tokens() {
    assert!(french_pipeline().process("").is_empty());
  }

  #[test]
  fn lexicon_hits_carry_ranked_tags() {
    let tokens = french_pipeline().process("bonjour");
    assert_eq!(tokens[0].pos, Upos::Intj);
    assert_eq!(tokens[0].usas_tags, ["Z4"]);
  }

  #[test]
  fn lemma_is_present_and_nonempty_for_french() {
    let tokens = french_pipeline().process("bonjour ca va");
    for token in &tokens {
      let lemma = token.lemma.as_deref().expect("french tokens carry a lemma");
      assert!(!lemma.is_empty());
    }
  }

  #[test]
  fn chinese_tokens_have_no_lemma() {
    let pipeline = chinese_pipeline();
    assert!(!pipeline.has_lemmatizer());

    let tokens = pipeline.process("你好世界");
    assert_eq!(tokens.len(), 2);
    for token in &tokens {
      assert!(token.lemma.is_none());
    }
  }

  #[test]
  fn unknown_tokens_default_to_z99() {
    let tokens = french_pipeline().process("zzyzx");
    assert_eq!(tokens[0].usas_tags, ["Z99"]);
  }

  #[test]
  fn processing_is_idempotent() {
    let pipeline = french_pipeline();
    let first = pipeline.process("bonjour ca va");
    let second = pipeline.process("bonjour ca va");
    assert_eq!(first, second);
  }
}
