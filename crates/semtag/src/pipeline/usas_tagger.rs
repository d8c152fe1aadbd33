//! Rule-based USAS semantic tagging stage.
//!
//! Single-word tagging against the two lexicon tables injected at load
//! time. Lookup order, per token:
//!
//! 1. POS-qualified lookups, once per core POS the token's UPOS tag maps
//!    onto: surface, lemma, lower-cased surface, lower-cased lemma.
//! 2. Punctuation tokens that matched nothing tag as `PUNCT`.
//! 3. Lemma-only fallback lookups in the same candidate order.
//! 4. Everything else tags as `Z99` (unmatched).
//!
//! The tags of a match are returned in the lexicon's rank order, most
//! likely first, without re-sorting.

use crate::lexicon::LexiconCollection;
use crate::tagset::Upos;

/// Tag assigned to punctuation tokens absent from the lexicon.
pub const PUNCTUATION_TAG: &str = "PUNCT";

/// Tag assigned when no lexicon rule matched.
pub const UNMATCHED_TAG: &str = "Z99";

/// Rule-based single-word semantic tagger.
#[derive(Debug, Clone)]
pub struct RuleBasedTagger {
  /// POS-qualified lookup table
  lexicon_lookup: LexiconCollection,
  /// Lemma-only fallback table
  lemma_lexicon_lookup: LexiconCollection,
}

impl RuleBasedTagger {
  /// Creates the tagger from its two lookup tables.
  pub fn new(lexicon_lookup: LexiconCollection, lemma_lexicon_lookup: LexiconCollection) -> Self {
    Self {
      lexicon_lookup,
      lemma_lexicon_lookup,
    }
  }

  /// Tags a single token, returning its USAS tags in rank order.
  ///
  /// Never returns an empty list.
  pub fn tag_token(&self, text: &str, lemma: Option<&str>, pos: Upos) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let lemma_lower = lemma.map(str::to_lowercase);

    let candidates =
      [Some(text), lemma, Some(text_lower.as_str()), lemma_lower.as_deref()];

    for &core_pos in pos.usas_core() {
      for candidate in candidates.iter().flatten() {
        if let Some(tags) = self.lexicon_lookup.lookup(candidate, Some(core_pos)) {
          return tags.to_vec();
        }
      }
    }

    if pos == Upos::Punct {
      return vec![PUNCTUATION_TAG.to_string()];
    }

    for candidate in candidates.iter().flatten() {
      if let Some(tags) = self.lemma_lexicon_lookup.lookup(candidate, None) {
        return tags.to_vec();
      }
    }

    vec![UNMATCHED_TAG.to_string()]
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
