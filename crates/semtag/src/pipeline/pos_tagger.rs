//! POS tagging stage.
//!
//! A unigram tagger built from the language's own POS-qualified lexicon:
//! each word form is assigned the highest-priority core POS category the
//! lexicon lists for it. Punctuation and numbers are classified by shape
//! first; word forms the lexicon has never seen tag as `X`.

use std::collections::HashMap;

use crate::lexicon::LexiconCollection;
use crate::tagset::Upos;

/// Deterministic tie-break order when a word form carries several core POS
/// categories in the lexicon. Content-word categories come first.
const CORE_POS_PRIORITY: &[&str] = &[
  "noun", "verb", "adj", "adv", "pnoun", "prep", "pron", "det", "art", "conj", "num", "intj",
  "part", "code", "punc", "fw", "xx",
];

/// Unigram lexicon-vote POS tagger.
#[derive(Debug, Clone)]
pub struct PosTagger {
  by_word: HashMap<String, Upos>,
}

impl PosTagger {
  /// Builds the tagger from a POS-qualified lexicon table.
  ///
  /// Core POS categories outside the known tagset are skipped; a word whose
  /// categories are all unknown gets no entry and will tag as `X`.
  pub fn from_lexicon(lexicon: &LexiconCollection) -> Self {
    let mut candidates: HashMap<String, Vec<&str>> = HashMap::new();

    for (key, _tags) in lexicon.iter() {
      // POS-qualified keys are "{word}|{pos}"
      let Some((word, pos)) = key.rsplit_once('|') else {
        continue;
      };
      let entry = candidates.entry(word.to_string()).or_default();
      if !entry.contains(&pos) {
        entry.push(pos);
      }
    }

    let mut by_word = HashMap::with_capacity(candidates.len());
    for (word, poses) in candidates {
      let best = poses
        .iter()
        .filter_map(|pos| CORE_POS_PRIORITY.iter().position(|p| p == pos))
        .min()
        .map(|idx| CORE_POS_PRIORITY[idx]);
      if let Some(core) = best
        && let Some(upos) = Upos::from_core_pos(core)
      {
        by_word.insert(word, upos);
      }
    }

    Self { by_word }
  }

  /// Number of word forms with a known POS.
  pub fn known_words(&self) -> usize {
    self.by_word.len()
  }

  /// Tags one token.
  ///
  /// Shape heuristics run first (punctuation, numbers), then the surface
  /// form, its lower-cased variant, and the lemma are tried against the
  /// lexicon vote. Unknown word forms tag as `X`.
  pub fn tag(&self, surface: &str, lemma: Option<&str>) -> Upos {
    if is_punctuation(surface) {
      return Upos::Punct;
    }
    if is_numeric(surface) {
      return Upos::Num;
    }

    self
      .by_word
      .get(surface)
      .or_else(|| self.by_word.get(surface.to_lowercase().as_str()))
      .or_else(|| lemma.and_then(|l| self.by_word.get(l)))
      .copied()
      .unwrap_or(Upos::X)
  }
}

/// A token is punctuation when it contains no alphanumeric character.
fn is_punctuation(surface: &str) -> bool {
  !surface.is_empty() && surface.chars().all(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

/// A token is a numeral when it is digits plus number punctuation.
fn is_numeric(surface: &str) -> bool {
  surface.chars().any(char::is_numeric)
    && surface.chars().all(|c| c.is_numeric() || matches!(c, '.' | ',' | '-' | '%'))
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
