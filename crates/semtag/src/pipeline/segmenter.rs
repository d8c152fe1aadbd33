//! Word segmentation stage.
//!
//! The European languages use UAX-29 word boundaries; punctuation marks
//! survive as their own tokens (the downstream taggers classify them) while
//! whitespace segments are dropped. Chinese text carries no word
//! boundaries, so it is segmented by greedy forward maximum match against
//! the word list of the language's own semantic lexicon.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::config::Language;
use crate::lexicon::LexiconCollection;

/// Per-language word segmenter.
#[derive(Debug, Clone)]
pub enum Segmenter {
  /// UAX-29 word boundaries (all European languages)
  Unicode(UnicodeSegmenter),
  /// Greedy longest match against the lexicon word list (Chinese)
  MaxMatch(MaxMatchSegmenter),
}

impl Segmenter {
  /// Builds the segmenter for a language.
  ///
  /// `lemma_lexicon` must be the lemma-only table; its keys double as the
  /// word list for maximum-match segmentation.
  pub fn for_language(language: Language, lemma_lexicon: &LexiconCollection) -> Self {
    match language {
      Language::Chinese => Segmenter::MaxMatch(MaxMatchSegmenter::new(
        lemma_lexicon.keys().filter(|w| !w.contains(char::is_whitespace)).map(str::to_string),
      )),
      _ => Segmenter::Unicode(UnicodeSegmenter),
    }
  }

  /// Splits a text into surface tokens. Empty input yields no tokens.
  pub fn segment(&self, text: &str) -> Vec<String> {
    match self {
      Segmenter::Unicode(segmenter) => segmenter.segment(text),
      Segmenter::MaxMatch(segmenter) => segmenter.segment(text),
    }
  }
}

/// UAX-29 word-boundary segmentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl UnicodeSegmenter {
  /// Splits on word boundaries, dropping whitespace-only segments.
  pub fn segment(&self, text: &str) -> Vec<String> {
    text
      .split_word_bounds()
      .filter(|segment| !segment.trim().is_empty())
      .map(str::to_string)
      .collect()
  }
}

/// Greedy forward maximum-match segmentation over a fixed word list.
#[derive(Debug, Clone)]
pub struct MaxMatchSegmenter {
  words: HashSet<String>,
  max_word_chars: usize,
}

impl MaxMatchSegmenter {
  /// Builds a segmenter over the given word list.
  pub fn new<I>(words: I) -> Self
  where
    I: IntoIterator<Item = String>,
  {
    let words: HashSet<String> = words.into_iter().collect();
    let max_word_chars = words.iter().map(|w| w.chars().count()).max().unwrap_or(1);
    Self {
      words,
      max_word_chars,
    }
  }

  /// Number of words in the segmentation list.
  pub fn word_count(&self) -> usize {
    self.words.len()
  }

  /// Segments a text.
  ///
  /// At each position the longest word-list match wins. ASCII alphanumeric
  /// runs (latin loanwords, digits) are kept whole, whitespace is skipped,
  /// and any character with no match is emitted on its own.
  pub fn segment(&self, text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
      let c = chars[i];

      if c.is_whitespace() {
        i += 1;
        continue;
      }

      if c.is_ascii_alphanumeric() {
        let mut j = i + 1;
        while j < chars.len() && chars[j].is_ascii_alphanumeric() {
          j += 1;
        }
        tokens.push(chars[i..j].iter().collect());
        i = j;
        continue;
      }

      let longest = (chars.len() - i).min(self.max_word_chars);
      let mut matched = None;
      for len in (1..=longest).rev() {
        let candidate: String = chars[i..i + len].iter().collect();
        if self.words.contains(&candidate) {
          matched = Some((candidate, len));
          break;
        }
      }

      match matched {
        Some((word, len)) => {
          tokens.push(word);
          i += len;
        }
        None => {
          tokens.push(c.to_string());
          i += 1;
        }
      }
    }

    tokens
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
