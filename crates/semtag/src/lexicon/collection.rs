//! Semantic lexicon lookup table.
//!
//! A lexicon resource is a TSV file with (at least) `lemma`, `pos` and
//! `semantic_tags` columns; `semantic_tags` holds the candidate USAS tags
//! for the entry in rank order, most likely first. The same file is parsed
//! twice at load time: once into a POS-qualified table and once into a
//! lemma-only fallback table.

use std::collections::HashMap;

use tracing::debug;

use crate::errors::LexiconError;

/// Column names the TSV header must provide.
const LEMMA_COLUMN: &str = "lemma";
const POS_COLUMN: &str = "pos";
const TAGS_COLUMN: &str = "semantic_tags";

/// A lookup table from word form (optionally POS-qualified) to its ranked
/// semantic tag candidates.
///
/// Keys are `"{lemma}|{pos}"` when built with `include_pos`, bare
/// `"{lemma}"` otherwise. The table is immutable after construction.
#[derive(Debug, Clone)]
pub struct LexiconCollection {
  entries: HashMap<String, Vec<String>>,
}

impl LexiconCollection {
  /// Parses a lexicon TSV into a lookup table.
  ///
  /// Column positions are taken from the header row, so files with extra
  /// columns or a different column order parse fine. When the same key
  /// occurs more than once the first occurrence wins; later duplicates are
  /// logged at debug level and dropped.
  ///
  /// # Errors
  /// - `MissingColumn` if the header lacks `lemma`, `pos` or
  ///   `semantic_tags`
  /// - `InvalidRow` for rows with too few columns, an empty lemma, or no
  ///   semantic tags
  pub fn from_tsv(tsv: &str, include_pos: bool) -> Result<Self, LexiconError> {
    let mut lines = tsv.lines().enumerate();

    let header = loop {
      match lines.next() {
        Some((_, line)) if line.trim().is_empty() => continue,
        Some((_, line)) => break line,
        None => {
          // An empty file has no header at all
          return Err(LexiconError::MissingColumn {
            column: LEMMA_COLUMN,
          });
        }
      }
    };

    let columns: Vec<&str> = header.split('\t').map(str::trim).collect();
    let column_index = |name: &'static str| -> Result<usize, LexiconError> {
      columns
        .iter()
        .position(|c| *c == name)
        .ok_or(LexiconError::MissingColumn { column: name })
    };

    let lemma_idx = column_index(LEMMA_COLUMN)?;
    let pos_idx = column_index(POS_COLUMN)?;
    let tags_idx = column_index(TAGS_COLUMN)?;
    let min_columns = lemma_idx.max(pos_idx).max(tags_idx) + 1;

    let mut entries: HashMap<String, Vec<String>> = HashMap::new();

    for (line_idx, line) in lines {
      if line.trim().is_empty() {
        continue;
      }
      let fields: Vec<&str> = line.split('\t').collect();
      if fields.len() < min_columns {
        return Err(LexiconError::InvalidRow {
          line: line_idx + 1,
          reason: format!(
            "expected at least {} tab-separated columns, found {}",
            min_columns,
            fields.len()
          ),
        });
      }

      let lemma = fields[lemma_idx].trim();
      if lemma.is_empty() {
        return Err(LexiconError::InvalidRow {
          line: line_idx + 1,
          reason: "empty lemma".to_string(),
        });
      }

      let tags: Vec<String> =
        fields[tags_idx].split_whitespace().map(str::to_string).collect();
      if tags.is_empty() {
        return Err(LexiconError::InvalidRow {
          line: line_idx + 1,
          reason: format!("no semantic tags for lemma `{lemma}`"),
        });
      }

      let key = if include_pos {
        qualified_key(lemma, fields[pos_idx].trim())
      } else {
        lemma.to_string()
      };

      if entries.contains_key(&key) {
        debug!(key = %key, line = line_idx + 1, "duplicate lexicon entry dropped");
        continue;
      }
      entries.insert(key, tags);
    }

    Ok(Self { entries })
  }

  /// Looks up the ranked semantic tags for a word form.
  ///
  /// Pass `Some(pos)` against a POS-qualified table, `None` against a
  /// lemma-only table.
  pub fn lookup(&self, word: &str, pos: Option<&str>) -> Option<&[String]> {
    let tags = match pos {
      Some(pos) => self.entries.get(&qualified_key(word, pos)),
      None => self.entries.get(word),
    };
    tags.map(Vec::as_slice)
  }

  /// Iterates over all `(key, ranked tags)` entries.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
    self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
  }

  /// Iterates over all keys.
  ///
  /// On a lemma-only table this is the lexicon's word list.
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }

  /// Number of entries.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the table holds no entries.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

/// Builds a POS-qualified lookup key.
fn qualified_key(word: &str, pos: &str) -> String {
  format!("{word}|{pos}")
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  const SAMPLE_TSV: &str = "lemma\tpos\tsemantic_tags\n\
    bonjour\tintj\tZ4\n\
    aller\tverb\tM1 A1.1.1\n\
    livre\tnoun\tQ4.1 Q1.2\n\
    livre\tverb\tA9\n";

  // ─── Parsing ───────────────────────────────────────────────────────────

  #[test]
  fn parses_pos_qualified_entries() {
    let lexicon = LexiconCollection::from_tsv(SAMPLE_TSV, true).unwrap();
    assert_eq!(lexicon.len(), 4);
    assert_eq!(
      lexicon.lookup("livre", Some("noun")).unwrap(),
      ["Q4.1", "Q1.2"]
    );
    assert_eq!(lexicon.lookup("livre", Some("verb")).unwrap(), ["A9"]);
  }

  #[test]
  fn lemma_only_table_keeps_first_occurrence() {
    let lexicon = LexiconCollection::from_tsv(SAMPLE_TSV, false).unwrap();
    // livre appears twice; the noun row comes first in the file
    assert_eq!(lexicon.len(), 3);
    assert_eq!(lexicon.lookup("livre", None).unwrap(), ["Q4.1", "Q1.2"]);
  }

  #[test]
  fn tag_rank_order_is_preserved() {
    let lexicon = LexiconCollection::from_tsv(SAMPLE_TSV, true).unwrap();
    let tags = lexicon.lookup("aller", Some("verb")).unwrap();
    assert_eq!(tags, ["M1", "A1.1.1"]);
  }

  #[test]
  fn header_columns_may_be_reordered() {
    let tsv = "pos\tsemantic_tags\tlemma\nnoun\tZ1\tmaison\n";
    let lexicon = LexiconCollection::from_tsv(tsv, true).unwrap();
    assert_eq!(lexicon.lookup("maison", Some("noun")).unwrap(), ["Z1"]);
  }

  #[test]
  fn extra_columns_are_ignored() {
    let tsv = "lemma\tpos\tsemantic_tags\tfrequency\nchat\tnoun\tL2\t42\n";
    let lexicon = LexiconCollection::from_tsv(tsv, true).unwrap();
    assert_eq!(lexicon.lookup("chat", Some("noun")).unwrap(), ["L2"]);
  }

  #[test]
  fn blank_lines_are_skipped() {
    let tsv = "lemma\tpos\tsemantic_tags\n\nchat\tnoun\tL2\n\n";
    let lexicon = LexiconCollection::from_tsv(tsv, true).unwrap();
    assert_eq!(lexicon.len(), 1);
  }

  // ─── Parse errors ──────────────────────────────────────────────────────

  #[test]
  fn missing_header_column_is_an_error() {
    let tsv = "lemma\tsemantic_tags\nchat\tL2\n";
    let err = LexiconCollection::from_tsv(tsv, true).unwrap_err();
    match err {
      LexiconError::MissingColumn { column } => assert_eq!(column, "pos"),
      _ => panic!("expected MissingColumn error"),
    }
  }

  #[test]
  fn empty_input_is_an_error() {
    assert!(LexiconCollection::from_tsv("", true).is_err());
  }

  #[test]
  fn short_row_is_an_error() {
    let tsv = "lemma\tpos\tsemantic_tags\nchat\tnoun\n";
    let err = LexiconCollection::from_tsv(tsv, true).unwrap_err();
    match err {
      LexiconError::InvalidRow { line, .. } => assert_eq!(line, 2),
      _ => panic!("expected InvalidRow error"),
    }
  }

  #[test]
  fn row_without_tags_is_an_error() {
    let tsv = "lemma\tpos\tsemantic_tags\nchat\tnoun\t \n";
    let err = LexiconCollection::from_tsv(tsv, true).unwrap_err();
    assert!(matches!(err, LexiconError::InvalidRow { .. }));
  }

  // ─── Lookup ────────────────────────────────────────────────────────────

  #[test]
  fn lookup_misses_return_none() {
    let lexicon = LexiconCollection::from_tsv(SAMPLE_TSV, true).unwrap();
    assert!(lexicon.lookup("bonjour", Some("noun")).is_none());
    assert!(lexicon.lookup("absent", Some("noun")).is_none());
  }

  #[test]
  fn keys_of_lemma_only_table_are_plain_words() {
    let lexicon = LexiconCollection::from_tsv(SAMPLE_TSV, false).unwrap();
    let mut keys: Vec<&str> = lexicon.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, ["aller", "bonjour", "livre"]);
  }
}
