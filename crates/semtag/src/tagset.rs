//! POS tagsets and the mapping between them.
//!
//! The pipeline tags tokens with Universal POS (UPOS) categories, while the
//! semantic lexicons qualify their entries with the USAS core POS tagset
//! (`noun`, `verb`, `prep`, ...). The fixed mapping between the two lives
//! here, in both directions: `usas_core` drives POS-qualified lexicon
//! lookups during semantic tagging, `from_core_pos` lets the POS tagger
//! turn lexicon material back into UPOS categories.

use serde::Serialize;

/// Universal POS tag of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Upos {
  /// Adjective
  Adj,
  /// Adposition
  Adp,
  /// Adverb
  Adv,
  /// Auxiliary verb
  Aux,
  /// Coordinating conjunction
  Cconj,
  /// Determiner
  Det,
  /// Interjection
  Intj,
  /// Noun
  Noun,
  /// Numeral
  Num,
  /// Particle
  Part,
  /// Pronoun
  Pron,
  /// Proper noun
  Propn,
  /// Punctuation
  Punct,
  /// Subordinating conjunction
  Sconj,
  /// Symbol
  Sym,
  /// Verb
  Verb,
  /// Other / unknown
  X,
}

impl Upos {
  /// Returns the canonical upper-case tag string.
  pub fn as_str(&self) -> &'static str {
    match self {
      Upos::Adj => "ADJ",
      Upos::Adp => "ADP",
      Upos::Adv => "ADV",
      Upos::Aux => "AUX",
      Upos::Cconj => "CCONJ",
      Upos::Det => "DET",
      Upos::Intj => "INTJ",
      Upos::Noun => "NOUN",
      Upos::Num => "NUM",
      Upos::Part => "PART",
      Upos::Pron => "PRON",
      Upos::Propn => "PROPN",
      Upos::Punct => "PUNCT",
      Upos::Sconj => "SCONJ",
      Upos::Sym => "SYM",
      Upos::Verb => "VERB",
      Upos::X => "X",
    }
  }

  /// Maps this UPOS tag onto the USAS core POS tagset used by the
  /// semantic lexicons.
  ///
  /// Some UPOS tags map onto more than one core tag; the order is the
  /// order in which POS-qualified lexicon lookups are attempted.
  pub fn usas_core(&self) -> &'static [&'static str] {
    match self {
      Upos::Adj => &["adj"],
      Upos::Adp => &["prep"],
      Upos::Adv => &["adv"],
      Upos::Aux => &["verb"],
      Upos::Cconj => &["conj"],
      Upos::Det => &["det", "art"],
      Upos::Intj => &["intj"],
      Upos::Noun => &["noun"],
      Upos::Num => &["num"],
      Upos::Part => &["part"],
      Upos::Pron => &["pron"],
      Upos::Propn => &["pnoun"],
      Upos::Punct => &["punc"],
      Upos::Sconj => &["conj"],
      Upos::Sym => &["code"],
      Upos::Verb => &["verb"],
      Upos::X => &["fw", "xx"],
    }
  }

  /// Maps a USAS core POS tag back to a UPOS category.
  ///
  /// Core tags reachable from several UPOS tags resolve to the unmarked
  /// member of the pair (`verb` → `VERB` rather than `AUX`, `conj` →
  /// `CCONJ` rather than `SCONJ`). Returns `None` for core tags outside
  /// the known tagset.
  pub fn from_core_pos(core: &str) -> Option<Upos> {
    match core {
      "adj" => Some(Upos::Adj),
      "prep" => Some(Upos::Adp),
      "adv" => Some(Upos::Adv),
      "conj" => Some(Upos::Cconj),
      "det" | "art" => Some(Upos::Det),
      "intj" => Some(Upos::Intj),
      "noun" => Some(Upos::Noun),
      "num" => Some(Upos::Num),
      "part" => Some(Upos::Part),
      "pron" => Some(Upos::Pron),
      "pnoun" => Some(Upos::Propn),
      "punc" => Some(Upos::Punct),
      "code" => Some(Upos::Sym),
      "verb" => Some(Upos::Verb),
      "fw" | "xx" => Some(Upos::X),
      _ => None,
    }
  }
}

impl std::fmt::Display for Upos {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
