// crates/semtag/src/config.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Supported language types.
///
/// One tagging pipeline is loaded per language at startup. The enum is
/// closed: requests carrying any other language name are rejected during
/// parameter validation, before a pipeline is ever consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  /// Dutch (lexicon: semantic_lexicon_dut)
  Dutch,
  /// French (lexicon: semantic_lexicon_fr)
  French,
  /// Italian (lexicon: semantic_lexicon_ita)
  Italian,
  /// Portuguese (lexicon: semantic_lexicon_pt)
  Portuguese,
  /// Spanish (lexicon: semantic_lexicon_es)
  Spanish,
  /// Chinese (lexicon: semantic_lexicon_chi, no lemmatiser stage)
  Chinese,
}

/// Stock pipeline stages that a model entry can disable.
///
/// `Parser` and `Ner` exist in the upstream model line-up but are never
/// needed for semantic tagging, so every entry disables them. Chinese
/// additionally disables the lemmatiser: its model emits no lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
  /// Dependency parser
  Parser,
  /// Named entity recogniser
  Ner,
  /// Lemmatiser
  Lemmatizer,
}

impl Language {
  /// All supported languages, in declaration order.
  pub const ALL: [Language; 6] = [
    Language::Dutch,
    Language::French,
    Language::Italian,
    Language::Portuguese,
    Language::Spanish,
    Language::Chinese,
  ];

  /// Returns the user-facing language name (used in query parameters).
  pub fn name(&self) -> &'static str {
    match self {
      Language::Dutch => "dutch",
      Language::French => "french",
      Language::Italian => "italian",
      Language::Portuguese => "portuguese",
      Language::Spanish => "spanish",
      Language::Chinese => "chinese",
    }
  }

  /// Returns the ISO 639-1 language code.
  pub fn code(&self) -> &'static str {
    match self {
      Language::Dutch => "nl",
      Language::French => "fr",
      Language::Italian => "it",
      Language::Portuguese => "pt",
      Language::Spanish => "es",
      Language::Chinese => "zh",
    }
  }

  /// Returns the internal model identifier.
  ///
  /// The identifier is the stem of the Multilingual-USAS lexicon resource
  /// this language's pipeline is built from; it also names the cache file
  /// the lexicon is stored under.
  pub fn model_id(&self) -> &'static str {
    match self {
      Language::Dutch => "semantic_lexicon_dut",
      Language::French => "semantic_lexicon_fr",
      Language::Italian => "semantic_lexicon_ita",
      Language::Portuguese => "semantic_lexicon_pt",
      Language::Spanish => "semantic_lexicon_es",
      Language::Chinese => "semantic_lexicon_chi",
    }
  }

  /// Returns the URL of this language's semantic lexicon TSV.
  pub fn lexicon_url(&self) -> &'static str {
    match self {
      Language::Dutch => {
        "https://raw.githubusercontent.com/UCREL/Multilingual-USAS/master/Dutch/semantic_lexicon_dut.tsv"
      }
      Language::French => {
        "https://raw.githubusercontent.com/UCREL/Multilingual-USAS/master/French/semantic_lexicon_fr.tsv"
      }
      Language::Italian => {
        "https://raw.githubusercontent.com/UCREL/Multilingual-USAS/master/Italian/semantic_lexicon_ita.tsv"
      }
      Language::Portuguese => {
        "https://raw.githubusercontent.com/UCREL/Multilingual-USAS/master/Portuguese/semantic_lexicon_pt.tsv"
      }
      Language::Spanish => {
        "https://raw.githubusercontent.com/UCREL/Multilingual-USAS/master/Spanish/semantic_lexicon_es.tsv"
      }
      Language::Chinese => {
        "https://raw.githubusercontent.com/UCREL/Multilingual-USAS/master/Chinese/semantic_lexicon_chi.tsv"
      }
    }
  }

  /// Returns the stock stages disabled for this language's model.
  pub fn excluded_stages(&self) -> &'static [Stage] {
    match self {
      Language::Chinese => &[Stage::Parser, Stage::Ner, Stage::Lemmatizer],
      _ => &[Stage::Parser, Stage::Ner],
    }
  }

  /// Whether this language's pipeline carries a lemmatiser stage.
  pub fn has_lemmatizer(&self) -> bool {
    !self.excluded_stages().contains(&Stage::Lemmatizer)
  }
}

impl FromStr for Language {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "dutch" => Ok(Language::Dutch),
      "french" => Ok(Language::French),
      "italian" => Ok(Language::Italian),
      "portuguese" => Ok(Language::Portuguese),
      "spanish" => Ok(Language::Spanish),
      "chinese" => Ok(Language::Chinese),
      _ => Err(format!(
        "unknown language: {}. Valid values: dutch, french, italian, portuguese, spanish, chinese",
        s
      )),
    }
  }
}

impl std::fmt::Display for Language {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// Top-level configuration for semtag.
#[derive(Debug, Clone, Deserialize)]
pub struct SemtagConfig {
  /// [lexicon] section
  #[serde(default)]
  pub lexicon: LexiconConfig,
  /// Languages to load at startup (default: all supported languages)
  #[serde(default = "default_languages")]
  pub languages: Vec<Language>,
}

/// [lexicon] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconConfig {
  /// Lexicon cache directory.
  ///
  /// If omitted it becomes `None` and the actual default is determined by
  /// `LexiconManager`.
  #[serde(default)]
  pub cache_dir: Option<PathBuf>,
}

/// Default language list: every supported language.
fn default_languages() -> Vec<Language> {
  Language::ALL.to_vec()
}

impl Default for SemtagConfig {
  fn default() -> Self {
    Self {
      lexicon: LexiconConfig::default(),
      languages: default_languages(),
    }
  }
}

// ===== Accessor Methods =====

impl SemtagConfig {
  /// Returns the configured lexicon cache directory.
  ///
  /// `None` if unspecified. The actual path determination is done by
  /// `LexiconManager`.
  pub fn lexicon_cache_dir(&self) -> Option<&Path> {
    self.lexicon.cache_dir.as_deref()
  }

  /// Returns the languages to load at startup.
  pub fn languages(&self) -> &[Language] {
    &self.languages
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `languages` is not empty
  /// - `languages` contains no duplicates
  /// - `lexicon.cache_dir` exists or can be created
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    // languages is not empty
    if self.languages.is_empty() {
      return Err(ConfigError::EmptyLanguages);
    }

    // languages contains no duplicates
    for (i, language) in self.languages.iter().enumerate() {
      if self.languages[..i].contains(language) {
        return Err(ConfigError::DuplicateLanguage {
          language: *language,
        });
      }
    }

    // lexicon.cache_dir exists or can be created
    if let Some(cache_dir) = &self.lexicon.cache_dir {
      if cache_dir.exists() {
        // If it exists, check that it is a directory
        if !cache_dir.is_dir() {
          return Err(ConfigError::InvalidLexiconCacheDir {
            path: cache_dir.clone(),
          });
        }
      } else {
        // If it does not exist, check if it can be created
        if let Err(e) = std::fs::create_dir_all(cache_dir) {
          return Err(ConfigError::LexiconCacheDirCreationFailed {
            path: cache_dir.clone(),
            source: Arc::new(e),
          });
        }
      }
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  // ─── Test Helpers ─────────────────────────────────────────────────────

  /// Creates a base valid configuration (uses a temporary directory for each test)
  fn create_valid_config(temp_dir: &TempDir) -> SemtagConfig {
    SemtagConfig {
      lexicon: LexiconConfig {
        cache_dir: Some(temp_dir.path().join("lexicons")),
      },
      languages: Language::ALL.to_vec(),
    }
  }

  // ─── Language Tests ────────────────────────────────────────────────────

  #[test]
  fn language_name_returns_correct_value() {
    assert_eq!(Language::Dutch.name(), "dutch");
    assert_eq!(Language::French.name(), "french");
    assert_eq!(Language::Italian.name(), "italian");
    assert_eq!(Language::Portuguese.name(), "portuguese");
    assert_eq!(Language::Spanish.name(), "spanish");
    assert_eq!(Language::Chinese.name(), "chinese");
  }

  #[test]
  fn language_code_returns_correct_value() {
    assert_eq!(Language::Dutch.code(), "nl");
    assert_eq!(Language::French.code(), "fr");
    assert_eq!(Language::Italian.code(), "it");
    assert_eq!(Language::Portuguese.code(), "pt");
    assert_eq!(Language::Spanish.code(), "es");
    assert_eq!(Language::Chinese.code(), "zh");
  }

  #[test]
  fn language_model_id_matches_lexicon_url() {
    for language in Language::ALL {
      let url = language.lexicon_url();
      assert!(
        url.ends_with(&format!("{}.tsv", language.model_id())),
        "url {} does not end with model id {}",
        url,
        language.model_id()
      );
    }
  }

  #[test]
  fn language_all_lists_every_language_once() {
    assert_eq!(Language::ALL.len(), 6);
    for (i, language) in Language::ALL.iter().enumerate() {
      assert!(!Language::ALL[..i].contains(language));
    }
  }

  #[test]
  fn language_from_str_accepts_known_names() {
    assert_eq!("french".parse::<Language>().unwrap(), Language::French);
    assert_eq!("FRENCH".parse::<Language>().unwrap(), Language::French);
    assert_eq!("chinese".parse::<Language>().unwrap(), Language::Chinese);
  }

  #[test]
  fn language_from_str_rejects_unknown_names() {
    let err = "klingon".parse::<Language>().unwrap_err();
    assert!(err.contains("klingon"));
    assert!(err.contains("dutch"));
  }

  #[test]
  fn language_display() {
    assert_eq!(format!("{}", Language::Portuguese), "portuguese");
  }

  #[test]
  fn language_serde_roundtrip() {
    let json = serde_json::to_string(&Language::Italian).unwrap();
    assert_eq!(json, "\"italian\"");
    let back: Language = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Language::Italian);
  }

  #[test]
  fn only_chinese_lacks_a_lemmatizer() {
    for language in Language::ALL {
      let expected = language != Language::Chinese;
      assert_eq!(language.has_lemmatizer(), expected, "{language}");
    }
  }

  #[test]
  fn every_language_excludes_parser_and_ner() {
    for language in Language::ALL {
      let excluded = language.excluded_stages();
      assert!(excluded.contains(&Stage::Parser));
      assert!(excluded.contains(&Stage::Ner));
    }
  }

  // ─── validate() Normal Case Tests ──────────────────────────────────────

  #[test]
  fn validate_accepts_valid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_valid_config(&temp_dir);

    let result = config.validate();
    assert!(result.is_ok(), "valid config should pass validation");
  }

  #[test]
  fn validate_accepts_single_language() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.languages = vec![Language::French];

    assert!(config.validate().is_ok());
  }

  #[test]
  fn validate_accepts_none_cache_dir() {
    let config = SemtagConfig::default();
    assert!(config.validate().is_ok());
  }

  #[test]
  fn default_config_loads_all_languages() {
    let config = SemtagConfig::default();
    assert_eq!(config.languages(), Language::ALL);
  }

  // ─── validate() Abnormal Cases ─────────────────────────────────────────

  #[test]
  fn validate_rejects_empty_languages() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.languages.clear();

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::EmptyLanguages));
  }

  #[test]
  fn validate_rejects_duplicate_language() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.languages.push(Language::Dutch);

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::DuplicateLanguage { language } => {
        assert_eq!(language, Language::Dutch);
      }
      _ => panic!("expected DuplicateLanguage error"),
    }
  }

  #[test]
  fn validate_creates_missing_cache_dir() {
    let temp_dir = TempDir::new().unwrap();
    let cache_dir = temp_dir.path().join("new-cache-dir");
    assert!(!cache_dir.exists());

    let mut config = create_valid_config(&temp_dir);
    config.lexicon.cache_dir = Some(cache_dir.clone());

    assert!(config.validate().is_ok());
    assert!(cache_dir.exists() && cache_dir.is_dir());
  }

  #[test]
  fn validate_rejects_cache_dir_is_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("not-a-dir");
    fs::write(&file_path, b"dummy").unwrap();

    let mut config = create_valid_config(&temp_dir);
    config.lexicon.cache_dir = Some(file_path.clone());

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::InvalidLexiconCacheDir { path } => {
        assert_eq!(path, file_path);
      }
      _ => panic!("expected InvalidLexiconCacheDir error"),
    }
  }

  #[test]
  fn validate_rejects_cache_dir_creation_fails() {
    let temp_dir = TempDir::new().unwrap();
    // make parent a file
    let parent_file = temp_dir.path().join("parent_file");
    fs::write(&parent_file, b"dummy").unwrap();

    // trying to create a dir under a file should fail
    let invalid_cache_dir = parent_file.join("child_dir");

    let mut config = create_valid_config(&temp_dir);
    config.lexicon.cache_dir = Some(invalid_cache_dir.clone());

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::LexiconCacheDirCreationFailed { path, .. } => {
        assert_eq!(path, invalid_cache_dir);
      }
      _ => panic!("expected LexiconCacheDirCreationFailed error"),
    }
  }

  #[test]
  fn validate_reports_empty_languages_first() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("not-a-dir");
    fs::write(&file_path, b"dummy").unwrap();

    let mut config = create_valid_config(&temp_dir);
    config.languages.clear(); // First error
    config.lexicon.cache_dir = Some(file_path); // Second error candidate

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::EmptyLanguages));
  }
}
