//! Lexicon Management Module
//!
//! Manages fetching and caching of the Multilingual-USAS semantic lexicon
//! resources. A lexicon is downloaded on the first run and loaded from the
//! cache directory from the second time onwards. Each load parses the TSV
//! twice: once retaining the POS qualifiers and once lemma-only, giving the
//! rule-based tagger its primary and fallback lookup tables.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Language;
use crate::errors::LexiconError;
use crate::lexicon::collection::LexiconCollection;

/// The two lookup tables built from one lexicon resource.
#[derive(Debug, Clone)]
pub struct LexiconPair {
  /// POS-qualified table (keys `"{lemma}|{pos}"`)
  pub lexicon_lookup: LexiconCollection,
  /// Lemma-only fallback table (keys `"{lemma}"`)
  pub lemma_lexicon_lookup: LexiconCollection,
}

/// Lexicon manager: cache directory plus HTTP client.
pub struct LexiconManager {
  /// Lexicon cache directory
  cache_dir: PathBuf,

  /// HTTP client used for first-time downloads
  client: reqwest::Client,
}

impl LexiconManager {
  /// Creates a manager over the given cache directory, defaulting to a
  /// per-OS location when `None` is passed. The directory is created if it
  /// does not exist.
  pub fn new(cache_dir: Option<PathBuf>) -> Result<Self, LexiconError> {
    let cache_dir = match cache_dir {
      Some(dir) => dir,
      None => default_cache_dir()?,
    };

    std::fs::create_dir_all(&cache_dir)
      .map_err(|e| LexiconError::CacheDirCreationFailed(Arc::new(e)))?;

    Ok(Self {
      cache_dir,
      client: reqwest::Client::new(),
    })
  }

  /// Returns the path of the cache directory.
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Returns the cache file path for a language's lexicon.
  pub fn cache_path(&self, language: Language) -> PathBuf {
    self.cache_dir.join(format!("{}.tsv", language.model_id()))
  }

  /// Loads the lookup-table pair for a language.
  ///
  /// Downloads the TSV on the first call for a language, reads it from the
  /// cache afterwards.
  ///
  /// # Errors
  /// Fetch, cache IO, and TSV parse errors all surface here; the caller is
  /// expected to treat them as fatal at startup.
  pub async fn load(&self, language: Language) -> Result<LexiconPair, LexiconError> {
    let raw = self.fetch_or_cached(language).await?;

    // Includes the POS information
    let lexicon_lookup = LexiconCollection::from_tsv(&raw, true)?;
    // Excludes the POS information
    let lemma_lexicon_lookup = LexiconCollection::from_tsv(&raw, false)?;

    debug!(
      language = %language,
      pos_entries = lexicon_lookup.len(),
      lemma_entries = lemma_lexicon_lookup.len(),
      "lexicon tables built"
    );

    Ok(LexiconPair {
      lexicon_lookup,
      lemma_lexicon_lookup,
    })
  }

  /// Returns the raw TSV for a language, from cache when present.
  async fn fetch_or_cached(&self, language: Language) -> Result<String, LexiconError> {
    let path = self.cache_path(language);

    if path.is_file() {
      debug!(language = %language, path = %path.display(), "lexicon cache hit");
      return std::fs::read_to_string(&path).map_err(|e| LexiconError::CacheReadFailed {
        path,
        source: Arc::new(e),
      });
    }

    let url = language.lexicon_url();
    info!(language = %language, url, "downloading semantic lexicon");

    let response =
      self.client.get(url).send().await.map_err(|e| LexiconError::FetchFailed {
        url: url.to_string(),
        source: Arc::new(e),
      })?;

    let status = response.status();
    if !status.is_success() {
      return Err(LexiconError::UnexpectedStatus {
        url: url.to_string(),
        status: status.as_u16(),
      });
    }

    let body = response.text().await.map_err(|e| LexiconError::FetchFailed {
      url: url.to_string(),
      source: Arc::new(e),
    })?;

    std::fs::write(&path, &body).map_err(|e| LexiconError::CacheWriteFailed {
      path: path.clone(),
      source: Arc::new(e),
    })?;
    info!(language = %language, path = %path.display(), "lexicon cached");

    Ok(body)
  }
}

/// Returns the default cache directory path according to the OS
///
/// | OS      | Example Path                                    |
/// |---------|-------------------------------------------------|
/// | Linux   | `~/.cache/semtag/lexicons`                      |
/// | macOS   | `~/Library/Caches/semtag/lexicons`              |
/// | Windows | `C:\Users\{user}\AppData\Local\semtag\lexicons` |
fn default_cache_dir() -> Result<PathBuf, LexiconError> {
  let base = dirs::cache_dir().ok_or(LexiconError::CacheDirNotFound)?;

  Ok(base.join("semtag").join("lexicons"))
}

/// Manual `Debug` implementation for `LexiconManager`
///
/// The inner `reqwest::Client` carries connection-pool state with no useful
/// `Debug` output; only the cache directory is shown.
impl fmt::Debug for LexiconManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LexiconManager").field("cache_dir", &self.cache_dir).finish()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  const FIXTURE_TSV: &str = "lemma\tpos\tsemantic_tags\nbonjour\tintj\tZ4\n";

  #[test]
  fn manager_creates_missing_cache_dir() {
    let temp_dir = TempDir::new().unwrap();
    let cache_dir = temp_dir.path().join("lexicons");
    assert!(!cache_dir.exists());

    let manager = LexiconManager::new(Some(cache_dir.clone())).unwrap();
    assert!(cache_dir.is_dir());
    assert_eq!(manager.cache_dir(), cache_dir);
  }

  #[test]
  fn cache_path_is_named_after_the_model_id() {
    let temp_dir = TempDir::new().unwrap();
    let manager = LexiconManager::new(Some(temp_dir.path().to_path_buf())).unwrap();

    let path = manager.cache_path(Language::French);
    assert!(path.ends_with("semantic_lexicon_fr.tsv"));
  }

  #[tokio::test]
  async fn load_uses_the_cache_when_present() {
    let temp_dir = TempDir::new().unwrap();
    let manager = LexiconManager::new(Some(temp_dir.path().to_path_buf())).unwrap();

    // Seed the cache so no network access happens
    std::fs::write(manager.cache_path(Language::French), FIXTURE_TSV).unwrap();

    let pair = manager.load(Language::French).await.unwrap();
    assert_eq!(
      pair.lexicon_lookup.lookup("bonjour", Some("intj")).unwrap(),
      ["Z4"]
    );
    assert_eq!(pair.lemma_lexicon_lookup.lookup("bonjour", None).unwrap(), ["Z4"]);
  }

  #[tokio::test]
  async fn load_reports_parse_errors_from_cached_files() {
    let temp_dir = TempDir::new().unwrap();
    let manager = LexiconManager::new(Some(temp_dir.path().to_path_buf())).unwrap();

    std::fs::write(manager.cache_path(Language::Spanish), "not\ta\tlexicon\n").unwrap();

    let err = manager.load(Language::Spanish).await.unwrap_err();
    assert!(matches!(err, LexiconError::MissingColumn { .. }));
  }

  /// Full download of the real French lexicon; network access required.
  #[tokio::test]
  #[cfg_attr(not(feature = "with_lexicon_tests"), ignore)]
  async fn load_downloads_and_caches_the_real_lexicon() {
    let temp_dir = TempDir::new().unwrap();
    let manager = LexiconManager::new(Some(temp_dir.path().to_path_buf())).unwrap();

    let pair = manager.load(Language::French).await.expect("lexicon download failed");
    assert!(!pair.lexicon_lookup.is_empty());
    assert!(manager.cache_path(Language::French).is_file());

    // Second load must be served from the cache
    let again = manager.load(Language::French).await.expect("cache read failed");
    assert_eq!(again.lexicon_lookup.len(), pair.lexicon_lookup.len());
  }
}
