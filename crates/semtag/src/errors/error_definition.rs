//! Error definitions
//!
//! Every fallible path in this crate reports one of the error enums below.
//! Sources that are not `Clone` (io, reqwest) are wrapped in `Arc` so the
//! error types stay cloneable.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::config::Language;

/// Configuration (`SemtagConfig`) errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// `languages` is empty
  #[error("at least one language must be configured")]
  EmptyLanguages,

  /// The same language appears twice in `languages`
  #[error("language configured more than once: {language}")]
  DuplicateLanguage {
    /// The duplicated language
    language: Language,
  },

  /// `lexicon.cache_dir` exists but is not a directory
  #[error("lexicon.cache_dir is not a directory: path={path:?}")]
  InvalidLexiconCacheDir {
    /// The offending path
    path: PathBuf,
  },

  /// `lexicon.cache_dir` could not be created
  #[error("failed to create lexicon.cache_dir: path={path:?}, error={source}")]
  LexiconCacheDirCreationFailed {
    /// The path that could not be created
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },
}

/// Semantic-lexicon errors: cache handling, HTTP fetch, and TSV parsing
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LexiconError {
  /// No per-OS cache directory could be determined
  #[error("no lexicon cache directory could be determined for this OS")]
  CacheDirNotFound,

  /// The cache directory could not be created
  #[error("failed to create the lexicon cache directory: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// A cached lexicon file could not be read
  #[error("failed to read cached lexicon: path={path:?}, error={source}")]
  CacheReadFailed {
    /// Path of the cached file
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// A freshly fetched lexicon could not be written to the cache
  #[error("failed to write lexicon to cache: path={path:?}, error={source}")]
  CacheWriteFailed {
    /// Path of the cache file
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// The HTTP fetch of a lexicon resource failed
  #[error("failed to fetch lexicon: url={url}, error={source}")]
  FetchFailed {
    /// The lexicon URL
    url: String,
    /// Underlying HTTP client error
    #[source]
    source: Arc<reqwest::Error>,
  },

  /// The lexicon server answered with a non-success status
  #[error("unexpected HTTP status fetching lexicon: url={url}, status={status}")]
  UnexpectedStatus {
    /// The lexicon URL
    url: String,
    /// The HTTP status code received
    status: u16,
  },

  /// A required column is missing from the TSV header
  #[error("lexicon TSV header is missing the `{column}` column")]
  MissingColumn {
    /// Name of the missing column
    column: &'static str,
  },

  /// A data row could not be parsed
  #[error("invalid lexicon TSV row at line {line}: {reason}")]
  InvalidRow {
    /// 1-based line number in the TSV
    line: usize,
    /// Why the row was rejected
    reason: String,
  },
}

/// Unified error
/// Public APIs of this crate return this error.
/// Used as `SemtagResult<T>` = `Result<T, SemtagError>`.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum SemtagError {
  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Lexicon error
  #[error(transparent)]
  Lexicon(#[from] LexiconError),

  /// The requested language has no loaded pipeline
  #[error("unsupported language: {language}")]
  UnsupportedLanguage {
    /// The requested language
    language: Language,
  },
}

/// Standard Result alias for the semtag crate
pub type SemtagResult<T> = Result<T, SemtagError>;
