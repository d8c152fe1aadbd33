//! Semantic Tagging Service

use semtag::config::{Language, LexiconConfig, SemtagConfig};
use semtag::SemtagService;

use crate::config::Config;
use crate::errors::Result;
use crate::models::TokenDto;

/// Common interface of the tagging service
///
/// This trait allows swapping the production implementation
/// (`SemtagApiServiceFull`) with test stubs/mocks.
pub trait SemtagApiService: Send + Sync {
  /// Tags a text in the given language
  ///
  /// # Errors
  /// - Validation error when the language has no loaded pipeline
  /// - Internal error
  fn tag(&self, language: Language, text: &str) -> Result<Vec<TokenDto>>;

  /// Returns the languages the tagger supports
  fn supported_languages(&self) -> Vec<Language>;
}

/// Production tagging service
///
/// Wraps the semtag crate's service facade; all pipelines are loaded
/// eagerly in `init`, before the server starts accepting requests.
#[derive(Debug)]
pub struct SemtagApiServiceFull {
  /// semtag facade (owns the per-language pipelines)
  inner: SemtagService,
}

impl SemtagApiServiceFull {
  /// Initialises the service: loads one pipeline per supported language.
  ///
  /// # Errors
  /// Returns an error if any lexicon cannot be fetched or parsed; the
  /// process must not become ready in that case.
  pub async fn init(config: &Config) -> Result<Self> {
    let semtag_config = SemtagConfig {
      lexicon: LexiconConfig {
        cache_dir: config.lexicon_cache_dir.clone(),
      },
      ..SemtagConfig::default()
    };

    let inner = SemtagService::init(&semtag_config).await?;

    Ok(Self { inner })
  }

  /// Tags a text (inherent method; the trait impl delegates here).
  pub fn tag(&self, language: Language, text: &str) -> Result<Vec<TokenDto>> {
    let tokens = self.inner.tag(language, text)?;
    Ok(tokens.into_iter().map(TokenDto::from).collect())
  }

  /// Returns the loaded languages.
  pub fn supported_languages(&self) -> Vec<Language> {
    self.inner.supported_languages()
  }
}

/// Production implementation of the `SemtagApiService` trait
impl SemtagApiService for SemtagApiServiceFull {
  fn tag(&self, language: Language, text: &str) -> Result<Vec<TokenDto>> {
    // Note: `self.tag(...)` would recurse into the trait method, so the
    // inherent method is called explicitly.
    SemtagApiServiceFull::tag(self, language, text)
  }

  fn supported_languages(&self) -> Vec<Language> {
    SemtagApiServiceFull::supported_languages(self)
  }
}
