//! semtag semantic tagging library
//!
//! Tokenises, lemmatises, POS tags, and USAS semantic tags text in six
//! languages (dutch, french, italian, portuguese, spanish, chinese). Each
//! language's pipeline is built at startup from the corresponding
//! Multilingual-USAS semantic lexicon, downloaded on first use and cached
//! on disk.

/// Configuration module - defines SemtagConfig, Language and Stage
pub mod config;

/// Errors module - defines SemtagError, SemtagResult and friends
pub mod errors;

/// Lexicon module - fetching, caching and parsing of semantic lexicons
pub mod lexicon;

/// Loader module - builds one tagging pipeline per configured language
pub mod loader;

/// Data model module - defines the AnalyzedToken record
pub mod models;

/// Pipeline module - segmentation, lemmatisation, POS and semantic tagging
pub mod pipeline;

/// Service module - the SemtagService facade
pub mod service;

/// Tagset module - UPOS tags and the mapping onto the lexicon core tagset
pub mod tagset;

/// Re-exports
pub use config::{Language, SemtagConfig, Stage};
pub use errors::{SemtagError, SemtagResult};
pub use models::AnalyzedToken;
pub use service::SemtagService;
pub use tagset::Upos;
