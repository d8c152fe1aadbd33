//! pipeline module
//!
//! The per-language analysis pipeline: word segmentation, lemmatisation,
//! POS tagging, and rule-based USAS semantic tagging. Pipelines are
//! assembled by the loader and are immutable afterwards.

pub mod language_pipeline;
pub mod lemmatizer;
pub mod pos_tagger;
pub mod segmenter;
pub mod usas_tagger;

/// Re-exports
pub use language_pipeline::LanguagePipeline;
pub use lemmatizer::Lemmatizer;
pub use pos_tagger::PosTagger;
pub use segmenter::Segmenter;
pub use usas_tagger::RuleBasedTagger;
