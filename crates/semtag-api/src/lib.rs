//! semtag-api crate
//!
//! Web server exposing the semtag multilingual semantic tagger as an HTTP
//! API.
//!
//! ## Endpoints
//! - `GET /` - Tags the text given by the `text` query parameter in the
//!   language given by `lang`
//! - `GET /supported-languages` - Outputs all languages the tagger supports
//!
//! ## Usage Example
//! ```bash
//! curl 'http://127.0.0.1:5000/?lang=french&text=bonjour%20ca%20va'
//! curl 'http://127.0.0.1:5000/supported-languages'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::{Cli, Config};
pub use errors::{ApiError, ApiErrorKind};
pub use models::{TagParams, TokenDto};
pub use service::{SemtagApiService, SemtagApiServiceFull};
