//! Tags a French sentence and prints the tokens as JSON.
//!
//! Downloads the French semantic lexicon on the first run (cached
//! afterwards):
//!
//! ```bash
//! cargo run --example tag_text
//! ```

use semtag::config::{Language, SemtagConfig};
use semtag::SemtagService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let config = SemtagConfig {
    languages: vec![Language::French],
    ..SemtagConfig::default()
  };

  let service = SemtagService::init(&config).await?;

  let tokens = service.tag(Language::French, "bonjour ca va")?;
  println!("{}", serde_json::to_string_pretty(&tokens)?);

  Ok(())
}
