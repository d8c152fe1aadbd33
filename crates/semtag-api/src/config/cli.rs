//! Config loading from command-line arguments

use std::path::PathBuf;

use clap::Parser;

use super::constants::{DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT};

/// Command-line arguments of the API server
#[derive(Debug, Parser)]
#[command(name = "semtag-api", version, about = "HTTP API for multilingual USAS semantic tagging")]
pub struct Cli {
  /// Bind host (Default: 127.0.0.1)
  #[arg(long, default_value = DEFAULT_HOST)]
  pub host: String,

  /// Bind port (Default: 5000)
  #[arg(long, default_value_t = DEFAULT_PORT)]
  pub port: u16,

  /// Log level or tracing filter directive (Default: info)
  #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
  pub log_level: String,

  /// Lexicon cache directory (Default: per-OS cache directory)
  #[arg(long)]
  pub lexicon_cache_dir: Option<PathBuf>,
}

impl Cli {
  /// Resolves the arguments into the server configuration.
  #[must_use]
  pub fn into_config(self) -> Config {
    Config {
      bind_addr: format!("{}:{}", self.host, self.port),
      log_level: self.log_level,
      lexicon_cache_dir: self.lexicon_cache_dir,
    }
  }
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5000")
  pub bind_addr: String,
  /// Log level / tracing filter directive
  pub log_level: String,
  /// Lexicon cache directory override (`None` = per-OS default)
  pub lexicon_cache_dir: Option<PathBuf>,
}
