//! Config module

mod cli;
mod constants;

pub use cli::{Cli, Config};
pub use constants::{DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT};
