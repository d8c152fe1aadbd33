//! API configuration constant definitions

/// Default bind host
///
/// Loopback only; expose the service deliberately by passing `--host`.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_PORT: u16 = 5000;

/// Default log level
///
/// Any `tracing_subscriber` filter directive is accepted, so both plain
/// levels ("debug") and per-target filters ("semtag=debug,info") work.
pub const DEFAULT_LOG_LEVEL: &str = "info";
