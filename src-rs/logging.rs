//! Logger setup for the command-line tools.

use std::str::FromStr;

use log::LevelFilter;

/// Parses a `--log-level` value, falling back to `warn` when it is not a
/// known level.
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    })
}

/// Installs an stderr logger at `level`. The level comes from the command
/// line only; environment variables are not consulted.
pub fn init(level: &str) {
    env_logger::Builder::new()
        .filter_level(parse_level(level))
        .format_timestamp(None)
        .init();
}
