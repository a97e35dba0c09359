//! Logging setup
//!
//! The broker logs flat events: one line per brokered call, login, or
//! dispatch outcome. No span capture is configured since nothing here is
//! span-heavy.

use std::fs::File;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// `format` picks "json" (log shippers) or a human-readable format;
/// `file_path` appends to a file instead of stdout, without ANSI
/// escapes. A `RUST_LOG` environment filter wins over the configured
/// level when present.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let level = parse_level(&config.level)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let registry = tracing_subscriber::registry().with(filter);

    match (config.format.as_str(), open_log_file(config)?) {
        ("json", Some(file)) => registry.with(fmt::layer().json().with_writer(file)).init(),
        ("json", None) => registry.with(fmt::layer().json()).init(),
        (_, Some(file)) => registry
            .with(fmt::layer().with_ansi(false).with_writer(file))
            .init(),
        (_, None) => registry.with(fmt::layer().pretty()).init(),
    }

    Ok(())
}

/// Validate the configured level up front so a typo fails startup
/// instead of silently logging nothing.
fn parse_level(level: &str) -> anyhow::Result<Level> {
    level
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown log level: {level}"))
}

fn open_log_file(config: &LoggingConfig) -> anyhow::Result<Option<Arc<File>>> {
    let Some(path) = &config.file_path else {
        return Ok(None);
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(Some(Arc::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_level("WARN").unwrap(), Level::WARN);
        assert_eq!(parse_level("trace").unwrap(), Level::TRACE);
        assert!(parse_level("loud").is_err());
        assert!(parse_level("").is_err());
    }
}
