//! Tracing/logging initialization.
//!
//! Filtering comes from `RUST_LOG` (default `info`). Output is JSON unless
//! `CATALOG_LOG_FORMAT=pretty`.

use core::str::FromStr;

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var("CATALOG_LOG_FORMAT").ok().as_deref())
    }

    /// Unset or unrecognized values mean JSON.
    pub fn from_value(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(LogFormat::from_env());
}

pub fn init_with(format: LogFormat) {
    let builder = tracing_subscriber::fmt().with_env_filter(filter());

    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init(),
        LogFormat::Pretty => builder.with_target(true).try_init(),
    };
}

/// Human-readable output captured by the test harness.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::from_value(None), LogFormat::Json);
        assert_eq!(LogFormat::from_value(Some("PRETTY")), LogFormat::Pretty);
        assert_eq!(LogFormat::from_value(Some("text")), LogFormat::Pretty);
        assert_eq!(LogFormat::from_value(Some("xml")), LogFormat::Json);
    }

    #[test]
    fn repeated_init_is_a_no_op() {
        init_for_tests();
        init_with(LogFormat::Json);
        init_with(LogFormat::Pretty);
        ::tracing::info!("still logging");
    }
}
