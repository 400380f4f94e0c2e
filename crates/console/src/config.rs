//! Process configuration. Only logging is configurable.

use shopdesk_observability::{LogFormat, LogSettings};

pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const LOG_FORMAT_VAR: &str = "SHOPDESK_LOG_FORMAT";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub log: LogSettings,
    /// Value of `SHOPDESK_LOG_FORMAT` that was not understood, if any.
    /// Kept so it can be logged once tracing is up.
    pub rejected_log_format: Option<String>,
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.log.filter = filter;
        }

        if let Some(format) = lookup(LOG_FORMAT_VAR) {
            match format.trim().to_ascii_lowercase().as_str() {
                "json" => config.log.format = LogFormat::Json,
                "plain" | "" => config.log.format = LogFormat::Plain,
                _ => config.rejected_log_format = Some(format),
            }
        }

        config
    }
}
