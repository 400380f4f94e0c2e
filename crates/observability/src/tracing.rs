//! Tracing/logging initialization.
//!
//! Events always go to stderr: stdout belongs to the interactive console.

use tracing_subscriber::EnvFilter;

/// Output format for log lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// What to log and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `warn` or `shopdesk_console=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            format: LogFormat::Plain,
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). An unparsable
/// filter falls back to `warn`.
pub fn init(settings: &LogSettings) {
    let filter = EnvFilter::try_new(&settings.filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match settings.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Plain => builder.compact().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_quiet_plain_text() {
        let settings = LogSettings::default();
        assert_eq!(settings.filter, "warn");
        assert_eq!(settings.format, LogFormat::Plain);
    }

    #[test]
    fn init_is_idempotent_and_tolerates_bad_filters() {
        init(&LogSettings {
            filter: "not a [valid filter".to_string(),
            format: LogFormat::Json,
        });
        init(&LogSettings::default());
    }
}
