//! Logging utilities and configuration for term-describe.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary (or to the embedding application) through [`setup`].

/// Truncates a string to the maximum field length if needed.
///
/// Cuts on a character boundary so multi-byte values never split.
pub fn truncate_field(value: &str, max_length: usize) -> String {
    if value.len() <= max_length {
        value.to_string()
    } else {
        let cut = (0..=max_length)
            .rev()
            .find(|&i| value.is_char_boundary(i))
            .unwrap_or(0);
        format!("{}...(truncated)", &value[..cut])
    }
}

/// Utilities for setting up structured logging.
pub mod setup {
    use tracing::Level;

    /// Configuration for term-describe's logging setup.
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        /// Log level for dependencies and other targets
        pub level: Level,
        /// Log level for term-describe components specifically
        pub crate_level: Level,
        /// Whether to use JSON output format
        pub json_format: bool,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::WARN,
                crate_level: Level::INFO,
                json_format: false,
            }
        }
    }

    impl LoggingConfig {
        /// Creates a configuration for machine-readable structured logs.
        pub fn structured() -> Self {
            Self {
                level: Level::INFO,
                crate_level: Level::INFO,
                json_format: true,
            }
        }

        /// Sets the log level for term-describe components.
        pub fn with_crate_level(mut self, level: Level) -> Self {
            self.crate_level = level;
            self
        }

        /// Builds the environment filter string.
        pub fn env_filter(&self) -> String {
            format!(
                "{},term_describe={}",
                self.level.as_str().to_lowercase(),
                self.crate_level.as_str().to_lowercase()
            )
        }
    }

    /// Initializes logging to stderr.
    ///
    /// `RUST_LOG` takes precedence over the configured filter.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use term_describe::logging::setup::{init_logging, LoggingConfig};
    ///
    /// init_logging(LoggingConfig::structured().with_crate_level(tracing::Level::DEBUG)).unwrap();
    /// ```
    pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

        let fmt_layer = if config.json_format {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::setup::LoggingConfig;
    use super::*;
    use tracing::Level;

    #[test]
    fn test_truncate_field() {
        assert_eq!(truncate_field("hello", 10), "hello");
        assert_eq!(
            truncate_field("this is a very long text that should be truncated", 10),
            "this is a ...(truncated)"
        );
    }

    #[test]
    fn test_truncate_field_respects_char_boundaries() {
        assert_eq!(truncate_field("ééé", 3), "é...(truncated)");
    }

    #[test]
    fn test_env_filter_string() {
        let config = LoggingConfig::default();
        assert_eq!(config.env_filter(), "warn,term_describe=info");
        assert!(!config.json_format);

        let config = LoggingConfig::structured().with_crate_level(Level::TRACE);
        assert_eq!(config.env_filter(), "info,term_describe=trace");
        assert!(config.json_format);
    }
}
