use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::HexaConfig;
use crate::error::ServiceResult;
use crate::failure;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Settings for the global `tracing` subscriber.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives used when `RUST_LOG` is not set (default: `"info"`).
    pub level: String,
    /// Output format: Pretty (default) or Json.
    pub format: LogFormat,
    /// Whether to print the event target.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(mut self, level: &str) -> Self {
        self.level = level.to_string();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    /// Load from `HexaConfig` with prefix `hexa.logging`.
    ///
    /// Reads keys like:
    /// - `hexa.logging.level`
    /// - `hexa.logging.format` (`pretty` or `json`)
    /// - `hexa.logging.target`
    ///
    /// Missing keys keep their defaults; an unknown format falls back to pretty.
    pub fn from_config(config: &HexaConfig) -> Self {
        let defaults = Self::default();
        let format = match config
            .get_or("hexa.logging.format", String::new())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
        Self {
            level: config.get_or("hexa.logging.level", defaults.level),
            format,
            with_target: config.get_or("hexa.logging.target", defaults.with_target),
        }
    }
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Call once, at the start
/// of `main`; a second call returns a `Config` failure.
pub fn init_tracing(config: &LoggingConfig) -> ServiceResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(config.with_target)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(config.with_target)
            .try_init(),
    };

    installed.map_err(|e| {
        failure::config_caused(Arc::from(e), "cannot install tracing subscriber", &[])
    })
}
