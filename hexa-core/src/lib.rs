//! Core of hexa: categorized service failures, the logging failure factory,
//! configuration loading and tracing setup.

pub mod config;
pub mod error;
pub mod failure;
pub mod format;
pub mod logging;
pub mod prelude;

pub use config::{ConfigError, ConfigValue, FromConfigValue, HexaConfig};
pub use error::{Cause, ErrorCategory, ServiceError, ServiceResult, DEFAULT_MESSAGE};
pub use format::{format_message, IndexedTemplate};
pub use logging::{init_tracing, LogFormat, LoggingConfig};
