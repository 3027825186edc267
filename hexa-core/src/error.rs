use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::format::format_message;

/// Message used when a failure is built from a cause alone.
pub const DEFAULT_MESSAGE: &str = "An unexpected error occurred.";

/// Underlying error attached to a [`ServiceError`].
///
/// Shared so that cloning a failure keeps pointing at the same cause.
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Convenience result type for use-case operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Origin of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// Uncategorized failures.
    #[default]
    General,
    /// Application or environment configuration.
    Config,
    /// Database access or integrity.
    Database,
    /// Invalid input or violated business rules on input.
    Validation,
    /// External services (APIs, web services) or business-rule rejections.
    Service,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 5] = [
        ErrorCategory::General,
        ErrorCategory::Config,
        ErrorCategory::Database,
        ErrorCategory::Validation,
        ErrorCategory::Service,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::General => "GENERAL",
            ErrorCategory::Config => "CONFIG",
            ErrorCategory::Database => "DATABASE",
            ErrorCategory::Validation => "VALIDATION",
            ErrorCategory::Service => "SERVICE",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorized failure with a message and an optional cause.
///
/// Values are immutable once built. Constructors have no side effects; go
/// through [`crate::failure`] to get a failure that is also logged.
#[derive(Debug, Clone)]
pub struct ServiceError {
    category: ErrorCategory,
    message: String,
    cause: Option<Cause>,
}

impl ServiceError {
    /// Canonical constructor. A missing category becomes [`ErrorCategory::General`].
    pub fn compose(
        category: Option<ErrorCategory>,
        cause: Option<Cause>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category: category.unwrap_or_default(),
            message: message.into(),
            cause,
        }
    }

    pub fn new(message: impl Into<String>) -> Self {
        Self::compose(None, None, message)
    }

    pub fn with_cause(message: impl Into<String>, cause: Cause) -> Self {
        Self::compose(None, Some(cause), message)
    }

    /// General failure carrying `cause` and [`DEFAULT_MESSAGE`].
    pub fn from_cause(cause: Cause) -> Self {
        Self::compose(None, Some(cause), DEFAULT_MESSAGE)
    }

    pub fn categorized(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self::compose(Some(category), None, message)
    }

    pub fn categorized_cause(category: ErrorCategory, cause: Cause) -> Self {
        Self::compose(Some(category), Some(cause), DEFAULT_MESSAGE)
    }

    pub fn categorized_with_cause(
        category: ErrorCategory,
        message: impl Into<String>,
        cause: Cause,
    ) -> Self {
        Self::compose(Some(category), Some(cause), message)
    }

    /// Build a failure whose message is `template` with each `{}` replaced by
    /// the next entry of `params`.
    ///
    /// ```
    /// use hexa_core::{ErrorCategory, ServiceError};
    ///
    /// let err = ServiceError::formatted(None, None, "Value {} and {}", &[&"a", &"b"]);
    /// assert_eq!(err.message(), "Value a and b");
    /// assert_eq!(err.category(), ErrorCategory::General);
    /// ```
    pub fn formatted(
        category: Option<ErrorCategory>,
        cause: Option<Cause>,
        template: &str,
        params: &[&dyn std::fmt::Display],
    ) -> Self {
        Self::compose(category, cause, format_message(template, params))
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Check whether this failure belongs to `category`.
    pub fn is(&self, category: ErrorCategory) -> bool {
        self.category == category
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl From<ConfigError> for ServiceError {
    fn from(err: ConfigError) -> Self {
        let message = err.to_string();
        ServiceError::categorized_with_cause(ErrorCategory::Config, message, Arc::new(err))
    }
}
