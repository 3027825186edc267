//! Failure factory.
//!
//! Free functions that build a [`ServiceError`] of a given category, log it
//! once at `ERROR` level and hand it back. Nothing here returns `Err` or
//! panics; the caller decides whether to propagate the value.
//!
//! Every category gets four forms:
//!
//! | Form                            | Message                          |
//! |---------------------------------|----------------------------------|
//! | `validation(msg)`               | `msg` verbatim                   |
//! | `validation_cause(cause)`       | [`DEFAULT_MESSAGE`]              |
//! | `validation_fmt(tpl, params)`   | `tpl` with `{}` substituted      |
//! | `validation_caused(c, tpl, ps)` | `tpl` with `{}` substituted      |
//!
//! ```
//! use hexa_core::failure;
//!
//! let err = failure::validation_fmt("order {} has {} lines", &[&42, &0]);
//! assert_eq!(err.message(), "order 42 has 0 lines");
//! ```

use std::fmt::Display;

use crate::error::{Cause, ErrorCategory, ServiceError, DEFAULT_MESSAGE};

/// Logged in place of the cause when a failure has none.
pub const NOT_AVAILABLE: &str = "N/A";

fn log_and_return(err: ServiceError) -> ServiceError {
    match err.cause() {
        Some(cause) => tracing::error!(
            category = %err.category(),
            cause = %cause,
            "{}",
            err.message()
        ),
        None => tracing::error!(
            category = %err.category(),
            cause = NOT_AVAILABLE,
            "{}",
            err.message()
        ),
    }
    err
}

// ── Generic constructors ────────────────────────────────────────────────

/// Build and log a failure of `category` (`None` means General).
pub fn of(
    category: impl Into<Option<ErrorCategory>>,
    message: impl Into<String>,
) -> ServiceError {
    log_and_return(ServiceError::compose(category.into(), None, message))
}

pub fn of_cause(category: impl Into<Option<ErrorCategory>>, cause: Cause) -> ServiceError {
    log_and_return(ServiceError::compose(
        category.into(),
        Some(cause),
        DEFAULT_MESSAGE,
    ))
}

pub fn of_fmt(
    category: impl Into<Option<ErrorCategory>>,
    template: &str,
    params: &[&dyn Display],
) -> ServiceError {
    log_and_return(ServiceError::formatted(category.into(), None, template, params))
}

pub fn of_caused(
    category: impl Into<Option<ErrorCategory>>,
    cause: Cause,
    template: &str,
    params: &[&dyn Display],
) -> ServiceError {
    log_and_return(ServiceError::formatted(
        category.into(),
        Some(cause),
        template,
        params,
    ))
}

// ── Per-category constructors ───────────────────────────────────────────

macro_rules! category_constructors {
    ($( $category:ident => $plain:ident, $cause:ident, $fmt:ident, $caused:ident; )+) => {
        $(
            #[doc = concat!("Build and log a `", stringify!($category), "` failure.")]
            pub fn $plain(message: impl Into<String>) -> ServiceError {
                of(ErrorCategory::$category, message)
            }

            #[doc = concat!("Build and log a `", stringify!($category), "` failure from `cause`.")]
            pub fn $cause(cause: Cause) -> ServiceError {
                of_cause(ErrorCategory::$category, cause)
            }

            #[doc = concat!("Build and log a templated `", stringify!($category), "` failure.")]
            pub fn $fmt(template: &str, params: &[&dyn Display]) -> ServiceError {
                of_fmt(ErrorCategory::$category, template, params)
            }

            #[doc = concat!("Build and log a templated `", stringify!($category), "` failure with a cause.")]
            pub fn $caused(
                cause: Cause,
                template: &str,
                params: &[&dyn Display],
            ) -> ServiceError {
                of_caused(ErrorCategory::$category, cause, template, params)
            }
        )+
    };
}

category_constructors! {
    Validation => validation, validation_cause, validation_fmt, validation_caused;
    Service => service, service_cause, service_fmt, service_caused;
    Database => database, database_cause, database_fmt, database_caused;
    Config => config, config_cause, config_fmt, config_caused;
    General => general, general_cause, general_fmt, general_caused;
}

/// Build and log a failure from a `{}` template.
///
/// ```
/// use hexa_core::{failure, ErrorCategory};
/// use std::sync::Arc;
///
/// let err = failure!(Validation, "missing field {}", "name");
/// assert_eq!(err.category(), ErrorCategory::Validation);
///
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// let err = failure!(Database, cause = Arc::new(io), "cannot write {}", "orders");
/// assert!(err.cause().is_some());
/// ```
#[macro_export]
macro_rules! failure {
    ($category:ident, cause = $cause:expr, $template:expr $(, $param:expr)* $(,)?) => {
        $crate::failure::of_caused(
            $crate::ErrorCategory::$category,
            $cause,
            $template,
            &[$(&$param as &dyn ::std::fmt::Display),*],
        )
    };
    ($category:ident, $template:expr $(, $param:expr)* $(,)?) => {
        $crate::failure::of_fmt(
            $crate::ErrorCategory::$category,
            $template,
            &[$(&$param as &dyn ::std::fmt::Display),*],
        )
    };
}
