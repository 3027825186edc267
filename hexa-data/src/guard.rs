//! Argument guards run by the use-case traits before any adapter hook.
//!
//! Every rejection is a `Validation` failure built through
//! [`hexa_core::failure`], so it is logged at the point of detection.

use hexa_core::{failure, ServiceResult};

/// Unwrap a required argument.
pub fn require<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| failure::validation_fmt("{} must be present", &[&name]))
}

/// Unwrap a required collection whose elements are all required.
///
/// The whole collection is checked before anything is returned, so callers
/// never act on a prefix of it.
pub fn require_each<T>(values: Option<Vec<Option<T>>>, name: &str) -> ServiceResult<Vec<T>> {
    let values = require(values, name)?;
    if let Some(index) = values.iter().position(Option::is_none) {
        return Err(failure::validation_fmt(
            "{} contains an absent element at index {}",
            &[&name, &index],
        ));
    }
    Ok(values.into_iter().flatten().collect())
}
