//! Re-exports of the most commonly used core types.

pub use crate::failure;
pub use crate::{Cause, ErrorCategory, ServiceError, ServiceResult};
