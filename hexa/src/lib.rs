//! hexa: use-case contracts and categorized failures for hexagonal services.
//!
//! This facade crate re-exports the hexa sub-crates through a single
//! dependency with feature flags. Import everything you need with:
//!
//! ```ignore
//! use hexa::prelude::*;
//! ```
//!
//! # Feature flags
//!
//! | Feature | Default | Crate                                   |
//! |---------|---------|-----------------------------------------|
//! | `data`  | **yes** | `hexa-data` (use cases, `Page`, guards) |

pub extern crate hexa_core;

// Re-export everything from hexa-core at the top level for convenience.
pub use hexa_core::*;

#[cfg(feature = "data")]
pub use hexa_data;

/// Unified prelude, import everything with `use hexa::prelude::*`.
pub mod prelude {
    pub use hexa_core::prelude::*;

    #[cfg(feature = "data")]
    pub use hexa_data::prelude::*;
}
