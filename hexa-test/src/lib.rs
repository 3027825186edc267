//! Test utilities for hexa.
//!
//! [`MemoryStore`] implements every use-case trait over a `Vec` behind a
//! `RwLock`, and [`LogCapture`] records what the failure factory logs.

mod logs;
mod memory;

pub use logs::{CaptureWriter, LogCapture};
pub use memory::MemoryStore;
