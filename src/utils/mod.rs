//! Utility functions shared by the library and the binary.
//!
//! ## Modules
//!
//! - [`logging`] - `tracing` subscriber setup
//! - [`progress`] - Progress bars for tree building (no-op without the
//!   `progress` feature)

pub mod logging;
pub mod progress;
