//! Shared utilities.
//!
//! - [`app_data`] - Configuration file in the app data directory
//! - [`fs`] - Filesystem capability used by the scanner
//! - [`progress`] - Spinner that compiles to a no-op without the `progress` feature

pub mod app_data;
pub mod fs;
pub mod progress;

pub use app_data::*;
pub use fs::*;
pub use progress::*;
