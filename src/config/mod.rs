//! Configuration module for finboard
//!
//! - Base directory resolution (env override, platform default)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinboardPaths;
pub use settings::Settings;
