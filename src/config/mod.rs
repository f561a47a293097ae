//! Configuration module for the income list
//!
//! - XDG-compliant path resolution
//! - Settings persistence and the budget mode preference

pub mod paths;
pub mod settings;

pub use paths::IncomePaths;
pub use settings::{PreferenceSource, Preferences, Settings};
