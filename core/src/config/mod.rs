//! Configuration module for Mimir core
//!
//! Typed settings plus the on-disk store that loads and persists them.

pub mod settings;
pub mod store;

pub use settings::{Profile, Settings, DEFAULT_MODEL};
pub use store::{SettingsStore, CONFIG_FILE};
