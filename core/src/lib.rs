//! # Mimir Core
//!
//! Core library for Mimir - a terminal troubleshooting assistant backed by a
//! local Ollama server.
//!
//! This library provides the building blocks the CLI composes: persisted
//! settings with profiles and favorites, model selection against the live
//! server roster, bounded searches over logs, shell history, and man pages,
//! and the command-synthesis request pipeline.

// Core modules
pub mod config;
pub mod error;
pub mod llm;
pub mod logbook;
pub mod models;
pub mod search;
pub mod synthesis;

// Re-export commonly used types
pub use config::{Settings, SettingsStore, DEFAULT_MODEL};
pub use error::{Error, Result};
pub use llm::OllamaClient;

/// Current version of the mimir-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
