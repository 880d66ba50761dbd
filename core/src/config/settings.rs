//! Typed settings with built-in defaults
//!
//! Every field carries an explicit serde default, so a partial on-disk
//! document merges per-key against the built-in record: keys present on disk
//! win, missing keys fall back. Unknown or malformed documents are handled
//! wholesale by the store, never field-by-field.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The hard-coded lightweight default model, used whenever
/// `use_default_model` is set.
pub const DEFAULT_MODEL: &str = "tinyllama:latest";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_max_response_length() -> u32 {
    50
}

fn default_log_file() -> String {
    "mimir_history.log".to_string()
}

fn default_bash_history() -> String {
    "~/.bash_history".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_history_search() -> usize {
    20
}

fn default_use_default_model() -> bool {
    true
}

fn default_profiles() -> BTreeMap<String, Profile> {
    let mut profiles = BTreeMap::new();
    profiles.insert(
        "lightweight".to_string(),
        Profile {
            model: Some("tinyllama:latest".to_string()),
            temperature: Some(0.1),
            max_response_length: Some(30),
        },
    );
    profiles.insert(
        "balanced".to_string(),
        Profile {
            model: Some("llama3.2:1b".to_string()),
            temperature: Some(0.2),
            max_response_length: Some(50),
        },
    );
    profiles.insert(
        "powerful".to_string(),
        Profile {
            model: Some("llama3.2:3b".to_string()),
            temperature: Some(0.1),
            max_response_length: Some(100),
        },
    );
    profiles
}

fn default_favorite_models() -> Vec<String> {
    vec![
        "tinyllama:latest".to_string(),
        "llama3.2:1b".to_string(),
        "llama3.2:3b".to_string(),
        "codellama:latest".to_string(),
        "mistral:latest".to_string(),
    ]
}

/// A named bundle of overrides applied atomically onto the active settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Model to switch to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Sampling temperature override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Reply length hint override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_response_length: Option<u32>,
}

/// The full persisted configuration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Active model identifier (advisory while `use_default_model` is set)
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Ollama server
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,

    /// Sampling temperature, 0.0 to 1.0 inclusive
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Reply length hint, not forwarded to the server
    #[serde(default = "default_max_response_length")]
    pub max_response_length: u32,

    /// Forwarded verbatim in the chat request body
    #[serde(default)]
    pub stream_responses: bool,

    /// Interaction log path
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Shell history path, tilde-expanded at read time
    #[serde(default = "default_bash_history")]
    pub bash_history: String,

    /// Chat request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Maximum number of search results per source
    #[serde(default = "default_max_history_search")]
    pub max_history_search: usize,

    /// When set, the effective model is always [`DEFAULT_MODEL`]
    #[serde(default = "default_use_default_model")]
    pub use_default_model: bool,

    /// Named override bundles
    #[serde(default = "default_profiles")]
    pub profiles: BTreeMap<String, Profile>,

    /// Remembered model names, deduplicated, order-preserving
    #[serde(default = "default_favorite_models")]
    pub favorite_models: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: default_model(),
            ollama_url: default_ollama_url(),
            temperature: default_temperature(),
            max_response_length: default_max_response_length(),
            stream_responses: false,
            log_file: default_log_file(),
            bash_history: default_bash_history(),
            timeout_seconds: default_timeout_seconds(),
            max_history_search: default_max_history_search(),
            use_default_model: default_use_default_model(),
            profiles: default_profiles(),
            favorite_models: default_favorite_models(),
        }
    }
}

impl Settings {
    /// Enforce the default-model invariant: while `use_default_model` is
    /// set, the persisted `model` key is advisory only.
    pub fn apply_default_model_override(&mut self) {
        if self.use_default_model {
            self.model = DEFAULT_MODEL.to_string();
        }
    }

    /// Apply a named profile's overrides onto the active settings.
    ///
    /// Every key present in the bundle replaces the corresponding field.
    /// Returns false (settings untouched) for an unknown profile name.
    pub fn apply_profile(&mut self, name: &str) -> bool {
        let Some(profile) = self.profiles.get(name).cloned() else {
            return false;
        };

        if let Some(model) = profile.model {
            self.model = model;
        }
        if let Some(temperature) = profile.temperature {
            self.temperature = temperature;
        }
        if let Some(max_response_length) = profile.max_response_length {
            self.max_response_length = max_response_length;
        }

        true
    }

    /// Valid profile names, for error-recovery hints
    pub fn profile_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// Set the sampling temperature, rejecting values outside 0.0 to 1.0
    /// inclusive without mutating anything.
    pub fn set_temperature(&mut self, value: f32) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::InvalidValue {
                field: "temperature".to_string(),
                value: value.to_string(),
            });
        }

        self.temperature = value;
        Ok(())
    }

    /// Append a model to the favorites list. Returns false if it was
    /// already present (the list is left untouched).
    pub fn add_favorite(&mut self, name: &str) -> bool {
        if self.favorite_models.iter().any(|m| m == name) {
            return false;
        }

        self.favorite_models.push(name.to_string());
        true
    }
}
