//! Persisted settings store
//!
//! One JSON document at a fixed relative path, loaded once per invocation.
//! Load is infallible: unreadable or malformed documents fall back to the
//! built-in defaults wholesale, and a missing document is created as a side
//! effect. Save failures are soft - the in-memory settings still stand.

use super::settings::{Settings, DEFAULT_MODEL};
use crate::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

/// Well-known settings file name, resolved against the working directory
pub const CONFIG_FILE: &str = "mimir_config.json";

/// Handle on the on-disk settings document
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store at the well-known location
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(CONFIG_FILE),
        }
    }

    /// Create a store at an explicit path
    pub fn at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings, merging the on-disk document over built-in
    /// defaults and enforcing the default-model override.
    ///
    /// A missing document is written out fresh; an existing document is
    /// never overwritten here, even when malformed.
    pub async fn load(&self) -> Settings {
        let mut settings = if self.path.exists() {
            match self.read().await {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("⚠️  Error loading config: {}", e);
                    warn!("Using default TinyLlama configuration...");
                    Settings::default()
                }
            }
        } else {
            let defaults = Settings::default();
            match self.save(&defaults).await {
                Ok(()) => info!("📝 Created default config file: {}", self.path.display()),
                Err(e) => warn!("⚠️  Could not create config file: {}", e),
            }
            defaults
        };

        settings.apply_default_model_override();
        if settings.use_default_model {
            info!("🦙 Using default model: {}", DEFAULT_MODEL);
        } else {
            info!("🤖 Using configured model: {}", settings.model);
        }

        settings
    }

    async fn read(&self) -> Result<Settings> {
        let content = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the full record as pretty-printed JSON
    pub async fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, content).await?;

        Ok(())
    }

    /// Save, reporting the outcome without escalating failure
    pub async fn persist(&self, settings: &Settings) -> bool {
        match self.save(settings).await {
            Ok(()) => {
                info!("💾 Configuration saved");
                true
            }
            Err(e) => {
                warn!("⚠️  Could not save config: {}", e);
                false
            }
        }
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
