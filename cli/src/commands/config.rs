//! Configuration reporting and tuning commands

use colored::Colorize;
use mimir_core::config::{Settings, SettingsStore};

/// Print the resolved configuration
pub fn show_config(settings: &Settings) {
    let default_status = if settings.use_default_model {
        "🦙 TinyLlama (default)"
    } else {
        "🤖 User configured"
    };

    println!("🔧 Current Configuration:");
    println!("   Model: {} ({})", settings.model, default_status);
    println!("   Temperature: {}", settings.temperature);
    println!("   Ollama URL: {}", settings.ollama_url);
    println!("   Max Response Length: {}", settings.max_response_length);
    println!("   Available Profiles: {:?}", settings.profile_names());
    println!("   Log File: {}", settings.log_file);
    println!("   Use Default Model: {}", settings.use_default_model);
}

/// Apply a named profile for this invocation only (never persisted)
pub fn switch_profile(settings: &mut Settings, name: &str) {
    if settings.apply_profile(name) {
        println!("🔄 Switched to '{}' profile", name);
        println!("   Model: {}", settings.model);
        println!("   Temperature: {}", settings.temperature);
    } else {
        println!("{}", format!("❌ Profile '{}' not found", name).red());
        println!("Available profiles: {:?}", settings.profile_names());
    }
}

/// Set and persist the sampling temperature; out-of-range values are
/// rejected without touching memory or disk
pub async fn set_temperature(store: &SettingsStore, settings: &mut Settings, value: f32) {
    match settings.set_temperature(value) {
        Ok(()) => {
            println!("🌡️  Set temperature to: {}", value);
            store.persist(settings).await;
        }
        Err(_) => {
            println!("{}", "❌ Temperature must be between 0.0 and 1.0".red());
        }
    }
}
