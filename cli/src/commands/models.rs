//! Model roster, selection, and favorites commands

use colored::Colorize;
use mimir_core::config::{Settings, SettingsStore};
use mimir_core::llm::OllamaClient;
use mimir_core::models::{self, Selection, SetModelOutcome};
use std::io::{self, BufRead, Write};

/// List the live roster with the active model annotated
pub async fn list_models(settings: &Settings) {
    let client = OllamaClient::from_settings(settings);
    match client.available_models().await {
        Ok(roster) => {
            println!("🤖 Available Ollama Models:");
            for model in roster {
                let current = if model == settings.model { " (current)" } else { "" };
                println!("   - {}{}", model, current);
            }
        }
        Err(e) => {
            println!("{}", format!("❌ Could not fetch models: {}", e).red());
        }
    }
}

/// Set the active model, printing the roster when the name is rejected
pub async fn set_model(store: &SettingsStore, settings: &mut Settings, name: &str) {
    let client = OllamaClient::from_settings(settings);
    match models::set_model(store, &client, settings, name).await {
        SetModelOutcome::Applied => {}
        SetModelOutcome::NotFound { roster } => {
            println!("⚠️  Model '{}' not found in available models", name);
            println!("Available models:");
            for model in roster {
                println!("   - {}", model);
            }
        }
    }
}

/// Interactive model selection against the live roster.
///
/// One synchronous prompt with three outcomes: empty input keeps the
/// current setup, `0` resets to the default, a valid index sets that
/// model. Everything else is reported as invalid and changes nothing.
pub async fn select_model(store: &SettingsStore, settings: &mut Settings) {
    let client = OllamaClient::from_settings(settings);
    let roster = client.roster().await;
    if roster.is_empty() {
        println!(
            "{}",
            "❌ No models available. Please check your Ollama installation.".red()
        );
        return;
    }

    let behavior = if settings.use_default_model {
        "Using TinyLlama default"
    } else {
        "Using configured model"
    };
    println!("\n🦙 Current behavior: {}", behavior);
    println!("🤖 Current model: {}", settings.model);
    println!("\n🤖 Available Models:");
    println!("   0. 🦙 Reset to TinyLlama default");
    for (i, model) in roster.iter().enumerate() {
        let current = if *model == settings.model { " (current)" } else { "" };
        println!("   {}. {}{}", i + 1, model, current);
    }

    print!(
        "\nSelect model (0-{}) or press Enter to keep current: ",
        roster.len()
    );
    let _ = io::stdout().flush();

    let mut input = String::new();
    let selection = match io::stdin().lock().read_line(&mut input) {
        Ok(_) => models::parse_selection(&input, roster.len()),
        Err(_) => Selection::Invalid,
    };

    match selection {
        Selection::KeepCurrent => println!("🤖 Keeping current setup"),
        Selection::ResetDefault => models::reset_to_default(store, settings).await,
        Selection::Pick(index) => set_model(store, settings, &roster[index]).await,
        Selection::Invalid => println!("{}", "❌ Invalid input or cancelled".red()),
    }
}

/// Reset to the hard-coded default model
pub async fn reset_default(store: &SettingsStore, settings: &mut Settings) {
    models::reset_to_default(store, settings).await;
}

/// Show favorites annotated against the live roster. An empty ledger is
/// reported without fetching the roster at all.
pub async fn show_favorites(settings: &Settings) {
    if settings.favorite_models.is_empty() {
        println!("⭐ No favorite models set");
        return;
    }

    let client = OllamaClient::from_settings(settings);
    let roster = client.roster().await;

    println!("⭐ Favorite Models:");
    let annotated = models::annotate_favorites(&settings.favorite_models, &roster);
    for (i, (name, available)) in annotated.iter().enumerate() {
        let status = if *available { "✅" } else { "❌" };
        let current = if *name == settings.model.as_str() {
            " (current)"
        } else {
            ""
        };
        println!("   {}. {} {}{}", i + 1, status, name, current);
    }
}

/// Remember a model in the favorites ledger
pub async fn add_favorite(store: &SettingsStore, settings: &mut Settings, name: &str) {
    models::add_favorite(store, settings, name).await;
}
