//! # Mimir CLI
//!
//! Command-line interface for Mimir - a terminal troubleshooting assistant.
//!
//! ## Usage
//!
//! - `mimir "your question"` - Ask for a shell command suggestion
//! - `mimir "apt" --logs --history` - Cross-reference your own records
//! - `mimir --select-model` - Pick a model from the live roster
//!
//! Special commands are evaluated in a fixed precedence order; the first
//! match reports and exits. The three search flags compose with a query
//! instead of short-circuiting.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mimir_core::config::SettingsStore;

mod commands;

use commands::QueryFlags;

/// Mimir - Terminal Troubleshooting Assistant
#[derive(Parser)]
#[command(name = "mimir")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "🧠 Mimir - Terminal Troubleshooting Assistant")]
#[command(long_about = None)]
struct Cli {
    /// Your prompt in quotes
    query: Option<String>,

    /// Search previous Mimir logs
    #[arg(long)]
    logs: bool,

    /// Search your Bash history
    #[arg(long)]
    history: bool,

    /// Search local man pages
    #[arg(long)]
    man: bool,

    /// Switch to model profile (lightweight/balanced/powerful)
    #[arg(long)]
    profile: Option<String>,

    /// Show current configuration
    #[arg(long = "config")]
    show_config: bool,

    /// List available Ollama models
    #[arg(long)]
    models: bool,

    /// Set the LLM model to use
    #[arg(long)]
    model: Option<String>,

    /// Interactive model selection
    #[arg(long)]
    select_model: bool,

    /// Show favorite models
    #[arg(long)]
    favorites: bool,

    /// Add a model to favorites
    #[arg(long)]
    add_favorite: Option<String>,

    /// Set temperature (0.0-1.0)
    #[arg(long = "temp")]
    temperature: Option<f32>,

    /// Reset to always use TinyLlama as default
    #[arg(long)]
    reset_default: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    mimir_core::init_tracing_with_debug(cli.verbose);

    let store = SettingsStore::new();
    let mut settings = store.load().await;

    // Special commands short-circuit in a fixed precedence order
    if cli.show_config {
        commands::show_config(&settings);
        return Ok(());
    }

    if cli.models {
        commands::list_models(&settings).await;
        return Ok(());
    }

    if let Some(name) = &cli.profile {
        commands::switch_profile(&mut settings, name);
        return Ok(());
    }

    if let Some(name) = &cli.model {
        commands::set_model(&store, &mut settings, name).await;
        return Ok(());
    }

    if cli.select_model {
        commands::select_model(&store, &mut settings).await;
        return Ok(());
    }

    if cli.favorites {
        commands::show_favorites(&settings).await;
        return Ok(());
    }

    if let Some(name) = &cli.add_favorite {
        commands::add_favorite(&store, &mut settings, name).await;
        return Ok(());
    }

    if cli.reset_default {
        commands::reset_default(&store, &mut settings).await;
        return Ok(());
    }

    if let Some(value) = cli.temperature {
        commands::set_temperature(&store, &mut settings, value).await;
        return Ok(());
    }

    // Only the query path remains; without a query there is nothing to route
    let query = cli.query.as_deref().map(str::trim).unwrap_or("");
    if query.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    commands::run_query(
        &settings,
        query,
        QueryFlags {
            logs: cli.logs,
            history: cli.history,
            man: cli.man,
        },
    )
    .await;

    Ok(())
}
