//! Request routing for a user query
//!
//! The search flags are additive: each set flag prints its section in the
//! fixed order logs, history, man. Only when none is set does the query go
//! to the model, followed by exactly one interaction-log record.

use colored::Colorize;
use mimir_core::config::Settings;
use mimir_core::llm::OllamaClient;
use mimir_core::{logbook, search, synthesis};
use tracing::warn;

/// The three query-augmenting flags
pub struct QueryFlags {
    pub logs: bool,
    pub history: bool,
    pub man: bool,
}

impl QueryFlags {
    fn any(&self) -> bool {
        self.logs || self.history || self.man
    }
}

/// Route one query to the selected sources, or to command synthesis when
/// no source flag is set
pub async fn run_query(settings: &Settings, query: &str, flags: QueryFlags) {
    println!("\n🧾 Prompt: {}", query);
    println!(
        "🤖 Using: {} (temp: {})",
        settings.model, settings.temperature
    );

    if flags.logs {
        println!("\n{}", "🔍 Logs:".bold());
        for line in search::search_log(settings, query).await {
            println!("   {}", line);
        }
    }

    if flags.history {
        println!("\n{}", "📜 Bash History:".bold());
        for line in search::search_shell_history(settings, query).await {
            println!("   {}", line);
        }
    }

    if flags.man {
        let term = query.split_whitespace().next().unwrap_or(query);
        println!(
            "\n{}",
            format!("📘 Man Page Summary for '{}':", term).bold()
        );
        println!("   {}", search::man_page_summary(term).await);
    }

    if !flags.any() {
        let client = OllamaClient::from_settings(settings);
        let reply = synthesis::synthesize(&client, settings, query).await;
        println!("\n🤖 Mimir Says:\n   {}", reply);

        if let Err(e) = logbook::record(settings, query, &reply).await {
            warn!("⚠️  Could not write interaction log: {}", e);
        }
    }
}
