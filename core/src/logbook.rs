//! Interaction logger
//!
//! Appends a timestamped query/reply/model record per interaction to the
//! configured log file, creating it if absent. Callers treat a write
//! failure as a non-fatal warning - the reply was already displayed.

use crate::config::Settings;
use crate::error::Result;
use chrono::Local;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Append one interaction record to the configured log
pub async fn record(settings: &Settings, query: &str, reply: &str) -> Result<()> {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let entry = format!(
        "[{ts}] USER: {query}\n[{ts}] BOT: {reply}\n[{ts}] MODEL: {model}\n\n",
        ts = timestamp,
        query = query,
        reply = reply,
        model = settings.model,
    );

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_file)
        .await?;
    file.write_all(entry.as_bytes()).await?;
    file.flush().await?;

    Ok(())
}
