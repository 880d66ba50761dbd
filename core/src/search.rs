//! Source search engines
//!
//! Three bounded, case-insensitive line searches over external text sources:
//! the interaction log, the shell history, and the NAME section of a man
//! page. A missing source yields an empty result, never an error.

use crate::config::Settings;
use std::path::Path;
use std::process::Stdio;
use tokio::fs;
use tokio::process::Command;
use tokio::time::{timeout, Duration};

/// Returned when the man lookup itself fails (binary missing, timeout)
pub const NO_MAN_PAGE: &str = "No man page found.";

/// Returned when the man page has no recognizable NAME section
pub const NO_SUMMARY: &str = "No man page summary found.";

/// Man lookups are bounded independently of the chat timeout
const MAN_TIMEOUT: Duration = Duration::from_secs(3);

/// Select every line containing `query` as a case-insensitive substring,
/// in source order, trimmed, truncated to the first `limit` matches.
pub fn matching_lines(content: &str, query: &str, limit: usize) -> Vec<String> {
    let needle = query.to_lowercase();
    content
        .lines()
        .filter(|line| line.to_lowercase().contains(&needle))
        .map(|line| line.trim().to_string())
        .take(limit)
        .collect()
}

/// Search previous interactions in the configured log file
pub async fn search_log(settings: &Settings, query: &str) -> Vec<String> {
    read_matches(
        Path::new(&settings.log_file),
        query,
        settings.max_history_search,
    )
    .await
}

/// Search the user's shell history, tilde-expanding the configured path
pub async fn search_shell_history(settings: &Settings, query: &str) -> Vec<String> {
    let path = shellexpand::tilde(&settings.bash_history).into_owned();
    read_matches(Path::new(&path), query, settings.max_history_search).await
}

async fn read_matches(path: &Path, query: &str, limit: usize) -> Vec<String> {
    match fs::read_to_string(path).await {
        Ok(content) => matching_lines(&content, query, limit),
        Err(_) => Vec::new(),
    }
}

/// Look up the NAME-section summary of a man page.
///
/// Runs `man <term>` with its diagnostic stream discarded, bounded by a
/// short timeout. Every failure mode degrades to a fixed sentinel string.
pub async fn man_page_summary(term: &str) -> String {
    let output = Command::new("man")
        .arg(term)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .output();

    let output = match timeout(MAN_TIMEOUT, output).await {
        Ok(Ok(output)) => output,
        _ => return NO_MAN_PAGE.to_string(),
    };

    let text = String::from_utf8_lossy(&output.stdout);
    extract_name_section(&text).unwrap_or_else(|| NO_SUMMARY.to_string())
}

/// Extract the content strictly between a line that is exactly `NAME` and
/// the next line whose first character is an ASCII uppercase letter.
pub fn extract_name_section(text: &str) -> Option<String> {
    let mut lines = text.lines();
    lines.by_ref().find(|line| *line == "NAME")?;

    let mut section = Vec::new();
    for line in lines {
        if line.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
            let body = section.join("\n");
            let trimmed = body.trim();
            if trimmed.is_empty() {
                return None;
            }
            return Some(trimmed.to_string());
        }
        section.push(line);
    }

    // NAME section never terminated by another heading
    None
}
