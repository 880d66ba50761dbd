//! Command synthesis pipeline
//!
//! Wraps the user's query in a fixed instruction contract that constrains
//! the model to a single shell command, and turns every transport failure
//! into a displayable reply so downstream logging stays uniform.

use crate::config::Settings;
use crate::llm::{ChatMessage, OllamaClient};

/// Fixed instruction constraining replies to one shell command, reinforced
/// by worked examples. Output trust is placed entirely in this contract.
pub const COMMAND_SYSTEM_PROMPT: &str = "Reply with ONLY the shell command. Nothing else.\n\
Examples:\n\
User: show running processes\n\
You: ps aux\n\n\
User: check disk space\n\
You: df -h\n\n\
User: find large files\n\
You: find / -size +100M 2>/dev/null\n\n\
NO explanations. NO text. ONLY the command.";

/// Build the two-message exchange for a query
pub fn command_messages(query: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(COMMAND_SYSTEM_PROMPT),
        ChatMessage::user(query),
    ]
}

/// Ask the configured model for a shell command suggestion.
///
/// Never fails: a transport-level error (connection refused, timeout,
/// non-2xx) is returned as a human-readable string in place of the reply.
pub async fn synthesize(client: &OllamaClient, settings: &Settings, query: &str) -> String {
    match client.chat(settings, &command_messages(query)).await {
        Ok(reply) => reply,
        Err(e) => format!("Error connecting to Ollama: {}", e),
    }
}
