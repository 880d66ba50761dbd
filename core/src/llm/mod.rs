//! Ollama client and message types

pub mod message;
pub mod ollama;

pub use message::{ChatMessage, MessageRole};
pub use ollama::OllamaClient;
