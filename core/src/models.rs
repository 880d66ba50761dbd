//! Model selection and the favorites ledger
//!
//! Reconciles the three sources of truth for the active model: the
//! hard-coded default, the persisted explicit choice, and a pick from the
//! live roster. Operations that change the durable choice persist
//! immediately; persistence failure is reported by the store, never fatal.

use crate::config::{Settings, SettingsStore, DEFAULT_MODEL};
use crate::llm::OllamaClient;
use tracing::info;

/// Result of an explicit model set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetModelOutcome {
    /// Model accepted, settings mutated and persisted
    Applied,

    /// The roster is non-empty and does not contain the requested model;
    /// settings untouched. Carries the roster for display.
    NotFound { roster: Vec<String> },
}

/// One classified answer to the interactive selection prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Empty input: keep the current setup
    KeepCurrent,

    /// Option 0: reset to the hard-coded default
    ResetDefault,

    /// A valid 1-based roster index, converted to 0-based
    Pick(usize),

    /// Out-of-range, non-numeric, or interrupted input
    Invalid,
}

/// Set the active model after checking it against the live roster.
///
/// An empty roster (server unreachable) skips the existence check. On
/// acceptance the default-model override is cleared and the settings are
/// persisted immediately.
pub async fn set_model(
    store: &SettingsStore,
    client: &OllamaClient,
    settings: &mut Settings,
    name: &str,
) -> SetModelOutcome {
    let roster = client.roster().await;
    if !roster.is_empty() && !roster.iter().any(|m| m == name) {
        return SetModelOutcome::NotFound { roster };
    }

    settings.model = name.to_string();
    settings.use_default_model = false;
    info!("🤖 Set model to: {}", name);
    info!("🔧 Disabled default TinyLlama behavior - will use your chosen model");
    store.persist(settings).await;

    SetModelOutcome::Applied
}

/// Reset to always use the hard-coded default model, persisting immediately
pub async fn reset_to_default(store: &SettingsStore, settings: &mut Settings) {
    settings.model = DEFAULT_MODEL.to_string();
    settings.use_default_model = true;
    info!("🦙 Reset to default model: {}", DEFAULT_MODEL);
    info!("🔧 Enabled default behavior - will always use TinyLlama unless overridden");
    store.persist(settings).await;
}

/// Classify one line of interactive input against a roster of `roster_len`
/// entries. Never fails: anything unrecognized is [`Selection::Invalid`].
pub fn parse_selection(input: &str, roster_len: usize) -> Selection {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Selection::KeepCurrent;
    }

    match trimmed.parse::<usize>() {
        Ok(0) => Selection::ResetDefault,
        Ok(i) if i <= roster_len => Selection::Pick(i - 1),
        _ => Selection::Invalid,
    }
}

/// Remember a model name. Duplicates are a reported no-op; additions are
/// persisted immediately.
pub async fn add_favorite(store: &SettingsStore, settings: &mut Settings, name: &str) -> bool {
    if !settings.add_favorite(name) {
        info!("⭐ '{}' is already in favorites", name);
        return false;
    }

    info!("⭐ Added '{}' to favorites", name);
    store.persist(settings).await;
    true
}

/// Annotate each favorite with its availability in the live roster
pub fn annotate_favorites<'a>(favorites: &'a [String], roster: &[String]) -> Vec<(&'a str, bool)> {
    favorites
        .iter()
        .map(|name| (name.as_str(), roster.iter().any(|m| m == name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn selection_covers_all_prompt_outcomes() {
        assert_eq!(parse_selection("", 3), Selection::KeepCurrent);
        assert_eq!(parse_selection("  \n", 3), Selection::KeepCurrent);
        assert_eq!(parse_selection("0", 3), Selection::ResetDefault);
        assert_eq!(parse_selection("1", 3), Selection::Pick(0));
        assert_eq!(parse_selection("3", 3), Selection::Pick(2));
        assert_eq!(parse_selection("4", 3), Selection::Invalid);
        assert_eq!(parse_selection("-1", 3), Selection::Invalid);
        assert_eq!(parse_selection("two", 3), Selection::Invalid);
    }

    #[test]
    fn favorites_are_annotated_against_the_roster() {
        let favorites = vec!["tinyllama:latest".to_string(), "mistral:latest".to_string()];
        let roster = vec!["tinyllama:latest".to_string()];

        assert_eq!(
            annotate_favorites(&favorites, &roster),
            vec![("tinyllama:latest", true), ("mistral:latest", false)]
        );
    }

    #[tokio::test]
    async fn set_model_skips_existence_check_on_empty_roster_and_persists() {
        let temp_dir = tempdir().unwrap();
        let store = SettingsStore::at(temp_dir.path().join("mimir_config.json"));
        // Unreachable server degrades the roster to empty
        let client = OllamaClient::new("http://127.0.0.1:1");
        let mut settings = Settings::default();

        let outcome = set_model(&store, &client, &mut settings, "codellama:latest").await;

        assert_eq!(outcome, SetModelOutcome::Applied);
        assert_eq!(settings.model, "codellama:latest");
        assert!(!settings.use_default_model);

        let on_disk: Settings =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk.model, "codellama:latest");
        assert!(!on_disk.use_default_model);
    }

    #[tokio::test]
    async fn reset_restores_the_default_model_and_flag() {
        let temp_dir = tempdir().unwrap();
        let store = SettingsStore::at(temp_dir.path().join("mimir_config.json"));
        let mut settings = Settings {
            model: "mistral:latest".to_string(),
            use_default_model: false,
            ..Settings::default()
        };

        reset_to_default(&store, &mut settings).await;

        assert_eq!(settings.model, DEFAULT_MODEL);
        assert!(settings.use_default_model);
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn duplicate_favorite_is_a_no_op_without_disk_write() {
        let temp_dir = tempdir().unwrap();
        let store = SettingsStore::at(temp_dir.path().join("mimir_config.json"));
        let mut settings = Settings::default();

        assert!(!add_favorite(&store, &mut settings, "tinyllama:latest").await);
        assert!(!store.path().exists());

        assert!(add_favorite(&store, &mut settings, "qwen2:0.5b").await);
        assert!(store.path().exists());
        assert_eq!(
            settings.favorite_models.last().map(String::as_str),
            Some("qwen2:0.5b")
        );
    }
}
