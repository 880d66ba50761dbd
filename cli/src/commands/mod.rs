//! CLI command implementations

pub mod config;
pub mod models;
pub mod query;

pub use config::{set_temperature, show_config, switch_profile};
pub use models::{
    add_favorite, list_models, reset_default, select_model, set_model, show_favorites,
};
pub use query::{run_query, QueryFlags};
