pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod schema;
pub mod store;
pub mod validation;

use std::sync::Arc;

/// Application state shared across all handlers
pub type AppState = Arc<store::RecipeStore>;
