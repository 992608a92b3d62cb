// Handlers Module
// This module contains the API endpoint handlers

pub mod assets;
pub mod health;

pub use assets::create_asset;
pub use health::health_check;

use std::sync::Arc;

use crate::db::Repositories;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub repositories: Arc<Repositories>,
}

impl AppState {
    pub fn new(repositories: Repositories) -> Self {
        Self {
            repositories: Arc::new(repositories),
        }
    }
}
