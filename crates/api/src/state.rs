use std::sync::Arc;

use movies_db::MovieStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory movie records, seeded at startup.
    pub store: Arc<MovieStore>,
    /// Server configuration (the Origin gate reads the allow-list from here).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: MovieStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
