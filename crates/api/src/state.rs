use std::sync::Arc;

use kanban_db::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Category and task store, opened once at startup.
    pub store: Store,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
