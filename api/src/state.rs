//! Shared application state.

use std::sync::Arc;

use shared::{Config, Store};

/// State handed to every route handler. The store is injected rather
/// than reached through a global, so tests can run against an
/// isolated in-memory instance.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Store, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
