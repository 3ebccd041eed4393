//! Application state.

use std::sync::Arc;

use task_store::TaskStore;

use crate::views::Views;

/// Shared application state.
pub struct AppState<S: TaskStore> {
    /// Task store.
    pub store: S,
    /// Registered HTML views.
    pub views: Views,
}

impl<S: TaskStore> AppState<S> {
    /// Creates new application state.
    pub fn new(store: S, views: Views) -> Self {
        Self { store, views }
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from a store and registered views.
pub fn create_shared_state<S: TaskStore>(store: S, views: Views) -> SharedState<S> {
    Arc::new(AppState::new(store, views))
}
