//! Tasklist server
//!
//! A single-user todo list web application: axum routes over a
//! SQLite-backed task store, rendering server-side HTML views.

pub mod config;
pub mod routes;
pub mod state;
pub mod views;

use axum::Router;
use task_store::TaskStore;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

/// Creates the application router with all routes configured.
pub fn create_app<S: TaskStore + 'static>(state: SharedState<S>) -> Router {
    routes::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
