//! HTTP routes.

pub mod tasks;

use axum::{
    routing::{get, post},
    Router,
};
use task_store::TaskStore;

use crate::state::SharedState;

/// Creates the router with all task routes.
pub fn create_router<S: TaskStore + 'static>() -> Router<SharedState<S>> {
    Router::new()
        .route("/", get(tasks::index))
        .route("/insert-task", post(tasks::insert_task))
        .route("/delete-task/{id}", get(tasks::delete_task))
        .route("/edit-task/{id}", get(tasks::edit_form).post(tasks::submit_edit))
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
