//! Task CRUD handlers.
//!
//! Handlers are best-effort: a datastore error is logged and answered with a
//! fallback view or a redirect to the list, never an error page. An id with
//! no matching row is a no-op, not an error.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use task_store::TaskStore;
use tracing::{error, info};

use crate::state::SharedState;

/// Form body for the create and edit operations.
#[derive(Debug, Deserialize)]
pub struct TaskForm {
    /// Task text.
    pub task: String,
}

/// `GET /` renders the list view with all tasks.
pub async fn index<S: TaskStore>(State(state): State<SharedState<S>>) -> Response {
    let tasks = match state.store.list_tasks().await {
        Ok(tasks) => tasks,
        Err(error) => {
            error!(%error, "Failed to fetch tasks for the list view");
            Vec::new()
        }
    };

    Html(state.views.index(&tasks)).into_response()
}

/// `POST /insert-task` inserts a task and redirects to the list.
pub async fn insert_task<S: TaskStore>(
    State(state): State<SharedState<S>>,
    Form(form): Form<TaskForm>,
) -> Response {
    match state.store.insert_task(&form.task).await {
        Ok(task) => {
            info!(id = task.id, "Task created");
            redirect_to_index()
        }
        Err(error) => {
            error!(%error, "Failed to insert task");
            Html(state.views.index(&[])).into_response()
        }
    }
}

/// `GET /delete-task/{id}` deletes a task and redirects to the list.
pub async fn delete_task<S: TaskStore>(
    State(state): State<SharedState<S>>,
    Path(id): Path<u64>,
) -> Response {
    let Some(id) = to_row_id(id) else {
        return redirect_to_index();
    };

    match state.store.delete_task(id).await {
        Ok(()) => {
            info!(id, "Task deleted");
            redirect_to_index()
        }
        Err(error) => {
            error!(id, %error, "Failed to delete task");
            Html(state.views.index(&[])).into_response()
        }
    }
}

/// `GET /edit-task/{id}` renders the edit view for one task.
///
/// An absent id still renders the view, just without task data.
pub async fn edit_form<S: TaskStore>(
    State(state): State<SharedState<S>>,
    Path(id): Path<u64>,
) -> Response {
    let Some(id) = to_row_id(id) else {
        return Html(state.views.edit(None)).into_response();
    };

    match state.store.get_task(id).await {
        Ok(task) => Html(state.views.edit(task.as_ref())).into_response(),
        Err(error) => {
            error!(id, %error, "Failed to fetch task for editing");
            redirect_to_index()
        }
    }
}

/// `POST /edit-task/{id}` updates a task's text and redirects to the list.
pub async fn submit_edit<S: TaskStore>(
    State(state): State<SharedState<S>>,
    Path(id): Path<u64>,
    Form(form): Form<TaskForm>,
) -> Response {
    let Some(id) = to_row_id(id) else {
        return redirect_to_index();
    };

    match state.store.update_task(id, &form.task).await {
        Ok(()) => {
            info!(id, "Task updated");
            redirect_to_index()
        }
        Err(error) => {
            error!(id, %error, "Failed to update task");
            redirect_to_index()
        }
    }
}

/// Sends the browser back to the list view with a `302 Found`.
fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

/// Converts a path id to a row id.
///
/// Row ids are signed 64-bit; anything larger can never match a row and is
/// treated like an absent id.
fn to_row_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}
