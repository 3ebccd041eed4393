//! HTTP-level tests driving the full router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use task_store::{MemoryTaskStore, SqliteTaskStore};
use tasklist_server::create_app;
use tasklist_server::state::create_shared_state;
use tasklist_server::views::Views;
use tower::ServiceExt;

fn test_app() -> Router {
    let state = create_shared_state(MemoryTaskStore::new(), Views::new().unwrap());
    create_app(state)
}

/// An app whose store can no longer reach its database: the pool is closed,
/// so every store call fails.
async fn broken_store_app() -> Router {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteTaskStore::connect(&dir.path().join("tasks.db"))
        .await
        .unwrap();
    store.pool().close().await;
    create_app(create_shared_state(store, Views::new().unwrap()))
}

async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn assert_redirects_to_index(response: &Response) {
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/"
    );
}

#[tokio::test]
async fn test_empty_list_view() {
    let app = test_app();

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("No tasks yet."));
}

#[tokio::test]
async fn test_task_lifecycle() {
    let app = test_app();

    // Create a task
    let response = post_form(&app, "/insert-task", "task=buy+milk").await;
    assert_redirects_to_index(&response);

    let html = body_string(get(&app, "/").await).await;
    assert!(html.contains("buy milk"));

    // Edit it
    let html = body_string(get(&app, "/edit-task/1").await).await;
    assert!(html.contains("buy milk"));

    let response = post_form(&app, "/edit-task/1", "task=buy+oat+milk").await;
    assert_redirects_to_index(&response);

    let html = body_string(get(&app, "/").await).await;
    assert!(html.contains("buy oat milk"));
    assert!(!html.contains(">buy milk<"));

    // Delete it
    let response = get(&app, "/delete-task/1").await;
    assert_redirects_to_index(&response);

    let html = body_string(get(&app, "/").await).await;
    assert!(html.contains("No tasks yet."));
}

#[tokio::test]
async fn test_delete_missing_id_redirects() {
    let app = test_app();

    let response = get(&app, "/delete-task/42").await;
    assert_redirects_to_index(&response);
}

#[tokio::test]
async fn test_edit_missing_id_renders_notice() {
    let app = test_app();

    let response = get(&app, "/edit-task/42").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("No such task."));
}

#[tokio::test]
async fn test_edit_submit_missing_id_redirects() {
    let app = test_app();

    let response = post_form(&app, "/edit-task/42", "task=anything").await;
    assert_redirects_to_index(&response);

    // Nothing was created as a side effect
    let html = body_string(get(&app, "/").await).await;
    assert!(html.contains("No tasks yet."));
}

#[tokio::test]
async fn test_id_beyond_row_id_range_is_treated_as_missing() {
    let app = test_app();

    // One past i64::MAX
    let response = get(&app, "/delete-task/9223372036854775808").await;
    assert_redirects_to_index(&response);

    let response = get(&app, "/edit-task/9223372036854775808").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("No such task."));
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let app = test_app();

    let response = get(&app, "/delete-task/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(&app, "/edit-task/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_negative_id_is_rejected() {
    let app = test_app();

    let response = get(&app, "/delete-task/-1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_insert_without_task_field_is_rejected() {
    let app = test_app();

    let response = post_form(&app, "/insert-task", "other=value").await;
    assert!(response.status().is_client_error());

    // Nothing was created
    let html = body_string(get(&app, "/").await).await;
    assert!(html.contains("No tasks yet."));
}

#[tokio::test]
async fn test_task_text_is_escaped_in_list_view() {
    let app = test_app();

    let response = post_form(
        &app,
        "/insert-task",
        "task=%3Cscript%3Ealert(1)%3C%2Fscript%3E",
    )
    .await;
    assert_redirects_to_index(&response);

    let html = body_string(get(&app, "/").await).await;
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn test_lifecycle_against_sqlite_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteTaskStore::connect(&dir.path().join("tasks.db"))
        .await
        .unwrap();
    let app = create_app(create_shared_state(store, Views::new().unwrap()));

    let response = post_form(&app, "/insert-task", "task=water+plants").await;
    assert_redirects_to_index(&response);

    // First row gets id 1
    let html = body_string(get(&app, "/").await).await;
    assert!(html.contains("water plants"));
    assert!(html.contains("/edit-task/1"));

    let response = post_form(&app, "/edit-task/1", "task=water+the+garden").await;
    assert_redirects_to_index(&response);

    let html = body_string(get(&app, "/").await).await;
    assert!(html.contains("water the garden"));

    let response = get(&app, "/delete-task/1").await;
    assert_redirects_to_index(&response);

    let html = body_string(get(&app, "/").await).await;
    assert!(html.contains("No tasks yet."));
}

#[tokio::test]
async fn test_list_orders_tasks_by_id() {
    let app = test_app();

    post_form(&app, "/insert-task", "task=first").await;
    post_form(&app, "/insert-task", "task=second").await;
    post_form(&app, "/insert-task", "task=third").await;

    let html = body_string(get(&app, "/").await).await;
    let first = html.find("first").unwrap();
    let second = html.find("second").unwrap();
    let third = html.find("third").unwrap();
    assert!(first < second);
    assert!(second < third);
}

#[tokio::test]
async fn test_edit_form_prefills_current_text() {
    let app = test_app();

    post_form(&app, "/insert-task", "task=call+the+dentist").await;

    let html = body_string(get(&app, "/edit-task/1").await).await;
    assert!(html.contains(r#"value="call the dentist""#));
    assert!(html.contains(r#"action="/edit-task/1""#));
}

#[tokio::test]
async fn test_list_renders_empty_when_store_fails() {
    let app = broken_store_app().await;

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("No tasks yet."));
}

#[tokio::test]
async fn test_insert_failure_falls_back_to_list_view() {
    let app = broken_store_app().await;

    // The failure answer is the list view itself, not a redirect to it.
    let response = post_form(&app, "/insert-task", "task=buy+milk").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::LOCATION).is_none());

    let html = body_string(response).await;
    assert!(html.contains("No tasks yet."));
}

#[tokio::test]
async fn test_delete_failure_renders_list_view() {
    let app = broken_store_app().await;

    let response = get(&app, "/delete-task/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("No tasks yet."));
}

#[tokio::test]
async fn test_edit_form_failure_redirects_to_list() {
    let app = broken_store_app().await;

    let response = get(&app, "/edit-task/1").await;
    assert_redirects_to_index(&response);
}

#[tokio::test]
async fn test_edit_submit_failure_redirects_to_list() {
    let app = broken_store_app().await;

    let response = post_form(&app, "/edit-task/1", "task=anything").await;
    assert_redirects_to_index(&response);
}
