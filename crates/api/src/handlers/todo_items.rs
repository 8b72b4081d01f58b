//! Todo item CRUD handlers.
//!
//! These handlers use the repository trait object from [`AppState`] and never
//! see the concrete storage backend. Lookups that find nothing answer 404 with
//! an empty body; storage failures surface through [`AppError`].

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use todo_core::todo::TodoItem;

use crate::{handlers::AppError, models::TodoItemPayload, state::AppState};

/// Body extractor result for POST and PUT.
///
/// A literal `null` body deserializes to `Json(None)`; a missing or malformed
/// body is a rejection. Both are client errors.
type PayloadResult = Result<Json<Option<TodoItemPayload>>, JsonRejection>;

/// Location of a single item, as returned in the `Location` header.
pub fn todo_item_location(id: i64) -> String {
    format!("/todoitems/{id}")
}

fn bad_request(message: impl Into<String>) -> Response {
    let msg = message.into();
    tracing::warn!(message = %msg, "Rejected todo item payload");
    (StatusCode::BAD_REQUEST, msg).into_response()
}

fn not_found(id: i64) -> Response {
    tracing::warn!(todo_item_id = id, "Todo item not found");
    StatusCode::NOT_FOUND.into_response()
}

/// Unwraps the request body, answering 400 when it is absent, null or invalid.
fn require_payload(payload: PayloadResult) -> Result<TodoItemPayload, Response> {
    match payload {
        Ok(Json(Some(payload))) => Ok(payload),
        Ok(Json(None)) => Err(bad_request("Request body must not be null")),
        Err(rejection) => Err(bad_request(format!("Invalid request body: {rejection}"))),
    }
}

// ============================================================================
// List / Get
// ============================================================================

/// List all todo items (GET /todoitems).
pub async fn list_todo_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoItem>>, AppError> {
    let items = state.todo_repo.get_all().await?;

    tracing::debug!(count = items.len(), "Listed todo items");

    Ok(Json(items))
}

/// Get a single todo item by ID (GET /todoitems/{id}).
pub async fn get_todo_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    match state.todo_repo.get(id).await? {
        Some(item) => Ok(Json(item).into_response()),
        None => Ok(not_found(id)),
    }
}

// ============================================================================
// Create
// ============================================================================

/// Create a new todo item (POST /todoitems).
///
/// Responds 201 with the stored item and a `Location` header pointing at it.
pub async fn create_todo_item(
    State(state): State<AppState>,
    payload: PayloadResult,
) -> Result<Response, AppError> {
    let payload = match require_payload(payload) {
        Ok(payload) => payload,
        Err(response) => return Ok(response),
    };

    tracing::debug!(payload = ?payload, "Received create todo item request");

    if let Some(client_id) = payload.id {
        tracing::debug!(client_id, "Ignoring client supplied id on create");
    }

    let created = state.todo_repo.add(&payload.into_todo_item()).await?;

    tracing::info!(todo_item_id = created.id, name = %created.name, "Created todo item");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, todo_item_location(created.id))],
        Json(created),
    )
        .into_response())
}

// ============================================================================
// Update
// ============================================================================

/// Replace a todo item by ID (PUT /todoitems/{id}).
///
/// The path id is authoritative. A missing item answers 404 rather than
/// being created.
pub async fn update_todo_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: PayloadResult,
) -> Result<Response, AppError> {
    let payload = match require_payload(payload) {
        Ok(payload) => payload,
        Err(response) => return Ok(response),
    };

    tracing::debug!(todo_item_id = id, payload = ?payload, "Received update todo item request");

    let Some(mut item) = state.todo_repo.get(id).await? else {
        return Ok(not_found(id));
    };

    payload.apply_to(&mut item);
    state.todo_repo.update(&item).await?;

    tracing::info!(todo_item_id = id, "Updated todo item");

    Ok(StatusCode::NO_CONTENT.into_response())
}

// ============================================================================
// Delete
// ============================================================================

/// Delete a todo item by ID (DELETE /todoitems/{id}).
pub async fn delete_todo_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    tracing::debug!(todo_item_id = id, "Received delete todo item request");

    let Some(item) = state.todo_repo.get(id).await? else {
        return Ok(not_found(id));
    };

    state.todo_repo.delete(&item).await?;

    tracing::info!(todo_item_id = id, "Deleted todo item");

    Ok(StatusCode::NO_CONTENT.into_response())
}
