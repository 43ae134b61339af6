use crate::domain::item::{NewTodoItem, TodoItem};
use crate::transport::http::types::{bad_payload, store_error_response, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/items",
    request_body = NewTodoItem,
    responses(
        (status = 201, description = "Item created", body = TodoItem,
            headers(("Location" = String, description = "URL of the created item"))),
        (status = 400, description = "Invalid payload", body = String)
    )
)]
pub async fn create_item_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewTodoItem>, JsonRejection>,
) -> impl IntoResponse {
    let Json(new) = match payload {
        Ok(v) => v,
        Err(e) => return bad_payload(e),
    };

    match state.store.add(new).await {
        Ok(item) => {
            let location = format!("/api/items/{}", item.id);
            (StatusCode::CREATED, [(header::LOCATION, location)], Json(item)).into_response()
        }
        Err(e) => store_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/items/create",
    request_body = NewTodoItem,
    responses(
        (status = 200, description = "Item created, plain confirmation", body = String),
        (status = 400, description = "Invalid payload", body = String)
    )
)]
pub async fn create_item_confirm_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewTodoItem>, JsonRejection>,
) -> impl IntoResponse {
    let Json(new) = match payload {
        Ok(v) => v,
        Err(e) => return bad_payload(e),
    };

    match state.store.add(new).await {
        Ok(item) => {
            log::debug!("item {} added via confirmation endpoint", item.id);
            (StatusCode::OK, "your item has been added".to_string()).into_response()
        }
        Err(e) => store_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item found", body = TodoItem),
        (status = 404, description = "No item with the given id")
    )
)]
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.store.get(id).await {
        Ok(item) => Json(item).into_response(),
        Err(e) => store_error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(("id" = i64, Path, description = "Item id")),
    request_body = TodoItem,
    responses(
        (status = 204, description = "Item replaced"),
        (status = 400, description = "Id mismatch or invalid payload", body = String),
        (status = 404, description = "No item with the given id")
    )
)]
pub async fn update_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<TodoItem>, JsonRejection>,
) -> impl IntoResponse {
    let Json(item) = match payload {
        Ok(v) => v,
        Err(e) => return bad_payload(e),
    };

    match state.store.replace(id, item).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => store_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "No item with the given id")
    )
)]
pub async fn delete_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.store.remove(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => store_error_response(e),
    }
}
