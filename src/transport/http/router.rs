use crate::domain::item::{NewTodoItem, TodoItem};
use crate::transport::http::handlers::{health, items};
use crate::transport::http::types::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        items::create_item_handler,
        items::create_item_confirm_handler,
        items::get_item_handler,
        items::update_item_handler,
        items::delete_item_handler
    ),
    components(schemas(TodoItem, NewTodoItem))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/items", post(items::create_item_handler))
        .route("/api/items/create", post(items::create_item_confirm_handler))
        .route(
            "/api/items/:id",
            get(items::get_item_handler)
                .put(items::update_item_handler)
                .delete(items::delete_item_handler),
        )
        .with_state(app_state)
}
