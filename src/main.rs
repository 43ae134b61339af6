use std::sync::Arc;
use todo_api::infra::config;
use todo_api::storage::todo::seed_if_empty;
use todo_api::transport;
use todo_api::SqliteTodoStore;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    log::info!("initializing store");
    let store = SqliteTodoStore::new().await?;

    // Seeding is a startup step, not a per-request side effect.
    match seed_if_empty(&store).await? {
        Some(item) => log::info!("seeded default item {} ({:?})", item.id, item.name),
        None => log::info!("table already populated, no seed needed"),
    }

    let app_state = transport::http::AppState {
        store: Arc::new(store),
    };

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            transport::http::ApiDoc::openapi(),
        ))
        .layer(cors);

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    log::info!("API server listening on http://{}", bind_addr);
    log::info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            log::info!("shutdown signal received");
        }
    }

    Ok(())
}
