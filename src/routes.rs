use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{check_data_handler, health_handler, update_data_handler, write_data_handler};
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const CHECK_DATA: &str = "/check_data";
pub const WRITE_DATA: &str = "/write_data";
pub const DOCS: &str = "/docs";
pub const OPENAPI_JSON: &str = "/openapi.json";

/// Build the application router with all endpoints and request tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(health_handler))
        .route(CHECK_DATA, get(check_data_handler))
        .route(WRITE_DATA, post(write_data_handler).put(update_data_handler))
        .merge(SwaggerUi::new(DOCS).url(OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
