pub mod masters;
pub mod search;
pub mod shops;

use std::any::Any;
use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use crate::error::AppError;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(search::routes())
        .merge(shops::routes())
        .merge(masters::routes())
}

/// Full application: `/api/*` plus health, with tracing, CORS and a panic
/// guard that turns unexpected failures into a generic 500.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_router())
        .route("/health", get(health_check))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::internal(detail).into_response()
}
