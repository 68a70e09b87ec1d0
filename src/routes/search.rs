use axum::{routing::get, Router};
use crate::handlers::search::search_shops;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/search", get(search_shops))
}
