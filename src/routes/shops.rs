use axum::{routing::get, Router};
use crate::handlers::shop::get_shop;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/shops/{id}", get(get_shop))
}
