use axum::{routing::get, Router};
use crate::handlers::master::{list_genres, list_special_categories};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    // Read-only reference data for the search form
    Router::new()
        .route("/genres", get(list_genres))
        .route("/special-categories", get(list_special_categories))
}
