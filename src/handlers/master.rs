// src/handlers/master.rs
//
// Master lists feed the search form. An upstream outage degrades to an
// empty list rather than failing the page.
use axum::{extract::State, Json};
use tracing::warn;
use crate::dtos::search::{GenreListResponse, SpecialCategoryListResponse};
use crate::state::AppState;

// GET /api/genres
pub async fn list_genres(State(state): State<AppState>) -> Json<GenreListResponse> {
    let genres = state.api.genres().await.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to fetch genre master");
        Vec::new()
    });
    Json(GenreListResponse { genres })
}

// GET /api/special-categories
pub async fn list_special_categories(
    State(state): State<AppState>,
) -> Json<SpecialCategoryListResponse> {
    let special_categories = state.api.special_categories().await.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to fetch special category master");
        Vec::new()
    });
    Json(SpecialCategoryListResponse { special_categories })
}
