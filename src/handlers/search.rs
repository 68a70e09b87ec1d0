// src/handlers/search.rs
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, instrument};
use crate::dtos::search::SearchResponse;
use crate::error::AppError;
use crate::models::search::SearchRequest;
use crate::pipeline::enrich;
use crate::state::AppState;

// GET /api/search - Search shops around a point
#[instrument(skip(state, params))]
pub async fn search_shops(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, AppError> {
    // Reject bad input before spending an upstream call.
    let request = SearchRequest::from_pairs(params)?;

    let page = state.api.search(&request).await?;
    debug!(
        radius_m = request.range.meters(),
        returned = page.shops.len(),
        total = page.total_results,
        "Gourmet search succeeded"
    );

    let shops = enrich(page.shops, &request);
    Ok(Json(SearchResponse::assemble(shops, &request, page.total_results)))
}
