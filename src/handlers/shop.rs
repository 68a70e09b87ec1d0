// src/handlers/shop.rs
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::instrument;
use crate::dtos::search::ShopDetailResponse;
use crate::error::AppError;
use crate::state::AppState;

// GET /api/shops/{id} - Single shop by upstream id
#[instrument(skip(state))]
pub async fn get_shop(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShopDetailResponse>, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::validation("Shop id is required"));
    }

    let shop = state
        .api
        .shop_by_id(id.trim())
        .await?
        .ok_or_else(|| AppError::not_found("Shop not found"))?;

    Ok(Json(ShopDetailResponse { shop }))
}
