// src/dtos/search.rs
use serde::Serialize;
use serde_json::Value;
use crate::models::search::SearchRequest;
use crate::models::shop::{PageInfo, ShopResult};

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub shops: Vec<ShopResult>,
    pub pagination: PageInfo,
}

impl SearchResponse {
    pub fn assemble(shops: Vec<ShopResult>, request: &SearchRequest, total_results: u64) -> Self {
        Self {
            shops,
            pagination: PageInfo::new(total_results, request.page),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShopDetailResponse {
    pub shop: ShopResult,
}

#[derive(Debug, Serialize)]
pub struct GenreListResponse {
    pub genres: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct SpecialCategoryListResponse {
    pub special_categories: Vec<Value>,
}
