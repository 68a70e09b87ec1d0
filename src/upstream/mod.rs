// src/upstream/mod.rs
pub mod client;
pub mod dtos;
pub mod params;

use async_trait::async_trait;
use serde_json::Value;
use crate::error::UpstreamError;
use crate::models::search::SearchRequest;
use crate::models::shop::ShopResult;

pub use client::HttpGourmetApi;

/// One page of raw search results as the upstream reported them.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub shops: Vec<ShopResult>,
    pub total_results: u64,
}

/// The third-party gourmet search service.
#[async_trait]
pub trait GourmetApi: Send + Sync {
    /// Runs one search. Exactly one upstream call per invocation.
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, UpstreamError>;

    async fn shop_by_id(&self, id: &str) -> Result<Option<ShopResult>, UpstreamError>;

    /// Genre master list.
    async fn genres(&self) -> Result<Vec<Value>, UpstreamError>;

    /// Special category ("kodawari") master list.
    async fn special_categories(&self) -> Result<Vec<Value>, UpstreamError>;
}
