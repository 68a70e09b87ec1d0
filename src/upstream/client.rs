// src/upstream/client.rs
use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::UpstreamConfig;
use crate::error::UpstreamError;
use crate::models::search::SearchRequest;
use crate::models::shop::ShopResult;

use super::dtos::{unwrap_results, GenreResults, GourmetResults, SpecialCategoryResults};
use super::params::{build_search_params, build_shop_params, QueryParams};
use super::{GourmetApi, SearchPage};

const GOURMET_PATH: &str = "gourmet/v1/";
const GENRE_PATH: &str = "genre/v1/";
const SPECIAL_CATEGORY_PATH: &str = "special_category/v1/";

/// reqwest-backed client for the gourmet search API.
pub struct HttpGourmetApi {
    config: UpstreamConfig,
    client: Client,
}

impl HttpGourmetApi {
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    async fn get_results<T: DeserializeOwned>(
        &self,
        path: &str,
        params: QueryParams,
    ) -> Result<T, UpstreamError> {
        let url = self.url(path);
        debug!(%url, ?params, "Calling gourmet API");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(&[("key", self.config.api_key.as_str())])
            .query(&params)
            .send()
            .await
            // The URL carries the key; keep it out of error text.
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.without_url().to_string()))?;
        unwrap_results(body)
    }
}

#[async_trait]
impl GourmetApi for HttpGourmetApi {
    #[instrument(skip(self, request), fields(page = request.page))]
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, UpstreamError> {
        let results: GourmetResults = self
            .get_results(GOURMET_PATH, build_search_params(request))
            .await?;
        let total_results = results.total_results()?;
        Ok(SearchPage { shops: results.shop, total_results })
    }

    #[instrument(skip(self))]
    async fn shop_by_id(&self, id: &str) -> Result<Option<ShopResult>, UpstreamError> {
        let results: GourmetResults = self.get_results(GOURMET_PATH, build_shop_params(id)).await?;
        Ok(results.shop.into_iter().next())
    }

    async fn genres(&self) -> Result<Vec<Value>, UpstreamError> {
        let params = vec![("format", "json".to_string())];
        let results: GenreResults = self.get_results(GENRE_PATH, params).await?;
        Ok(results.genre)
    }

    async fn special_categories(&self) -> Result<Vec<Value>, UpstreamError> {
        let params = vec![("format", "json".to_string())];
        let results: SpecialCategoryResults =
            self.get_results(SPECIAL_CATEGORY_PATH, params).await?;
        Ok(results.special_category)
    }
}
