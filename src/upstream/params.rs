// src/upstream/params.rs
use crate::models::search::{SearchRequest, PAGE_SIZE};

pub type QueryParams = Vec<(&'static str, String)>;

/// Outbound query for a gourmet search, minus the API key.
pub fn build_search_params(request: &SearchRequest) -> QueryParams {
    let mut params: QueryParams = vec![
        ("lat", request.latitude.to_string()),
        ("lng", request.longitude.to_string()),
        ("range", request.range.code().to_string()),
        ("start", request.start().to_string()),
        ("count", PAGE_SIZE.to_string()),
        ("format", "json".to_string()),
    ];

    if let Some(keyword) = &request.keyword {
        params.push(("keyword", keyword.clone()));
    }

    let filters = &request.filters;
    let optional = [
        ("genre", &filters.genre),
        ("special_category", &filters.special_category),
        ("budget", &filters.budget),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            params.push((name, value.clone()));
        }
    }

    if let Some(order) = request.sort.upstream_order() {
        params.push(("order", order.to_string()));
    }

    params
}

/// Lookup of a single shop by its upstream id.
pub fn build_shop_params(id: &str) -> QueryParams {
    vec![("id", id.to_string()), ("format", "json".to_string())]
}
