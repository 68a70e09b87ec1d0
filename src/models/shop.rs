// src/models/shop.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::models::search::PAGE_SIZE;

/// One upstream shop record. Every upstream field is carried through
/// untouched; `distance_m` is only set once the record is enriched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<u64>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ShopResult {
    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// `(lat, lng)` when both are present as numbers or numeric strings.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = coordinate(self.fields.get("lat")?)?;
        let lng = coordinate(self.fields.get("lng")?)?;
        Some((lat, lng))
    }
}

fn coordinate(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub total_results: u64,
    pub total_pages: u64,
    pub current_page: u32,
}

impl PageInfo {
    pub fn new(total_results: u64, current_page: u32) -> Self {
        let page_size = u64::from(PAGE_SIZE);
        Self {
            total_results,
            total_pages: total_results.div_ceil(page_size),
            current_page,
        }
    }
}
