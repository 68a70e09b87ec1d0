// src/upstream/dtos.rs
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use crate::error::UpstreamError;
use crate::models::shop::ShopResult;

/// `results` block of a gourmet search response.
#[derive(Debug, Default, Deserialize)]
pub struct GourmetResults {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub shop: Vec<ShopResult>,
    #[serde(default)]
    pub results_available: Option<Value>,
}

impl GourmetResults {
    /// `results_available` arrives as a number or a numeric string.
    pub fn total_results(&self) -> Result<u64, UpstreamError> {
        match &self.results_available {
            None | Some(Value::Null) => Ok(0),
            Some(Value::Number(n)) => match (n.as_u64(), n.as_f64()) {
                (Some(total), _) => Ok(total),
                // Fractional totals truncate toward zero.
                (None, Some(f)) if f.is_finite() && f >= 0.0 => Ok(f.trunc() as u64),
                _ => Err(UpstreamError::Decode(format!("bad results_available: {n}"))),
            },
            Some(Value::String(s)) => s
                .trim()
                .parse()
                .map_err(|_| UpstreamError::Decode(format!("bad results_available: {s:?}"))),
            Some(other) => Err(UpstreamError::Decode(format!("bad results_available: {other}"))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GenreResults {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genre: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpecialCategoryResults {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub special_category: Vec<Value>,
}

/// A `null` list is an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Pulls `results` out of an upstream body, surfacing `results.error`
/// as an [`UpstreamError::Api`]. A body without `results` is an empty result.
pub fn unwrap_results<T: DeserializeOwned>(body: Value) -> Result<T, UpstreamError> {
    let Value::Object(mut root) = body else {
        return Err(UpstreamError::Decode("expected a JSON object".to_string()));
    };
    let results = root
        .remove("results")
        .unwrap_or_else(|| Value::Object(Default::default()));

    if let Some(first) = results
        .get("error")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
    {
        let code = match first.get("code") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let message = first
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("The search API rejected the request")
            .to_string();
        return Err(UpstreamError::Api { code, message });
    }

    serde_json::from_value(results).map_err(|e| UpstreamError::Decode(e.to_string()))
}
