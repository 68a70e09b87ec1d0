// src/pipeline.rs
use tracing::debug;
use crate::geo::distance_meters;
use crate::models::search::{SearchRequest, SortMode};
use crate::models::shop::ShopResult;

/// Attaches `distance_m` to every shop with usable coordinates and applies
/// the requested sort. Never fails: shops without coordinates keep no
/// distance and go last under a distance sort.
pub fn enrich(mut shops: Vec<ShopResult>, request: &SearchRequest) -> Vec<ShopResult> {
    for shop in shops.iter_mut() {
        shop.distance_m = match shop.coordinates() {
            Some((lat, lng)) => distance_meters(request.latitude, request.longitude, lat, lng),
            None => {
                debug!(id = ?shop.id(), name = ?shop.name(), "No usable coordinates");
                None
            }
        };
    }

    if request.sort == SortMode::Distance {
        // sort_by_key is stable; None maps to u64::MAX so unknowns trail.
        shops.sort_by_key(|shop| shop.distance_m.unwrap_or(u64::MAX));
    }

    shops
}
