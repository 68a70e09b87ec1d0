// src/geo.rs

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two lat/lng points.
///
/// NaN inputs propagate to a NaN result; callers that need an integer
/// distance should go through [`distance_meters`].
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2.to_radians() - lon1.to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance rounded to whole metres, or `None` when it is not a finite number.
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Option<u64> {
    let meters = (distance_km(lat1, lon1, lat2, lon2) * 1000.0).round();
    if meters.is_finite() && meters >= 0.0 {
        Some(meters as u64)
    } else {
        None
    }
}
