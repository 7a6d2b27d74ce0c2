//! Human-readable proximity descriptions.

use crate::geo::{haversine_km, Coordinate};

/// Assumed walking speed in meters per minute.
const WALK_METERS_PER_MINUTE: f64 = 80.0;

/// Distances at or under this are described in walking minutes.
const WALKING_THRESHOLD_KM: f64 = 0.5;

/// Formats the distance from the search origin to a place.
///
/// Within 500m the text gives walking minutes at 80m/min plus rounded
/// meters; beyond that, kilometers to one decimal. Without an origin
/// coordinate only the area name is usable.
#[must_use]
pub fn access_description(place: Coordinate, area: &str, origin: Option<Coordinate>) -> String {
    let Some(origin) = origin else {
        return format!("{area}周辺");
    };

    let distance_km = haversine_km(place, origin);
    if distance_km <= WALKING_THRESHOLD_KM {
        let meters = distance_km * 1000.0;
        let minutes = (meters / WALK_METERS_PER_MINUTE).round() as i64;
        format!("{area}から徒歩{minutes}分（約{}m）", meters.round() as i64)
    } else {
        format!("{area}から約{distance_km:.1}km")
    }
}
