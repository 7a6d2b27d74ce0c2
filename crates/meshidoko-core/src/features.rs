//! Descriptive feature labels derived from place attributes.

use crate::types::PlaceCandidate;

const HIGH_RATING_THRESHOLD: f64 = 4.0;

/// Display label for an ordinal price tier. Tiers outside 1-4 that are
/// still present on the record read as the moderate label.
fn price_tier_label(tier: u8) -> &'static str {
    match tier {
        1 => "リーズナブル",
        2 => "お手頃",
        3 => "やや高級",
        4 => "高級",
        _ => "お手頃",
    }
}

/// Builds the ordered feature list for one place.
///
/// Checks run in a fixed order (rating, price tier, open-now, website,
/// takeout, delivery); a missing signal simply contributes nothing.
#[must_use]
pub fn extract_features(place: &PlaceCandidate) -> Vec<String> {
    let mut features = Vec::new();

    if let Some(rating) = place.rating {
        if rating >= HIGH_RATING_THRESHOLD {
            features.push(format!("高評価 (★{rating})"));
        }
    }

    if let Some(tier) = place.price_level {
        features.push(price_tier_label(tier).to_string());
    }

    if place.open_now == Some(true) {
        features.push("営業中".to_string());
    }

    if place.website.is_some() {
        features.push("ウェブサイトあり".to_string());
    }

    if place.types.iter().any(|t| t == "meal_takeaway") {
        features.push("テイクアウト可".to_string());
    }

    if place.types.iter().any(|t| t == "meal_delivery") {
        features.push("デリバリー可".to_string());
    }

    features
}
