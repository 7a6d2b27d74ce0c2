//! Domain types shared across the search pipeline.
//!
//! `SearchCriteria` and `RankedRestaurant` model the JSON boundary contract
//! and keep the original wire names (`numberOfPeople`, `sortBy`, ...) that
//! the presentation layer submits and renders. `PlaceCandidate` is the
//! internal projection of one provider record and never leaves the process.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::geo::Coordinate;
use crate::CriteriaError;

/// The active ranking policy selected by the user.
///
/// Unrecognized wire values deserialize to [`SortMode::Distance`] rather
/// than failing the request; distance ordering is the documented fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Distance,
    Rating,
    GenreMatch,
}

impl SortMode {
    /// Parses a wire value, falling back to distance ordering.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "rating" => Self::Rating,
            "genre" => Self::GenreMatch,
            _ => Self::Distance,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Rating => "rating",
            Self::GenreMatch => "genre",
        }
    }
}

impl Serialize for SortMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The form may omit the field or send null; both mean "default".
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Self::Distance, Self::parse))
    }
}

/// Dining preferences collected by the search form.
///
/// Immutable once submitted; a sort-mode change re-submits the whole
/// criteria and re-runs the pipeline server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(rename = "numberOfPeople")]
    pub party_size: u32,
    pub area: String,
    /// Requested budget per person, in yen.
    pub budget: u32,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(rename = "genre", default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(rename = "sortBy", default)]
    pub sort_mode: SortMode,
}

impl SearchCriteria {
    /// Checks the fields the form wizard requires before a submit.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError`] when the area is blank or the party size
    /// or budget is not positive.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        if self.area.trim().is_empty() {
            return Err(CriteriaError::EmptyArea);
        }
        if self.party_size == 0 {
            return Err(CriteriaError::InvalidPartySize);
        }
        if self.budget == 0 {
            return Err(CriteriaError::InvalidBudget);
        }
        Ok(())
    }

    /// The stated purpose, defaulting to 食事 when absent or blank.
    #[must_use]
    pub fn purpose_label(&self) -> &str {
        match self.purpose.as_deref() {
            Some(p) if !p.trim().is_empty() => p,
            _ => "食事",
        }
    }

    /// Whether the classified `genre` is one of the requested genres.
    #[must_use]
    pub fn matches_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// One raw restaurant record from the places provider, after the detail
/// fetch. Transient: fetched per search, ranked, projected, and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCandidate {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    /// Ordinal 1-4 cost level from the provider. Tier 0 ("free") is
    /// normalized to `None` before it reaches this type.
    pub price_level: Option<u8>,
    pub open_now: Option<bool>,
    pub types: Vec<String>,
    pub location: Coordinate,
}

/// One ranked suggestion as rendered by the results view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRestaurant {
    pub name: String,
    pub reason: String,
    pub address: String,
    pub access: String,
    /// Estimated budget per person, in yen. Always positive.
    pub budget: u32,
    pub features: Vec<String>,
    pub genre: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria_from(json: serde_json::Value) -> SearchCriteria {
        serde_json::from_value(json).expect("criteria should deserialize")
    }

    #[test]
    fn criteria_deserializes_form_wire_names() {
        let criteria = criteria_from(serde_json::json!({
            "date": "2025-11-01",
            "time": "19:00",
            "numberOfPeople": 4,
            "area": "渋谷",
            "budget": 5000,
            "purpose": "歓送迎会",
            "genre": ["和食", "居酒屋"],
            "requirements": "個室希望",
            "sortBy": "genre"
        }));

        assert_eq!(criteria.party_size, 4);
        assert_eq!(criteria.area, "渋谷");
        assert_eq!(criteria.budget, 5000);
        assert_eq!(criteria.genres, vec!["和食", "居酒屋"]);
        assert_eq!(criteria.sort_mode, SortMode::GenreMatch);
    }

    #[test]
    fn missing_optional_fields_default() {
        let criteria = criteria_from(serde_json::json!({
            "numberOfPeople": 2,
            "area": "銀座",
            "budget": 4000
        }));

        assert_eq!(criteria.date, "");
        assert!(criteria.purpose.is_none());
        assert!(criteria.genres.is_empty());
        assert_eq!(criteria.sort_mode, SortMode::Distance);
    }

    #[test]
    fn unknown_sort_mode_falls_back_to_distance() {
        let criteria = criteria_from(serde_json::json!({
            "numberOfPeople": 2,
            "area": "銀座",
            "budget": 4000,
            "sortBy": "popularity"
        }));
        assert_eq!(criteria.sort_mode, SortMode::Distance);
    }

    #[test]
    fn null_sort_mode_falls_back_to_distance() {
        let criteria = criteria_from(serde_json::json!({
            "numberOfPeople": 2,
            "area": "銀座",
            "budget": 4000,
            "sortBy": null
        }));
        assert_eq!(criteria.sort_mode, SortMode::Distance);
    }

    #[test]
    fn sort_mode_serializes_to_wire_value() {
        assert_eq!(
            serde_json::to_value(SortMode::GenreMatch).expect("serialize"),
            serde_json::json!("genre")
        );
    }

    #[test]
    fn validate_rejects_blank_area_and_zero_values() {
        let mut criteria = criteria_from(serde_json::json!({
            "numberOfPeople": 2,
            "area": "渋谷",
            "budget": 5000
        }));
        assert!(criteria.validate().is_ok());

        criteria.area = "  ".to_string();
        assert!(matches!(
            criteria.validate(),
            Err(crate::CriteriaError::EmptyArea)
        ));

        criteria.area = "渋谷".to_string();
        criteria.party_size = 0;
        assert!(matches!(
            criteria.validate(),
            Err(crate::CriteriaError::InvalidPartySize)
        ));

        criteria.party_size = 2;
        criteria.budget = 0;
        assert!(matches!(
            criteria.validate(),
            Err(crate::CriteriaError::InvalidBudget)
        ));
    }

    #[test]
    fn purpose_label_defaults_when_blank() {
        let mut criteria = criteria_from(serde_json::json!({
            "numberOfPeople": 2,
            "area": "渋谷",
            "budget": 5000
        }));
        assert_eq!(criteria.purpose_label(), "食事");

        criteria.purpose = Some(String::new());
        assert_eq!(criteria.purpose_label(), "食事");

        criteria.purpose = Some("接待".to_string());
        assert_eq!(criteria.purpose_label(), "接待");
    }

    #[test]
    fn ranked_restaurant_omits_absent_optionals() {
        let restaurant = RankedRestaurant {
            name: "店".to_string(),
            reason: "理由".to_string(),
            address: "住所".to_string(),
            access: "渋谷周辺".to_string(),
            budget: 4000,
            features: vec![],
            genre: "和食".to_string(),
            phone: "要問い合わせ".to_string(),
            place_id: None,
            rating: None,
            website: None,
        };
        let json = serde_json::to_value(&restaurant).expect("serialize");
        assert!(json.get("place_id").is_none());
        assert!(json.get("rating").is_none());
        assert!(json.get("website").is_none());
    }
}
