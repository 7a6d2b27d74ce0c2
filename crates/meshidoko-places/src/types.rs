//! Google Geocoding / Places API response types.
//!
//! All types model the JSON structures the REST endpoints return. Optional
//! provider fields use `#[serde(default)]` so a sparse record still
//! deserializes; only the fields the pipeline consumes are modeled.

use meshidoko_core::{Coordinate, PlaceCandidate};
use serde::Deserialize;

/// A `{lat, lng}` pair as the provider encodes coordinates.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for Coordinate {
    fn from(value: LatLng) -> Self {
        Coordinate::new(value.lat, value.lng)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub location: LatLng,
}

// ---------------------------------------------------------------------------
// geocode
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    pub geometry: Geometry,
}

// ---------------------------------------------------------------------------
// nearbysearch
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct NearbyResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<NearbyResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One raw nearby-search row. Rows without a `place_id` cannot be detailed
/// and are dropped by the client.
#[derive(Debug, Deserialize)]
pub(crate) struct NearbyResult {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// A nearby-search hit worth fetching details for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearbyPlace {
    pub place_id: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// details
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<PlaceDetail>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaceDetail {
    #[serde(default)]
    pub place_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub types: Vec<String>,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
}

impl PlaceDetail {
    /// Projects the wire record into the domain candidate.
    ///
    /// `requested_place_id` backs the identifier when the response omits
    /// it. Price tier 0 ("free") is normalized away: downstream budget and
    /// feature logic treats it as no tier at all.
    pub(crate) fn into_candidate(self, requested_place_id: &str) -> PlaceCandidate {
        let open_now = self.opening_hours.and_then(|h| h.open_now);
        PlaceCandidate {
            place_id: self
                .place_id
                .unwrap_or_else(|| requested_place_id.to_string()),
            name: self.name,
            address: self.formatted_address,
            phone: self.formatted_phone_number,
            website: self.website,
            rating: self.rating,
            price_level: self.price_level.filter(|&tier| tier != 0),
            open_now,
            types: self.types,
            location: self.geometry.location.into(),
        }
    }
}
