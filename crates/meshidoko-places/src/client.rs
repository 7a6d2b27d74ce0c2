use std::time::Duration;

use reqwest::{Client, Url};

use meshidoko_core::{Coordinate, PlaceCandidate};

use crate::error::PlacesError;
use crate::types::{DetailsResponse, GeocodeResponse, NearbyPlace, NearbyResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/";

/// Responses are localized to Japanese, matching the results view.
const LANGUAGE: &str = "ja";

/// Fields requested from the details endpoint; anything else is billed
/// without being used.
const DETAIL_FIELDS: &str = "place_id,name,formatted_address,formatted_phone_number,rating,price_level,website,opening_hours,types,geometry";

/// Client for the Google Geocoding and Places REST APIs.
///
/// Manages the HTTP client, API key, and base URL. Use [`PlacesClient::new`]
/// for production or [`PlacesClient::with_base_url`] to point at a mock
/// server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Google APIs.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("meshidoko/0.1 (restaurant-search)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining endpoint paths never replaces the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| PlacesError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Resolves a free-text area name to a coordinate.
    ///
    /// The query is suffixed with `", Japan"` to bias resolution, matching
    /// the search form's expectations.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::AreaNotFound`] if geocoding yields no results.
    /// - [`PlacesError::ApiError`] if the API returns an error status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn geocode(&self, area: &str) -> Result<Coordinate, PlacesError> {
        let address = format!("{area}, Japan");
        let url = self.build_url("maps/api/geocode/json", &[("address", address.as_str())])?;
        let body = self.request_json(&url).await?;

        let envelope: GeocodeResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("geocode(area={area})"),
                source: e,
            })?;

        match envelope.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => return Err(PlacesError::AreaNotFound(area.to_owned())),
            other => {
                return Err(PlacesError::ApiError(api_error_text(
                    other,
                    envelope.error_message.as_deref(),
                )))
            }
        }

        envelope
            .results
            .into_iter()
            .next()
            .map(|result| result.geometry.location.into())
            .ok_or_else(|| PlacesError::AreaNotFound(area.to_owned()))
    }

    /// Searches for restaurants around `location` within `radius_m` meters,
    /// constrained to the `[min_price, max_price]` tier window and an
    /// optional keyword phrase.
    ///
    /// Rows without a `place_id` are dropped; a `ZERO_RESULTS` status
    /// yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiError`] if the API returns an error status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn nearby_search(
        &self,
        location: Coordinate,
        radius_m: u32,
        keyword: Option<&str>,
        min_price: u8,
        max_price: u8,
    ) -> Result<Vec<NearbyPlace>, PlacesError> {
        let location_param = format!("{},{}", location.latitude, location.longitude);
        let radius_param = radius_m.to_string();
        let min_param = min_price.to_string();
        let max_param = max_price.to_string();

        let mut params = vec![
            ("location", location_param.as_str()),
            ("radius", radius_param.as_str()),
            ("type", "restaurant"),
            ("language", LANGUAGE),
            ("minprice", min_param.as_str()),
            ("maxprice", max_param.as_str()),
        ];
        if let Some(keyword) = keyword {
            params.push(("keyword", keyword));
        }

        let url = self.build_url("maps/api/place/nearbysearch/json", &params)?;
        let body = self.request_json(&url).await?;

        let envelope: NearbyResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: "nearbysearch".to_string(),
                source: e,
            })?;

        match envelope.status.as_str() {
            "OK" | "ZERO_RESULTS" => {}
            other => {
                return Err(PlacesError::ApiError(api_error_text(
                    other,
                    envelope.error_message.as_deref(),
                )))
            }
        }

        Ok(envelope
            .results
            .into_iter()
            .filter_map(|row| {
                row.place_id.map(|place_id| NearbyPlace {
                    place_id,
                    name: row.name,
                })
            })
            .collect())
    }

    /// Fetches extended details for one place and projects them into a
    /// [`PlaceCandidate`].
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiError`] if the API returns an error status or
    ///   an empty result.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceCandidate, PlacesError> {
        let url = self.build_url(
            "maps/api/place/details/json",
            &[
                ("place_id", place_id),
                ("fields", DETAIL_FIELDS),
                ("language", LANGUAGE),
            ],
        )?;
        let body = self.request_json(&url).await?;

        let envelope: DetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;

        if envelope.status != "OK" {
            return Err(PlacesError::ApiError(api_error_text(
                &envelope.status,
                envelope.error_message.as_deref(),
            )));
        }

        envelope
            .result
            .map(|detail| detail.into_candidate(place_id))
            .ok_or_else(|| {
                PlacesError::ApiError(format!("details response missing result for {place_id}"))
            })
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters: the API key first, then the endpoint-specific ones.
    fn build_url(&self, path: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| PlacesError::ApiError(format!("invalid endpoint path '{path}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        tracing::debug!(path = url.path(), "places API request");
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}

fn api_error_text(status: &str, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("{status}: {message}"),
        None => status.to_string(),
    }
}
