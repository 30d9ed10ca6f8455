//! Places web API response types.
//!
//! Only the fields the bot reads are modelled; everything else in the
//! payload is ignored. Missing fields default to empty strings and zeros.
//!
//! See: <https://developers.google.com/maps/documentation/places/web-service/search-nearby>

use nearbite_core::{PlaceRecord, ResolveError, SearchError};
use serde::Deserialize;

/// Status reported by successful requests.
const STATUS_OK: &str = "OK";

/// Status reported by a successful search with no hits.
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Nearby Search response.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    /// Status code, e.g. `"OK"`, `"ZERO_RESULTS"` or `"REQUEST_DENIED"`.
    pub status: String,
    /// Optional explanation when `status` signals a failure.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Matching places in provider order.
    #[serde(default)]
    pub results: Vec<PlaceResult>,
}

/// One place in a Nearby Search response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlaceResult {
    /// Display name.
    pub name: String,
    /// Short address.
    pub vicinity: String,
    /// Opaque identifier for detail lookups.
    pub place_id: String,
    /// Average rating in `[0, 5]`.
    pub rating: Option<f64>,
    /// Number of ratings.
    pub user_ratings_total: Option<f64>,
}

impl From<PlaceResult> for PlaceRecord {
    fn from(result: PlaceResult) -> Self {
        Self::new(result.name, result.vicinity, result.place_id).with_rating(
            result.rating.unwrap_or_default(),
            result.user_ratings_total.unwrap_or_default(),
        )
    }
}

impl NearbySearchResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK || self.status == STATUS_ZERO_RESULTS
    }

    /// Convert into place records, or the service error the status names.
    pub fn into_records(self) -> Result<Vec<PlaceRecord>, SearchError> {
        if !self.is_ok() {
            return Err(SearchError::ServiceError {
                status: self.status,
                message: self.error_message.unwrap_or_default(),
            });
        }
        Ok(self.results.into_iter().map(PlaceRecord::from).collect())
    }
}

/// Place Details response restricted to the `url` field.
#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    /// Status code, e.g. `"OK"` or `"NOT_FOUND"`.
    pub status: String,
    /// Optional explanation when `status` signals a failure.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Requested detail fields.
    #[serde(default)]
    pub result: Option<PlaceDetails>,
}

/// Detail fields of a place.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlaceDetails {
    /// Map page for the place.
    pub url: Option<String>,
}

impl PlaceDetailsResponse {
    /// Extract the map URL for `identifier`.
    pub fn into_url(self, identifier: &str) -> Result<String, ResolveError> {
        if self.status != STATUS_OK {
            return Err(ResolveError::ServiceError {
                status: self.status,
                message: self.error_message.unwrap_or_default(),
            });
        }
        self.result
            .and_then(|details| details.url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ResolveError::MissingUrl {
                identifier: identifier.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn deserialise_search_results() {
        let json = r#"{
            "status": "OK",
            "html_attributions": [],
            "results": [
                {
                    "name": "すし処",
                    "vicinity": "渋谷区道玄坂1-2-3",
                    "place_id": "ChIJ-sushi",
                    "rating": 4.3,
                    "user_ratings_total": 812,
                    "types": ["restaurant", "food"]
                },
                { "name": "New Opening", "vicinity": "渋谷区宇田川町", "place_id": "ChIJ-new" }
            ]
        }"#;

        let response: NearbySearchResponse =
            serde_json::from_str(json).expect("should deserialise");
        let records = response.into_records().expect("OK is a success");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "すし処");
        assert_eq!(records[0].address, "渋谷区道玄坂1-2-3");
        assert_eq!(records[0].identifier, "ChIJ-sushi");
        assert_eq!(records[0].rating, 4.3);
        assert_eq!(records[0].rating_count, 812.0);
        assert_eq!(records[1].rating, 0.0);
        assert_eq!(records[1].rating_count, 0.0);
    }

    #[rstest]
    fn zero_results_is_an_empty_success() {
        let json = r#"{ "status": "ZERO_RESULTS", "results": [] }"#;
        let response: NearbySearchResponse =
            serde_json::from_str(json).expect("should deserialise");
        assert!(response.is_ok());
        assert!(response.into_records().expect("success").is_empty());
    }

    #[rstest]
    #[case("REQUEST_DENIED", Some("The provided API key is invalid."))]
    #[case("OVER_QUERY_LIMIT", None)]
    #[case("INVALID_REQUEST", None)]
    fn failing_statuses_become_service_errors(#[case] status: &str, #[case] message: Option<&str>) {
        let response = NearbySearchResponse {
            status: status.to_owned(),
            error_message: message.map(str::to_owned),
            results: Vec::new(),
        };
        let err = response.into_records().expect_err("should fail");
        assert_eq!(
            err,
            SearchError::ServiceError {
                status: status.to_owned(),
                message: message.unwrap_or_default().to_owned(),
            }
        );
    }

    #[rstest]
    fn details_yield_the_url() {
        let json = r#"{
            "status": "OK",
            "result": { "url": "https://maps.google.com/?cid=42" }
        }"#;
        let response: PlaceDetailsResponse =
            serde_json::from_str(json).expect("should deserialise");
        assert_eq!(
            response.into_url("ChIJ-x"),
            Ok("https://maps.google.com/?cid=42".to_owned())
        );
    }

    #[rstest]
    #[case(r#"{ "status": "OK", "result": {} }"#)]
    #[case(r#"{ "status": "OK" }"#)]
    #[case(r#"{ "status": "OK", "result": { "url": "" } }"#)]
    fn details_without_url_are_missing(#[case] json: &str) {
        let response: PlaceDetailsResponse =
            serde_json::from_str(json).expect("should deserialise");
        assert_eq!(
            response.into_url("ChIJ-x"),
            Err(ResolveError::MissingUrl {
                identifier: "ChIJ-x".to_owned()
            })
        );
    }

    #[rstest]
    fn details_status_failure_is_a_service_error() {
        let json = r#"{ "status": "NOT_FOUND" }"#;
        let response: PlaceDetailsResponse =
            serde_json::from_str(json).expect("should deserialise");
        assert!(matches!(
            response.into_url("ChIJ-x"),
            Err(ResolveError::ServiceError { status, .. }) if status == "NOT_FOUND"
        ));
    }
}
