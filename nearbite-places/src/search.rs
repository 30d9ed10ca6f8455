//! `PlaceSearch` backed by the Nearby Search endpoint.

use geo::Coord;
use nearbite_core::{PlaceRecord, PlaceSearch, SearchError, validate_location};

use crate::api::NearbySearchResponse;
use crate::bridge::{BlockingHttp, ClientBuildError, TransportFailure};
use crate::config::PlacesClientConfig;

/// Nearby Search path below the service root.
const NEARBY_SEARCH_PATH: &str = "maps/api/place/nearbysearch/json";

/// HTTP-based place search using the Places Nearby Search API.
///
/// Results are returned in provider order; ranking is left to the caller.
/// Error URLs name the endpoint only, never the query string, so the API
/// key does not leak into logs.
#[derive(Debug)]
pub struct HttpPlaceSearch {
    http: BlockingHttp,
    config: PlacesClientConfig,
}

impl HttpPlaceSearch {
    /// Create a search client with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(PlacesClientConfig::new(api_key))
    }

    /// Create a search client with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: PlacesClientConfig) -> Result<Self, ClientBuildError> {
        let http = BlockingHttp::new(&config.user_agent, config.timeout)?;
        Ok(Self { http, config })
    }

    /// Configuration used by this client.
    #[must_use]
    pub const fn config(&self) -> &PlacesClientConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        self.config.endpoint(NEARBY_SEARCH_PATH)
    }

    /// Query parameters for a search around `location`.
    ///
    /// Coordinates are rounded to two decimals, roughly a kilometre, which
    /// is well inside the default search radius.
    fn query(&self, location: Coord<f64>) -> Vec<(&'static str, String)> {
        vec![
            ("location", format!("{:.2},{:.2}", location.y, location.x)),
            ("radius", self.config.radius_m.to_string()),
            ("type", self.config.place_type.clone()),
            ("language", self.config.language.clone()),
            ("key", self.config.api_key.clone()),
        ]
    }

    async fn search_async(&self, location: Coord<f64>) -> Result<Vec<PlaceRecord>, SearchError> {
        let url = self.endpoint();
        log::debug!("searching places near ({}, {}) via {url}", location.y, location.x);

        let response = self
            .http
            .client()
            .get(&url)
            .query(&self.query(location))
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(err, &url))?;

        let body: NearbySearchResponse =
            response
                .json()
                .await
                .map_err(|err| SearchError::ParseError {
                    message: err.without_url().to_string(),
                })?;

        body.into_records()
    }

    fn convert_reqwest_error(&self, error: reqwest::Error, url: &str) -> SearchError {
        // The request URL carries the API key; keep it out of the message.
        let failure = TransportFailure::classify(&error);
        let message = error.without_url().to_string();
        match failure {
            TransportFailure::Timeout => SearchError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.http.timeout().as_secs(),
            },
            TransportFailure::Status(status) => SearchError::HttpError {
                url: url.to_owned(),
                status,
                message,
            },
            TransportFailure::Network => SearchError::NetworkError {
                url: url.to_owned(),
                message,
            },
        }
    }
}

impl PlaceSearch for HttpPlaceSearch {
    /// Search for places around `location`.
    ///
    /// Invalid coordinates are rejected before any request is made.
    fn search_nearby(&self, location: Coord<f64>) -> Result<Vec<PlaceRecord>, SearchError> {
        validate_location(location)?;
        self.http.block_on(self.search_async(location))
    }
}
