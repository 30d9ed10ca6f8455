//! `DetailResolver` backed by the Place Details endpoint.

use nearbite_core::{DetailResolver, ResolveError};

use crate::api::PlaceDetailsResponse;
use crate::bridge::{BlockingHttp, ClientBuildError, TransportFailure};
use crate::config::PlacesClientConfig;

/// Place Details path below the service root.
const DETAILS_PATH: &str = "maps/api/place/details/json";

/// Resolves place identifiers to their map page via Place Details.
///
/// Only the `url` field is requested, which keeps each lookup in the
/// cheapest billing tier.
#[derive(Debug)]
pub struct HttpDetailResolver {
    http: BlockingHttp,
    config: PlacesClientConfig,
}

impl HttpDetailResolver {
    /// Create a resolver with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(PlacesClientConfig::new(api_key))
    }

    /// Create a resolver with explicit configuration.
    ///
    /// Search-specific settings such as the radius are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: PlacesClientConfig) -> Result<Self, ClientBuildError> {
        let http = BlockingHttp::new(&config.user_agent, config.timeout)?;
        Ok(Self { http, config })
    }

    fn endpoint(&self) -> String {
        self.config.endpoint(DETAILS_PATH)
    }

    async fn resolve_async(&self, identifier: &str) -> Result<String, ResolveError> {
        let url = self.endpoint();
        let query = [
            ("place_id", identifier),
            ("fields", "url"),
            ("key", self.config.api_key.as_str()),
        ];

        let response = self
            .http
            .client()
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(err, &url))?;

        let body: PlaceDetailsResponse =
            response
                .json()
                .await
                .map_err(|err| ResolveError::ParseError {
                    message: err.without_url().to_string(),
                })?;

        body.into_url(identifier)
    }

    fn convert_reqwest_error(&self, error: reqwest::Error, url: &str) -> ResolveError {
        let failure = TransportFailure::classify(&error);
        let message = error.without_url().to_string();
        match failure {
            TransportFailure::Timeout => ResolveError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.http.timeout().as_secs(),
            },
            TransportFailure::Status(status) => ResolveError::HttpError {
                url: url.to_owned(),
                status,
                message,
            },
            TransportFailure::Network => ResolveError::NetworkError {
                url: url.to_owned(),
                message,
            },
        }
    }
}

impl DetailResolver for HttpDetailResolver {
    fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
        if identifier.is_empty() {
            return Err(ResolveError::EmptyIdentifier);
        }
        self.http.block_on(self.resolve_async(identifier))
    }
}
