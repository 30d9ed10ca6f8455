//! Settings shared by the places clients.

use std::fmt;
use std::time::Duration;

/// Default service root for the Google Places web API.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Default user agent for places requests.
pub const DEFAULT_USER_AGENT: &str = "nearbite-places/0.1";

/// Default search radius in metres.
pub const DEFAULT_RADIUS_M: u32 = 1500;

/// Default place category searched for.
pub const DEFAULT_PLACE_TYPE: &str = "restaurant";

/// Default language of names and addresses.
pub const DEFAULT_LANGUAGE: &str = "ja";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpPlaceSearch`](crate::HttpPlaceSearch) and
/// [`HttpDetailResolver`](crate::HttpDetailResolver).
///
/// The API key is never printed by the `Debug` implementation.
#[derive(Clone)]
pub struct PlacesClientConfig {
    /// Service root, e.g. `"https://maps.googleapis.com"`.
    pub base_url: String,
    /// API key sent as the `key` query parameter.
    pub api_key: String,
    /// Search radius in metres.
    pub radius_m: u32,
    /// Place category, e.g. `"restaurant"`.
    pub place_type: String,
    /// Language code for names and addresses.
    pub language: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl fmt::Debug for PlacesClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacesClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("radius_m", &self.radius_m)
            .field("place_type", &self.place_type)
            .field("language", &self.language)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl PlacesClientConfig {
    /// Create a configuration with the given API key and default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: api_key.into(),
            radius_m: DEFAULT_RADIUS_M,
            place_type: DEFAULT_PLACE_TYPE.to_owned(),
            language: DEFAULT_LANGUAGE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Set the service root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the search radius in metres.
    #[must_use]
    pub fn with_radius(mut self, radius_m: u32) -> Self {
        self.radius_m = radius_m;
        self
    }

    /// Set the place category.
    #[must_use]
    pub fn with_place_type(mut self, place_type: impl Into<String>) -> Self {
        self.place_type = place_type.into();
        self
    }

    /// Set the response language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Join `path` onto the service root without doubling slashes.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
