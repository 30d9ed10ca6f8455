use thiserror::Error;

/// Errors from [`crate::search::PlaceSearch::search_nearby`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The coordinate lies outside the WGS84 range or is not finite.
    #[error("location ({latitude}, {longitude}) is not a valid WGS84 coordinate")]
    InvalidLocation {
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
    },
    /// The request could not reach the service.
    #[error("search request to {url} failed: {message}")]
    NetworkError {
        /// Endpoint that was contacted, without credentials.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The service did not answer in time.
    #[error("search request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was contacted, without credentials.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("search request to {url} returned HTTP {status}: {message}")]
    HttpError {
        /// Endpoint that was contacted, without credentials.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The service reported an application-level failure.
    #[error("search service reported {status}: {message}")]
    ServiceError {
        /// Provider status code, e.g. `REQUEST_DENIED`.
        status: String,
        /// Provider message, possibly empty.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse search response: {message}")]
    ParseError {
        /// Decoder error description.
        message: String,
    },
}
