//! Resolve opaque place identifiers into detail URLs.

use std::sync::Arc;

use thiserror::Error;

/// Errors from [`DetailResolver::resolve`].
///
/// Resolution failures are never fatal to a ranking: the selector logs them
/// and leaves the entry's URL empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The identifier was empty, so there was nothing to look up.
    #[error("place identifier is empty")]
    EmptyIdentifier,
    /// The request could not reach the service.
    #[error("details request to {url} failed: {message}")]
    NetworkError {
        /// Endpoint that was contacted, without credentials.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The service did not answer in time.
    #[error("details request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was contacted, without credentials.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("details request to {url} returned HTTP {status}: {message}")]
    HttpError {
        /// Endpoint that was contacted, without credentials.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The service reported an application-level failure.
    #[error("details service reported {status}: {message}")]
    ServiceError {
        /// Provider status code, e.g. `NOT_FOUND`.
        status: String,
        /// Provider message, possibly empty.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse details response: {message}")]
    ParseError {
        /// Decoder error description.
        message: String,
    },
    /// The response was well formed but carried no URL.
    #[error("details for {identifier} carry no URL")]
    MissingUrl {
        /// Identifier that was looked up.
        identifier: String,
    },
}

/// Look up a display URL for a place identifier.
///
/// Implementations usually perform network I/O. They must be `Send` + `Sync`
/// so one resolver can serve concurrent requests, and they should be
/// side-effect free so the order of lookups does not matter.
///
/// # Examples
///
/// ```rust
/// use nearbite_core::{DetailResolver, ResolveError};
///
/// struct Templated;
///
/// impl DetailResolver for Templated {
///     fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
///         if identifier.is_empty() {
///             return Err(ResolveError::EmptyIdentifier);
///         }
///         Ok(format!("https://maps.example/?place={identifier}"))
///     }
/// }
///
/// assert_eq!(
///     Templated.resolve("abc")?,
///     "https://maps.example/?place=abc"
/// );
/// # Ok::<(), ResolveError>(())
/// ```
pub trait DetailResolver: Send + Sync {
    /// Return the detail URL for `identifier`.
    fn resolve(&self, identifier: &str) -> Result<String, ResolveError>;
}

impl<T: DetailResolver + ?Sized> DetailResolver for &T {
    fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
        (**self).resolve(identifier)
    }
}

impl<T: DetailResolver + ?Sized> DetailResolver for Box<T> {
    fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
        (**self).resolve(identifier)
    }
}

impl<T: DetailResolver + ?Sized> DetailResolver for Arc<T> {
    fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
        (**self).resolve(identifier)
    }
}

/// Adapter turning an `identifier -> url` function into a [`DetailResolver`].
///
/// Construct it with [`resolve_fn`]. An empty string returned by the
/// function is passed through unchanged and yields an entry without a URL.
#[derive(Debug, Clone, Copy)]
pub struct ResolveFn<F>(F);

/// Wrap a plain function as a [`DetailResolver`].
///
/// # Examples
///
/// ```rust
/// use nearbite_core::{DetailResolver, resolve_fn};
///
/// let resolver = resolve_fn(|id: &str| format!("https://maps.example/{id}"));
/// assert_eq!(resolver.resolve("x").ok().as_deref(), Some("https://maps.example/x"));
/// ```
pub const fn resolve_fn<F>(function: F) -> ResolveFn<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    ResolveFn(function)
}

impl<F> DetailResolver for ResolveFn<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
        Ok((self.0)(identifier))
    }
}
