//! Deterministic stand-ins for the search and lookup capabilities, used by
//! unit and behaviour tests.

use std::sync::{Mutex, PoisonError};

use geo::Coord;

use crate::{
    DetailResolver, PlaceRecord, PlaceSearch, ResolveError, SearchError, validate_location,
};

/// Build a place whose name doubles as its identifier.
#[must_use]
pub fn place(name: &str, rating: f64, rating_count: f64) -> PlaceRecord {
    PlaceRecord::new(name, format!("{name} street"), name).with_rating(rating, rating_count)
}

/// Stub `PlaceSearch` returning a pre-configured response.
///
/// Invalid coordinates are still rejected so callers exercise the same
/// validation path as real providers.
#[derive(Debug, Clone)]
pub struct StubPlaceSearch {
    response: Result<Vec<PlaceRecord>, SearchError>,
}

impl StubPlaceSearch {
    /// Create a search that returns `records` for any valid location.
    #[must_use]
    pub const fn with_records(records: Vec<PlaceRecord>) -> Self {
        Self {
            response: Ok(records),
        }
    }

    /// Create a search that fails with `error` for any valid location.
    #[must_use]
    pub const fn with_error(error: SearchError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl PlaceSearch for StubPlaceSearch {
    fn search_nearby(&self, location: Coord<f64>) -> Result<Vec<PlaceRecord>, SearchError> {
        validate_location(location)?;
        self.response.clone()
    }
}

/// Resolver producing `prefix + identifier` for every non-empty identifier.
#[derive(Debug, Clone)]
pub struct PrefixResolver {
    prefix: String,
}

impl PrefixResolver {
    /// Create a resolver that prepends `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl DetailResolver for PrefixResolver {
    fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
        if identifier.is_empty() {
            return Err(ResolveError::EmptyIdentifier);
        }
        Ok(format!("{}{identifier}", self.prefix))
    }
}

/// Resolver that fails every lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingResolver;

impl DetailResolver for FailingResolver {
    fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
        Err(ResolveError::MissingUrl {
            identifier: identifier.to_owned(),
        })
    }
}

/// Resolver wrapper that records every identifier it is asked for.
#[derive(Debug, Default)]
pub struct RecordingResolver<R> {
    inner: R,
    calls: Mutex<Vec<String>>,
}

impl<R> RecordingResolver<R> {
    /// Wrap `inner`, starting with an empty call log.
    #[must_use]
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Identifiers looked up so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<R: DetailResolver> DetailResolver for RecordingResolver<R> {
    fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(identifier.to_owned());
        self.inner.resolve(identifier)
    }
}
