//! Facade crate for the Nearbite restaurant recommender.
//!
//! This crate re-exports the ranking core and exposes the HTTP places clients
//! behind the `places-http` feature flag.

#![forbid(unsafe_code)]

pub use nearbite_core::{
    DetailResolver, PlaceRecord, PlaceScorer, PlaceSearch, PopularityScorer, PopularityWeights,
    RankedEntry, RankedResultSelector, Recommender, ResolveError, SearchError, SelectorOptions,
    resolve_fn, truncate_chars,
};

#[cfg(feature = "places-http")]
pub use nearbite_places::{
    ClientBuildError, HttpDetailResolver, HttpPlaceSearch, PlacesClientConfig,
};
