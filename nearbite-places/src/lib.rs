//! HTTP clients for the places service.
//!
//! This crate provides [`HttpPlaceSearch`] and [`HttpDetailResolver`],
//! implementations of [`nearbite_core::PlaceSearch`] and
//! [`nearbite_core::DetailResolver`] backed by the Google Places web API.
//!
//! # Architecture
//!
//! The capability traits are synchronous so the ranking core stays
//! embeddable anywhere. Each client owns a [`BlockingHttp`] bridge that runs
//! the async `reqwest` call to completion, borrowing the caller's
//! multi-threaded Tokio runtime when there is one.
//!
//! # Example
//!
//! ```no_run
//! use geo::Coord;
//! use nearbite_core::PlaceSearch;
//! use nearbite_places::{HttpPlaceSearch, PlacesClientConfig};
//!
//! let config = PlacesClientConfig::new("api-key").with_radius(800);
//! let search = HttpPlaceSearch::with_config(config)?;
//! let places = search.search_nearby(Coord { x: 139.7016, y: 35.6580 })?;
//! println!("found {} places", places.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod api;
pub mod bridge;
mod config;
mod details;
mod search;

pub use bridge::{BlockingHttp, ClientBuildError, TransportFailure};
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_PLACE_TYPE, DEFAULT_RADIUS_M, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, PlacesClientConfig,
};
pub use details::HttpDetailResolver;
pub use search::HttpPlaceSearch;
