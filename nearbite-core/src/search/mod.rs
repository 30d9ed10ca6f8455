//! Find places near a geographic location.
//!
//! The `PlaceSearch` trait abstracts the nearby-search service that supplies
//! raw [`PlaceRecord`](crate::PlaceRecord) values. Callers pass a WGS84
//! coordinate and receive the unranked results in provider order.
//!
//! Errors are returned when the location is unusable or the service fails.

mod error;
mod provider;

pub use error::SearchError;
pub use provider::{PlaceSearch, validate_location};
