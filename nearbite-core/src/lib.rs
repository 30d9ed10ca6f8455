//! Core domain types for the Nearbite recommendation bot.
//!
//! A [`PlaceRecord`] is one raw hit from a nearby search. The
//! [`RankedResultSelector`] scores those hits, orders them by descending
//! popularity, trims addresses for display and keeps the best few as
//! [`RankedEntry`] values. External services are only reached through the
//! [`PlaceSearch`] and [`DetailResolver`] capabilities, so the ranking can be
//! exercised with deterministic stand-ins.
//!
//! # Examples
//!
//! ```
//! use nearbite_core::{PlaceRecord, RankedResultSelector, resolve_fn};
//!
//! let places = vec![
//!     PlaceRecord::new("B", "456 Oak Ave", "place-b").with_rating(5.0, 1.0),
//!     PlaceRecord::new("A", "123 Main St", "place-a").with_rating(4.0, 100.0),
//! ];
//! let resolver = resolve_fn(|id: &str| format!("https://maps.example/{id}"));
//!
//! let ranked = RankedResultSelector::new().rank(places, &resolver);
//!
//! assert_eq!(ranked[0].name, "A");
//! assert_eq!(ranked[1].detail_url, "https://maps.example/place-b");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod place;
pub mod recommend;
pub mod resolver;
pub mod scorer;
pub mod search;
pub mod selector;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use place::{PlaceRecord, RankedEntry};
pub use recommend::Recommender;
pub use resolver::{DetailResolver, ResolveError, ResolveFn, resolve_fn};
pub use scorer::{PlaceScorer, PopularityScorer, PopularityWeights};
pub use search::{PlaceSearch, SearchError, validate_location};
pub use selector::{
    DEFAULT_MAX_ADDRESS_CHARS, DEFAULT_MAX_ENTRIES, RankedResultSelector, SelectorOptions,
    truncate_chars,
};
