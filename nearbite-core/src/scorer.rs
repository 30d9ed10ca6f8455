//! Score places by popularity.
//!
//! The `PlaceScorer` trait assigns a ranking score to a
//! [`PlaceRecord`](crate::PlaceRecord). The default [`PopularityScorer`]
//! blends the average rating with the number of ratings so that a single
//! five-star review does not outrank a consistently well-reviewed venue.

use crate::PlaceRecord;

/// Calculate a ranking score for a place.
///
/// Higher scores rank earlier. Implementations must be thread-safe
/// (`Send` + `Sync`) so a scorer can be shared between request handlers.
/// The method is infallible; implementers must return `0.0` when no
/// information is available.
///
/// Use [`PlaceScorer::sanitise`] to discard non-finite or negative values.
///
/// # Examples
///
/// ```rust
/// use nearbite_core::{PlaceRecord, PlaceScorer};
///
/// struct RatingOnly;
///
/// impl PlaceScorer for RatingOnly {
///     fn score(&self, place: &PlaceRecord) -> f64 {
///         place.rating
///     }
/// }
///
/// let place = PlaceRecord::new("Cafe", "1 Road", "id").with_rating(3.5, 10.0);
/// assert_eq!(RatingOnly.score(&place), 3.5);
/// ```
pub trait PlaceScorer: Send + Sync {
    /// Return a score for `place`.
    fn score(&self, place: &PlaceRecord) -> f64;

    /// Guard a raw score.
    ///
    /// Returns `0.0` for non-finite or negative values so that garbage input
    /// sinks to the bottom of the ranking instead of poisoning the sort.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if score.is_finite() && score > 0.0 {
            score
        } else {
            0.0
        }
    }
}

/// Exponents applied to the popularity signals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopularityWeights {
    /// Power applied to the average rating.
    pub rating_exponent: f64,
    /// Power applied to the number of ratings.
    pub count_exponent: f64,
}

impl Default for PopularityWeights {
    fn default() -> Self {
        Self {
            rating_exponent: 2.5,
            count_exponent: 0.25,
        }
    }
}

/// Score places as `rating^rating_exponent * rating_count^count_exponent`.
///
/// With the default weights a high rating is rewarded strongly while the
/// fractional power on the count gives a damped credibility boost.
///
/// # Examples
///
/// ```rust
/// use nearbite_core::{PlaceRecord, PlaceScorer, PopularityScorer};
///
/// let scorer = PopularityScorer::default();
/// let steady = PlaceRecord::new("A", "", "a").with_rating(4.0, 100.0);
/// let lucky = PlaceRecord::new("B", "", "b").with_rating(5.0, 1.0);
///
/// assert!(scorer.score(&steady) > scorer.score(&lucky));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopularityScorer {
    weights: PopularityWeights,
}

impl PopularityScorer {
    /// Build a scorer with custom weights.
    #[must_use]
    pub const fn with_weights(weights: PopularityWeights) -> Self {
        Self { weights }
    }

    /// Weights used by this scorer.
    #[must_use]
    pub const fn weights(&self) -> PopularityWeights {
        self.weights
    }
}

impl PlaceScorer for PopularityScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "popularity scoring multiplies two weighted signals"
    )]
    fn score(&self, place: &PlaceRecord) -> f64 {
        let quality = place.rating.powf(self.weights.rating_exponent);
        let credibility = place.rating_count.powf(self.weights.count_exponent);
        quality * credibility
    }
}
