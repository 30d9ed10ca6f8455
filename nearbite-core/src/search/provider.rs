//! Nearby-search trait and coordinate validation.

use geo::Coord;

use crate::PlaceRecord;

use super::error::SearchError;

/// Fetch the places surrounding a location.
///
/// Coordinates follow the `geo` convention: `x = longitude`,
/// `y = latitude`. Implementations return records in provider order; the
/// order carries no meaning and is replaced by the ranking.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use nearbite_core::{PlaceRecord, PlaceSearch, SearchError, validate_location};
///
/// struct OneCafe;
///
/// impl PlaceSearch for OneCafe {
///     fn search_nearby(&self, location: Coord<f64>) -> Result<Vec<PlaceRecord>, SearchError> {
///         validate_location(location)?;
///         Ok(vec![PlaceRecord::new("Cafe", "1 Road", "cafe-1")])
///     }
/// }
///
/// let places = OneCafe.search_nearby(Coord { x: 139.70, y: 35.66 })?;
/// assert_eq!(places.len(), 1);
/// # Ok::<(), SearchError>(())
/// ```
pub trait PlaceSearch: Send + Sync {
    /// Return the places near `location`.
    ///
    /// Implementations must return `Err(SearchError::InvalidLocation)` for
    /// coordinates rejected by [`validate_location`].
    fn search_nearby(&self, location: Coord<f64>) -> Result<Vec<PlaceRecord>, SearchError>;
}

impl<T: PlaceSearch + ?Sized> PlaceSearch for &T {
    fn search_nearby(&self, location: Coord<f64>) -> Result<Vec<PlaceRecord>, SearchError> {
        (**self).search_nearby(location)
    }
}

impl<T: PlaceSearch + ?Sized> PlaceSearch for Box<T> {
    fn search_nearby(&self, location: Coord<f64>) -> Result<Vec<PlaceRecord>, SearchError> {
        (**self).search_nearby(location)
    }
}

impl<T: PlaceSearch + ?Sized> PlaceSearch for std::sync::Arc<T> {
    fn search_nearby(&self, location: Coord<f64>) -> Result<Vec<PlaceRecord>, SearchError> {
        (**self).search_nearby(location)
    }
}

/// Check that `location` is a finite WGS84 coordinate.
///
/// # Errors
/// Returns [`SearchError::InvalidLocation`] when the latitude is outside
/// `-90.0..=90.0`, the longitude is outside `-180.0..=180.0`, or either is
/// not finite.
pub fn validate_location(location: Coord<f64>) -> Result<(), SearchError> {
    let Coord {
        x: longitude,
        y: latitude,
    } = location;
    if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
        Ok(())
    } else {
        Err(SearchError::InvalidLocation {
            latitude,
            longitude,
        })
    }
}
