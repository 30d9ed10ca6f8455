//! Compose search, ranking and detail lookup into one call.

use geo::Coord;

use crate::{
    DetailResolver, PlaceScorer, PlaceSearch, PopularityScorer, RankedEntry, RankedResultSelector,
    SearchError,
};

/// Produces ranked suggestions for a location.
///
/// The recommender owns its collaborators; wrap them in `Arc` to share one
/// instance between request handlers.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use nearbite_core::{
///     PlaceRecord, PlaceSearch, RankedResultSelector, Recommender, SearchError, resolve_fn,
/// };
///
/// struct Fixed;
///
/// impl PlaceSearch for Fixed {
///     fn search_nearby(&self, _: Coord<f64>) -> Result<Vec<PlaceRecord>, SearchError> {
///         Ok(vec![PlaceRecord::new("Cafe", "1 Road", "cafe").with_rating(4.0, 9.0)])
///     }
/// }
///
/// let recommender = Recommender::new(
///     Fixed,
///     resolve_fn(|id: &str| format!("https://maps.example/{id}")),
///     RankedResultSelector::new(),
/// );
/// let entries = recommender.recommend(Coord { x: 139.7, y: 35.66 })?;
/// assert_eq!(entries[0].detail_url, "https://maps.example/cafe");
/// # Ok::<(), SearchError>(())
/// ```
#[derive(Debug)]
pub struct Recommender<S, R, P = PopularityScorer> {
    search: S,
    resolver: R,
    selector: RankedResultSelector<P>,
}

impl<S, R, P> Recommender<S, R, P>
where
    S: PlaceSearch,
    R: DetailResolver,
    P: PlaceScorer,
{
    /// Assemble a recommender from its collaborators.
    pub const fn new(search: S, resolver: R, selector: RankedResultSelector<P>) -> Self {
        Self {
            search,
            resolver,
            selector,
        }
    }

    /// Search around `location` and rank the results.
    ///
    /// # Errors
    /// Propagates [`SearchError`] from the search collaborator. Detail
    /// lookups never fail the call; unresolved entries carry an empty URL.
    pub fn recommend(&self, location: Coord<f64>) -> Result<Vec<RankedEntry>, SearchError> {
        let records = self.search.search_nearby(location)?;
        log::debug!(
            "ranking {} places near ({}, {})",
            records.len(),
            location.y,
            location.x
        );
        Ok(self.selector.rank(records, &self.resolver))
    }

    /// Selector used to rank search results.
    pub const fn selector(&self) -> &RankedResultSelector<P> {
        &self.selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::SelectorOptions;
    use crate::test_support::{PrefixResolver, RecordingResolver, StubPlaceSearch, place};

    const SHIBUYA: Coord<f64> = Coord {
        x: 139.7016,
        y: 35.6580,
    };

    #[rstest]
    fn ranks_search_results() {
        let search = StubPlaceSearch::with_records(vec![
            place("Solo", 5.0, 1.0),
            place("Regular", 4.0, 100.0),
        ]);
        let recommender = Recommender::new(
            search,
            PrefixResolver::new("u:"),
            RankedResultSelector::new(),
        );
        let entries = recommender.recommend(SHIBUYA).expect("stub search succeeds");
        assert_eq!(entries[0].name, "Regular");
        assert_eq!(entries[0].detail_url, "u:Regular");
    }

    #[rstest]
    fn search_failure_is_returned_without_lookups() {
        let search = StubPlaceSearch::with_error(SearchError::Timeout {
            url: "https://places.example/nearby".to_owned(),
            timeout_secs: 30,
        });
        let recommender = Recommender::new(
            search,
            RecordingResolver::new(PrefixResolver::new("u:")),
            RankedResultSelector::new(),
        );
        let err = recommender
            .recommend(SHIBUYA)
            .expect_err("search failure should surface");
        assert!(matches!(err, SearchError::Timeout { .. }));
        assert!(recommender.resolver.calls().is_empty());
    }

    #[rstest]
    fn keeps_the_configured_selector() {
        let options = SelectorOptions {
            max_entries: 1,
            ..SelectorOptions::default()
        };
        let recommender = Recommender::new(
            StubPlaceSearch::with_records(vec![place("Solo", 5.0, 1.0), place("Regular", 4.0, 100.0)]),
            PrefixResolver::new("u:"),
            RankedResultSelector::new().with_options(options),
        );
        assert_eq!(recommender.selector().options(), options);
        let entries = recommender.recommend(SHIBUYA).expect("stub search succeeds");
        let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["Regular"]);
    }
}
