//! Rank raw search results into display entries.
//!
//! [`RankedResultSelector::rank`] performs a single pass over the records:
//! score every place, stable-sort by descending score, keep the best
//! [`SelectorOptions::max_entries`], shorten each address to
//! [`SelectorOptions::max_address_chars`] Unicode scalar values and finally
//! resolve a detail URL for each survivor.
//!
//! Only the surviving entries are resolved, so at most `max_entries` lookups
//! are made per ranking regardless of how many places the search returned.

use crate::{DetailResolver, PlaceRecord, PlaceScorer, PopularityScorer, RankedEntry};

/// Default cap on the number of ranked entries.
pub const DEFAULT_MAX_ENTRIES: usize = 10;

/// Default cap on the displayed address length, in Unicode scalar values.
pub const DEFAULT_MAX_ADDRESS_CHARS: usize = 40;

/// Limits applied while building [`RankedEntry`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorOptions {
    /// Maximum number of entries returned by a ranking.
    pub max_entries: usize,
    /// Maximum address length in Unicode scalar values.
    pub max_address_chars: usize,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            max_address_chars: DEFAULT_MAX_ADDRESS_CHARS,
        }
    }
}

/// Scores, orders and trims place records.
///
/// The selector holds no per-request state and can be shared freely between
/// threads when its scorer can.
///
/// # Examples
///
/// ```
/// use nearbite_core::{PlaceRecord, RankedResultSelector, resolve_fn};
///
/// let selector = RankedResultSelector::new();
/// let ranked = selector.rank(Vec::new(), &resolve_fn(|_: &str| String::new()));
/// assert!(ranked.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RankedResultSelector<S = PopularityScorer> {
    scorer: S,
    options: SelectorOptions,
}

impl RankedResultSelector {
    /// Create a selector using the default popularity scorer and limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: PlaceScorer> RankedResultSelector<S> {
    /// Create a selector using `scorer` and the default limits.
    #[must_use]
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            options: SelectorOptions::default(),
        }
    }

    /// Replace the limits applied by this selector.
    #[must_use]
    pub fn with_options(mut self, options: SelectorOptions) -> Self {
        self.options = options;
        self
    }

    /// Limits applied by this selector.
    #[must_use]
    pub const fn options(&self) -> SelectorOptions {
        self.options
    }

    /// Sanitised score for `place`.
    ///
    /// Always finite and non-negative.
    #[must_use]
    pub fn score(&self, place: &PlaceRecord) -> f64 {
        S::sanitise(self.scorer.score(place))
    }

    /// Rank `records` and resolve a detail URL for each surviving entry.
    ///
    /// The output is ordered by descending score; places with equal scores
    /// keep their input order. A failed resolution leaves the entry in place
    /// with an empty `detail_url`. An empty input never calls `resolver`.
    pub fn rank<R>(&self, records: Vec<PlaceRecord>, resolver: &R) -> Vec<RankedEntry>
    where
        R: DetailResolver + ?Sized,
    {
        let mut scored: Vec<(f64, PlaceRecord)> = records
            .into_iter()
            .map(|place| (self.score(&place), place))
            .collect();
        // `sort_by` is stable, so ties keep the provider's order.
        scored.sort_by(|(left, _), (right, _)| right.total_cmp(left));
        scored.truncate(self.options.max_entries);
        scored
            .into_iter()
            .map(|(_, place)| self.present(place, resolver))
            .collect()
    }

    fn present<R>(&self, place: PlaceRecord, resolver: &R) -> RankedEntry
    where
        R: DetailResolver + ?Sized,
    {
        let detail_url = resolve_or_empty(resolver, &place.identifier);
        let truncated_address = truncate_chars(&place.address, self.options.max_address_chars);
        RankedEntry {
            truncated_address: truncated_address.to_owned(),
            name: place.name,
            detail_url,
        }
    }
}

fn resolve_or_empty<R>(resolver: &R, identifier: &str) -> String
where
    R: DetailResolver + ?Sized,
{
    match resolver.resolve(identifier) {
        Ok(url) => url,
        Err(err) => {
            log::warn!("detail lookup failed for place {identifier:?}: {err}");
            String::new()
        }
    }
}

/// Return the first `max_chars` Unicode scalar values of `text`.
///
/// Multi-byte characters are never split; text that already fits is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use nearbite_core::truncate_chars;
///
/// assert_eq!(truncate_chars("東京都渋谷区", 3), "東京都");
/// assert_eq!(truncate_chars("short", 40), "short");
/// ```
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .and_then(|(cut, _)| text.get(..cut))
        .unwrap_or(text)
}
