//! Places returned by a nearby search and the entries shown to users.

/// A single place returned by a nearby search.
///
/// Fields missing from a provider payload are represented by their zero
/// value, so a record without ratings simply scores `0.0`.
///
/// # Examples
/// ```
/// use nearbite_core::PlaceRecord;
///
/// let place = PlaceRecord::new("Kissa", "1-2-3 Jingumae", "abc123").with_rating(4.2, 87.0);
///
/// assert_eq!(place.identifier, "abc123");
/// assert_eq!(place.rating_count, 87.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlaceRecord {
    /// Display name; may be empty.
    pub name: String,
    /// Street address as reported by the provider.
    pub address: String,
    /// Opaque provider identifier used to look up a detail URL.
    pub identifier: String,
    /// Average rating, `0.0` when the provider has none.
    pub rating: f64,
    /// Number of ratings behind [`Self::rating`], `0.0` when absent.
    pub rating_count: f64,
}

impl PlaceRecord {
    /// Construct an unrated place.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            identifier: identifier.into(),
            rating: 0.0,
            rating_count: 0.0,
        }
    }

    /// Replace the street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Attach a rating and the number of ratings it was averaged from.
    #[must_use]
    pub fn with_rating(mut self, rating: f64, rating_count: f64) -> Self {
        self.rating = rating;
        self.rating_count = rating_count;
        self
    }
}

/// A ranked place ready for display.
///
/// `truncated_address` holds at most the configured number of Unicode scalar
/// values and `detail_url` is empty when the lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedEntry {
    /// Display name, copied verbatim from the [`PlaceRecord`].
    pub name: String,
    /// Address cut down to the display limit.
    pub truncated_address: String,
    /// Resolved detail link, or an empty string.
    pub detail_url: String,
}

impl RankedEntry {
    /// Report whether a detail URL was resolved for this entry.
    #[must_use]
    pub fn has_detail_url(&self) -> bool {
        !self.detail_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_place_is_unrated() {
        let place = PlaceRecord::new("Cafe", "1 Road", "id-1");
        assert_eq!(place.rating, 0.0);
        assert_eq!(place.rating_count, 0.0);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn missing_fields_deserialise_as_zero() {
        let place: PlaceRecord =
            serde_json::from_str(r#"{"name":"Cafe"}"#).expect("partial record should parse");
        assert_eq!(place.name, "Cafe");
        assert!(place.address.is_empty());
        assert_eq!(place.rating, 0.0);
        assert_eq!(place.rating_count, 0.0);
    }

    #[rstest]
    #[case("", false)]
    #[case("https://maps.example/1", true)]
    fn detail_url_presence(#[case] url: &str, #[case] expected: bool) {
        let entry = RankedEntry {
            detail_url: url.to_owned(),
            ..RankedEntry::default()
        };
        assert_eq!(entry.has_detail_url(), expected);
    }
}
