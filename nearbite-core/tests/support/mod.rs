//! Local resolver stand-ins shared by the ranking integration tests.

use std::sync::{Mutex, PoisonError};

use nearbite_core::{DetailResolver, PlaceRecord, ResolveError};

/// Resolver returning `https://maps.example/<id>` or failing on demand,
/// recording every identifier it sees.
#[derive(Debug, Default)]
pub struct ScriptedResolver {
    fail: bool,
    calls: Mutex<Vec<String>>,
}

impl ScriptedResolver {
    /// Resolver that answers every lookup.
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Resolver that rejects every lookup.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Identifiers looked up so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DetailResolver for ScriptedResolver {
    fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(identifier.to_owned());
        if self.fail {
            return Err(ResolveError::ServiceError {
                status: "NOT_FOUND".to_owned(),
                message: String::new(),
            });
        }
        Ok(format!("https://maps.example/{identifier}"))
    }
}

/// Rated place whose identifier is derived from its name.
pub fn rated(name: &str, address: &str, rating: f64, count: f64) -> PlaceRecord {
    PlaceRecord::new(name, address, format!("id-{name}")).with_rating(rating, count)
}
