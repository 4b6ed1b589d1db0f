//! Type-safe identifier wrapper for hero records.
//!
//! Hero ids are integers assigned by the server on creation. The newtype
//! keeps them from being mixed up with other integers (list positions,
//! counts) and serializes transparently as a bare JSON number.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Unique identifier for a hero, assigned by the server.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct HeroId(#[ts(type = "number")] pub i64);

impl HeroId {
    /// Wrap a raw integer id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Return the inner integer value.
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// The id following this one, or `None` on overflow.
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl core::fmt::Display for HeroId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for HeroId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<HeroId> for i64 {
    fn from(id: HeroId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&HeroId::new(12)).unwrap_or_default();
        assert_eq!(json, "12");
    }

    #[test]
    fn checked_next_stops_at_max() {
        assert_eq!(HeroId::new(20).checked_next(), Some(HeroId::new(21)));
        assert_eq!(HeroId::new(i64::MAX).checked_next(), None);
    }

    #[test]
    fn display_matches_inner() {
        assert_eq!(HeroId::new(9999).to_string(), "9999");
    }
}
