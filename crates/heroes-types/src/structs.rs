//! Hero record structs exchanged over the hero API.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::HeroId;
use crate::name::HeroName;

/// A hero record as stored and served by the API.
///
/// `name` is kept as a plain string so that whatever the server returns can
/// still be decoded; names the client sends for creation go through
/// [`HeroName`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Hero {
    /// Server-assigned identifier.
    pub id: HeroId,
    /// Display name.
    pub name: String,
}

impl Hero {
    /// Build a hero from an id and a name.
    pub fn new(id: HeroId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Body of a create request: the server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewHero {
    /// Name for the new hero.
    pub name: HeroName,
}

impl NewHero {
    /// Create a request for a hero with the given validated name.
    pub const fn new(name: HeroName) -> Self {
        Self { name }
    }

    /// Materialize the record once the server has picked an id.
    pub fn with_id(self, id: HeroId) -> Hero {
        Hero {
            id,
            name: self.name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_json_shape() {
        let hero = Hero::new(HeroId::new(13), "Bombasto");
        let json = serde_json::to_value(&hero).unwrap_or_default();
        assert_eq!(json, serde_json::json!({"id": 13, "name": "Bombasto"}));
    }

    #[test]
    fn new_hero_with_blank_name_is_rejected_on_decode() {
        let result: Result<NewHero, _> = serde_json::from_str(r#"{"name": "  "}"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_hero_with_id() {
        let Ok(name) = HeroName::parse("Tornado") else {
            return;
        };
        let hero = NewHero::new(name).with_id(HeroId::new(21));
        assert_eq!(hero, Hero::new(HeroId::new(21), "Tornado"));
    }
}
