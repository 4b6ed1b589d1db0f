//! Shared application state for the hero API.
//!
//! [`AppState`] holds the in-memory [`HeroTable`] every handler reads and
//! writes. There is no persistence: the table lives for the process and
//! starts from the [`SEED_HEROES`] roster unless created empty.

use std::collections::BTreeMap;
use std::sync::Arc;

use heroes_types::{Hero, HeroId, NewHero};
use tokio::sync::RwLock;

use crate::error::ApiError;

/// Id given to the first hero created in an empty table.
pub const FIRST_GENERATED_ID: HeroId = HeroId::new(11);

/// The roster the server starts with.
pub const SEED_HEROES: [(i64, &str); 9] = [
    (12, "Dr. Nice"),
    (13, "Bombasto"),
    (14, "Celeritas"),
    (15, "Magneta"),
    (16, "RubberMan"),
    (17, "Dynama"),
    (18, "Dr. IQ"),
    (19, "Magma"),
    (20, "Tornado"),
];

/// Heroes keyed by id, iterated in id order.
#[derive(Debug, Clone, Default)]
pub struct HeroTable {
    heroes: BTreeMap<HeroId, Hero>,
}

impl HeroTable {
    /// A table holding the [`SEED_HEROES`] roster.
    pub fn seeded() -> Self {
        Self::from_heroes(
            SEED_HEROES
                .iter()
                .map(|(id, name)| Hero::new(HeroId::new(*id), *name)),
        )
    }

    /// A table holding exactly `heroes`; later duplicates replace earlier ones.
    pub fn from_heroes(heroes: impl IntoIterator<Item = Hero>) -> Self {
        Self {
            heroes: heroes.into_iter().map(|hero| (hero.id, hero)).collect(),
        }
    }

    /// Number of heroes.
    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    /// Every hero, in id order.
    pub fn list(&self) -> Vec<Hero> {
        self.heroes.values().cloned().collect()
    }

    /// Heroes whose name contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<Hero> {
        let needle = term.to_lowercase();
        self.heroes
            .values()
            .filter(|hero| hero.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Look up one hero.
    pub fn get(&self, id: HeroId) -> Option<&Hero> {
        self.heroes.get(&id)
    }

    /// Next free id: one past the largest, or [`FIRST_GENERATED_ID`] when
    /// the table is empty.
    pub fn next_id(&self) -> Result<HeroId, ApiError> {
        match self.heroes.keys().next_back() {
            Some(max) => max
                .checked_next()
                .ok_or_else(|| ApiError::Internal(String::from("hero id space exhausted"))),
            None => Ok(FIRST_GENERATED_ID),
        }
    }

    /// Store a new hero under a freshly generated id.
    pub fn insert(&mut self, new_hero: NewHero) -> Result<Hero, ApiError> {
        let id = self.next_id()?;
        let hero = new_hero.with_id(id);
        self.heroes.insert(id, hero.clone());
        Ok(hero)
    }

    /// Replace an existing hero. Returns `false` if there was none to replace.
    pub fn update(&mut self, hero: Hero) -> bool {
        match self.heroes.get_mut(&hero.id) {
            Some(existing) => {
                *existing = hero;
                true
            }
            None => false,
        }
    }

    /// Remove a hero, returning it if it existed.
    pub fn remove(&mut self, id: HeroId) -> Option<Hero> {
        self.heroes.remove(&id)
    }
}

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The hero table.
    pub heroes: Arc<RwLock<HeroTable>>,
}

impl AppState {
    /// State seeded with the default roster.
    pub fn new() -> Self {
        Self::with_table(HeroTable::seeded())
    }

    /// State with no heroes at all.
    pub fn empty() -> Self {
        Self::with_table(HeroTable::default())
    }

    /// State wrapping an existing table.
    pub fn with_table(table: HeroTable) -> Self {
        Self {
            heroes: Arc::new(RwLock::new(table)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
