//! View state for the hero screens.
//!
//! Each view is a plain struct holding what its screen shows, plus async
//! handler methods that call the [`HeroService`] and update that state.
//! Nothing here renders; a front end reads the public fields.
//!
//! | View | Screen |
//! |------|--------|
//! | [`DashboardView`] | Top heroes |
//! | [`HeroesView`] | Full list with add and delete |
//! | [`HeroDetailView`] | One hero, editable name |
//! | [`HeroSearchView`] | Name search results |
//!
//! Navigation between screens is a [`Navigator`] holding a stack of
//! [`Route`]s.

use heroes_types::{Hero, HeroId, HeroName, InvalidHeroName, NewHero};

use crate::messages::MessageSink;
use crate::service::HeroService;
use crate::transport::HeroTransport;

/// Position of the first hero shown on the dashboard.
const DASHBOARD_SKIP: usize = 1;

/// Number of heroes shown on the dashboard.
const DASHBOARD_SIZE: usize = 4;

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// A screen the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/dashboard`, also the landing route.
    Dashboard,
    /// `/heroes`
    Heroes,
    /// `/detail/{id}`
    Detail(HeroId),
}

impl Route {
    /// Resolve a path. The empty path redirects to the dashboard; unknown
    /// paths resolve to `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim().trim_matches('/');
        match path {
            "" | "dashboard" => Some(Self::Dashboard),
            "heroes" => Some(Self::Heroes),
            _ => {
                let id = path.strip_prefix("detail/")?.parse::<i64>().ok()?;
                Some(Self::Detail(HeroId::new(id)))
            }
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => String::from("/dashboard"),
            Self::Heroes => String::from("/heroes"),
            Self::Detail(id) => format!("/detail/{id}"),
        }
    }
}

/// Route history with browser-style back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            history: vec![Route::Dashboard],
        }
    }
}

impl Navigator {
    /// Start on the dashboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// The route currently shown.
    pub fn current(&self) -> Route {
        self.history.last().copied().unwrap_or(Route::Dashboard)
    }

    /// Show `route`, remembering where we came from.
    pub fn navigate(&mut self, route: Route) {
        if self.current() != route {
            self.history.push(route);
        }
    }

    /// Return to the previous route. The first route is never popped.
    pub fn back(&mut self) -> Route {
        if self.history.len() > 1 {
            self.history.pop();
        }
        self.current()
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// The dashboard: a handful of featured heroes.
pub struct DashboardView<'a, T, M> {
    service: &'a HeroService<T, M>,
    /// Heroes currently featured.
    pub heroes: Vec<Hero>,
}

impl<'a, T, M> DashboardView<'a, T, M>
where
    T: HeroTransport,
    M: MessageSink,
{
    /// An empty dashboard backed by `service`.
    pub const fn new(service: &'a HeroService<T, M>) -> Self {
        Self {
            service,
            heroes: Vec::new(),
        }
    }

    /// Fetch all heroes and feature the second through fifth.
    pub async fn load(&mut self) {
        self.heroes = self
            .service
            .list_heroes()
            .await
            .into_value()
            .into_iter()
            .skip(DASHBOARD_SKIP)
            .take(DASHBOARD_SIZE)
            .collect();
    }
}

// ---------------------------------------------------------------------------
// Hero list
// ---------------------------------------------------------------------------

/// The full hero list, with add and delete.
pub struct HeroesView<'a, T, M> {
    service: &'a HeroService<T, M>,
    /// Heroes as the list currently shows them.
    pub heroes: Vec<Hero>,
}

impl<'a, T, M> HeroesView<'a, T, M>
where
    T: HeroTransport,
    M: MessageSink,
{
    /// An empty list backed by `service`.
    pub const fn new(service: &'a HeroService<T, M>) -> Self {
        Self {
            service,
            heroes: Vec::new(),
        }
    }

    /// Replace the list with the server's.
    pub async fn load(&mut self) {
        self.heroes = self.service.list_heroes().await.into_value();
    }

    /// Create a hero from raw user input.
    ///
    /// Blank input is rejected before any request is made. On success the
    /// created hero is appended and its id returned; `Ok(None)` means the
    /// request failed and the list is unchanged.
    pub async fn add(&mut self, raw_name: &str) -> Result<Option<HeroId>, InvalidHeroName> {
        let name = HeroName::parse(raw_name)?;
        let created = self.service.add_hero(&NewHero::new(name)).await.into_value();
        Ok(created.map(|hero| {
            let id = hero.id;
            self.heroes.push(hero);
            id
        }))
    }

    /// Drop the hero from the list, then ask the server to delete it.
    ///
    /// The local removal stands even if the server call fails. Returns
    /// whether the server confirmed the delete.
    pub async fn delete(&mut self, id: HeroId) -> bool {
        self.heroes.retain(|hero| hero.id != id);
        self.service.delete_hero(id).await.is_success()
    }
}

// ---------------------------------------------------------------------------
// Hero detail
// ---------------------------------------------------------------------------

/// Result of [`HeroDetailView::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// The server accepted the update.
    Saved,
    /// The update was sent and failed; see the message log.
    Failed,
    /// No hero is loaded, so nothing was sent.
    NothingLoaded,
    /// The edited name is blank, so nothing was sent.
    BlankName,
}

/// One hero with an editable name.
pub struct HeroDetailView<'a, T, M> {
    service: &'a HeroService<T, M>,
    /// The hero being edited, once loaded.
    pub hero: Option<Hero>,
}

impl<'a, T, M> HeroDetailView<'a, T, M>
where
    T: HeroTransport,
    M: MessageSink,
{
    /// A detail view with nothing loaded.
    pub const fn new(service: &'a HeroService<T, M>) -> Self {
        Self {
            service,
            hero: None,
        }
    }

    /// Load hero `id`; leaves `hero` empty if it cannot be fetched.
    pub async fn load(&mut self, id: HeroId) {
        self.hero = self.service.get_hero(id).await.into_value();
    }

    /// Edit the loaded hero's name locally. Returns `false` when nothing is
    /// loaded.
    pub fn rename(&mut self, raw_name: &str) -> bool {
        match &mut self.hero {
            Some(hero) => {
                raw_name.clone_into(&mut hero.name);
                true
            }
            None => false,
        }
    }

    /// Send the edited hero to the server.
    pub async fn save(&mut self) -> SaveStatus {
        let Some(hero) = &mut self.hero else {
            return SaveStatus::NothingLoaded;
        };
        match HeroName::parse(&hero.name) {
            Ok(name) => hero.name = name.into(),
            Err(InvalidHeroName::Blank) => return SaveStatus::BlankName,
        }
        if self.service.update_hero(hero).await.is_success() {
            SaveStatus::Saved
        } else {
            SaveStatus::Failed
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Live name search.
pub struct HeroSearchView<'a, T, M> {
    service: &'a HeroService<T, M>,
    last_term: Option<String>,
    /// Heroes matching the last term searched.
    pub results: Vec<Hero>,
}

impl<'a, T, M> HeroSearchView<'a, T, M>
where
    T: HeroTransport,
    M: MessageSink,
{
    /// A search box with no results.
    pub const fn new(service: &'a HeroService<T, M>) -> Self {
        Self {
            service,
            last_term: None,
            results: Vec::new(),
        }
    }

    /// Search for `term`. Repeating the previous term is a no-op; returns
    /// whether a search was performed.
    pub async fn search(&mut self, term: &str) -> bool {
        if self.last_term.as_deref() == Some(term) {
            return false;
        }
        self.last_term = Some(term.to_owned());
        self.results = self.service.search_heroes(term).await.into_value();
        true
    }
}
