//! The hero data-access layer.
//!
//! [`HeroService`] turns each hero operation into one request, and applies
//! the same policy to every answer:
//!
//! 1. On success, append `HeroService: <what happened>` to the message log
//!    and return [`Outcome::Success`] with the decoded payload.
//! 2. On any failure (transport, non-2xx status, undecodable body), append
//!    `HeroService: <operation> failed: <reason>`, emit an error trace, and
//!    return [`Outcome::Failure`] carrying the operation's fallback.
//!
//! Exactly one message is logged per call, whichever way it goes. Nothing
//! is retried and no error escapes as an `Err`.

use heroes_types::{Hero, HeroId, NewHero};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::HeroError;
use crate::messages::MessageSink;
use crate::outcome::Outcome;
use crate::transport::{ApiMethod, ApiRequest, ApiResponse, HeroTransport};

/// Path of the hero collection, relative to the API base URL.
pub const HEROES_URL: &str = "api/heroes";

/// Prefix on every message this service writes to the log.
const LOG_SOURCE: &str = "HeroService";

/// Error body shape returned by the hero API.
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Hero CRUD and search over a [`HeroTransport`], reporting to a
/// [`MessageSink`].
pub struct HeroService<T, M> {
    transport: T,
    messages: M,
}

impl<T, M> HeroService<T, M>
where
    T: HeroTransport,
    M: MessageSink,
{
    /// Wire a service to its transport and message sink.
    pub const fn new(transport: T, messages: M) -> Self {
        Self {
            transport,
            messages,
        }
    }

    /// The transport requests go through.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// The sink this service reports to.
    pub const fn messages(&self) -> &M {
        &self.messages
    }

    /// `GET api/heroes`. Falls back to an empty list.
    pub async fn list_heroes(&self) -> Outcome<Vec<Hero>> {
        let request = ApiRequest::new(ApiMethod::Get, HEROES_URL);
        match self.fetch_json::<Vec<Hero>>(request).await {
            Ok(heroes) => {
                debug!(count = heroes.len(), "fetched heroes");
                self.log("fetched heroes");
                Outcome::Success(heroes)
            }
            Err(e) => self.handle_error("list_heroes", Vec::new(), e),
        }
    }

    /// `GET api/heroes/{id}`. Falls back to `None`, including when the hero
    /// does not exist.
    pub async fn get_hero(&self, id: HeroId) -> Outcome<Option<Hero>> {
        let request = ApiRequest::new(ApiMethod::Get, hero_url(id));
        match self.fetch_json::<Hero>(request).await {
            Ok(hero) => {
                debug!(%id, "fetched hero");
                self.log(&format!("fetched hero id={id}"));
                Outcome::Success(Some(hero))
            }
            Err(e) => self.handle_error(&format!("get_hero id={id}"), None, e),
        }
    }

    /// `POST api/heroes`. The server assigns the id; falls back to `None`.
    pub async fn add_hero(&self, hero: &NewHero) -> Outcome<Option<Hero>> {
        let result: Result<Hero, HeroError> = async {
            let body = serde_json::to_value(hero)?;
            let request = ApiRequest::new(ApiMethod::Post, HEROES_URL).with_body(body);
            self.fetch_json::<Hero>(request).await
        }
        .await;

        match result {
            Ok(created) => {
                debug!(id = %created.id, name = %created.name, "added hero");
                self.log(&format!("added hero w/ id={}", created.id));
                Outcome::Success(Some(created))
            }
            Err(e) => self.handle_error("add_hero", None, e),
        }
    }

    /// `PUT api/heroes` with the full record. Any response body is ignored.
    pub async fn update_hero(&self, hero: &Hero) -> Outcome<()> {
        let id = hero.id;
        let result: Result<(), HeroError> = async {
            let body = serde_json::to_value(hero)?;
            let request = ApiRequest::new(ApiMethod::Put, HEROES_URL).with_body(body);
            self.fetch(request).await.map(drop)
        }
        .await;

        match result {
            Ok(()) => {
                debug!(%id, "updated hero");
                self.log(&format!("updated hero id={id}"));
                Outcome::Success(())
            }
            Err(e) => self.handle_error(&format!("update_hero id={id}"), (), e),
        }
    }

    /// `DELETE api/heroes/{id}`. Returns the deleted record when the server
    /// sends one back; falls back to `None`.
    pub async fn delete_hero(&self, id: HeroId) -> Outcome<Option<Hero>> {
        let request = ApiRequest::new(ApiMethod::Delete, hero_url(id));
        match self.fetch_optional_json::<Hero>(request).await {
            Ok(deleted) => {
                debug!(%id, "deleted hero");
                self.log(&format!("deleted hero id={id}"));
                Outcome::Success(deleted)
            }
            Err(e) => self.handle_error(&format!("delete_hero id={id}"), None, e),
        }
    }

    /// `GET api/heroes/?name={term}`: heroes whose name contains `term`.
    ///
    /// A blank term matches nothing and is answered locally without a
    /// request; it is still logged.
    pub async fn search_heroes(&self, term: &str) -> Outcome<Vec<Hero>> {
        let term = term.trim();
        if term.is_empty() {
            self.log("search skipped, blank term");
            return Outcome::Success(Vec::new());
        }

        let request =
            ApiRequest::new(ApiMethod::Get, format!("{HEROES_URL}/")).with_query("name", term);
        match self.fetch_json::<Vec<Hero>>(request).await {
            Ok(heroes) => {
                debug!(term, count = heroes.len(), "searched heroes");
                if heroes.is_empty() {
                    self.log(&format!("no heroes matching \"{term}\""));
                } else {
                    self.log(&format!("found heroes matching \"{term}\""));
                }
                Outcome::Success(heroes)
            }
            Err(e) => self.handle_error(&format!("search_heroes term=\"{term}\""), Vec::new(), e),
        }
    }

    // -----------------------------------------------------------------------
    // Shared request plumbing
    // -----------------------------------------------------------------------

    /// Send `request` and insist on a 2xx status.
    async fn fetch(&self, request: ApiRequest) -> Result<ApiResponse, HeroError> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(status_error(response));
        }
        Ok(response)
    }

    /// Send `request` and decode a required JSON body.
    async fn fetch_json<D: DeserializeOwned>(&self, request: ApiRequest) -> Result<D, HeroError> {
        let response = self.fetch(request).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Send `request` and decode the JSON body if there is one.
    async fn fetch_optional_json<D: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Option<D>, HeroError> {
        let response = self.fetch(request).await?;
        if response.body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&response.body)?))
    }

    /// Log the failure, trace it, and hand back the fallback.
    fn handle_error<V>(&self, operation: &str, fallback: V, reason: HeroError) -> Outcome<V> {
        error!(operation, status = ?reason.status(), error = %reason, "hero request failed");
        self.log(&format!("{operation} failed: {reason}"));
        Outcome::Failure { fallback, reason }
    }

    fn log(&self, message: &str) {
        self.messages.add(format!("{LOG_SOURCE}: {message}"));
    }
}

fn hero_url(id: HeroId) -> String {
    format!("{HEROES_URL}/{id}")
}

/// Build a [`HeroError::Status`], preferring the API's `error` field over
/// the raw body.
fn status_error(response: ApiResponse) -> HeroError {
    let message = match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(body) => body.error,
        Err(_) if response.body.trim().is_empty() => String::from("empty response"),
        Err(_) => response.body,
    };
    HeroError::Status {
        status: response.status,
        message,
    }
}
