//! Hero data access for the Tour of Heroes.
//!
//! The heart of this crate is [`HeroService`], a data-access layer with one
//! policy for every operation: log what happened to the [`MessageLog`],
//! and on failure hand back a fallback value instead of an error. Callers
//! never have to special-case a failed request; the message log is where
//! failures become visible.
//!
//! # Architecture
//!
//! ```text
//! views (dashboard, list, detail, search)
//!    |
//! HeroService --> MessageSink (MessageLog)
//!    |
//! HeroTransport (HttpTransport / reqwest) --> hero API
//! ```
//!
//! Collaborators are passed in at construction; there is no global state.

pub mod config;
pub mod error;
pub mod messages;
pub mod outcome;
pub mod service;
pub mod transport;
pub mod views;

// Re-export primary types for convenience.
pub use config::ClientConfig;
pub use error::{ConfigError, HeroError};
pub use messages::{MessageLog, MessageSink};
pub use outcome::Outcome;
pub use service::HeroService;
pub use transport::{ApiMethod, ApiRequest, ApiResponse, HeroTransport, HttpTransport};
pub use views::{
    DashboardView, HeroDetailView, HeroSearchView, HeroesView, Navigator, Route, SaveStatus,
};
