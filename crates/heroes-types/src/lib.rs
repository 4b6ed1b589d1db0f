//! Shared type definitions for the Tour of Heroes workspace.
//!
//! This crate is the single source of truth for the hero records that flow
//! between the mock API server and the client. Types defined here are
//! exported to `TypeScript` via `ts-rs` for a browser front end.
//!
//! # Modules
//!
//! - [`ids`] -- Integer id newtype for heroes
//! - [`name`] -- Validated, never-blank hero names
//! - [`structs`] -- Hero records and create-request bodies

pub mod ids;
pub mod name;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use ids::HeroId;
pub use name::{HeroName, InvalidHeroName};
pub use structs::{Hero, NewHero};
