//! Mock hero API for the Tour of Heroes.
//!
//! An Axum HTTP server holding the hero table in memory, answering the
//! REST surface the hero client talks to:
//!
//! - `GET /api/heroes` (with optional `?name=` search)
//! - `GET /api/heroes/{id}`
//! - `PUT /api/heroes`
//! - `POST /api/heroes`
//! - `DELETE /api/heroes/{id}`
//!
//! Errors come back as `{"error": ..., "status": ...}` JSON bodies. Nothing
//! is persisted; restart the server and the table is back to its seed.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, serve, serve_until, start_server};
pub use state::{AppState, HeroTable};
