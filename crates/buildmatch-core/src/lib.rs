//! BuildMatch Core
//!
//! Layered architecture:
//! - domain: entities, validation rules and the quote-flow state machines
//! - session: one visitor's wizard, selections, tickets and auth detour
//! - config: optional JSON overrides for the backend
//! - auth / repository: SQLite-backed accounts and profiles (`store` feature)
//!
//! Without the `store` feature the crate is pure and builds for WASM, so the
//! front-end shares the same types and filter logic.

pub mod domain;
pub mod session;

#[cfg(feature = "store")]
pub mod config;
#[cfg(feature = "store")]
pub mod repository;
#[cfg(feature = "store")]
pub mod auth;

pub use session::{
    AuthOutcome, Identity, QuoteRequest, ResumeOutcome, SelectionOutcome, SessionController,
    SessionSnapshot, SubmissionPlan,
};
