//! matstats core: request schema, matrix shape validation, and the statistics
//! computation.
//!
//! This crate defines the typed wire contracts and error surface shared by the
//! gateway and by test tooling. It intentionally carries no transport or
//! runtime dependencies so the computation can be driven from any HTTP layer.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `MatStatsError`/`Result` so a gateway
//! process does not crash on malformed request bodies.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod stats;

/// Shared result type.
pub use error::{MatStatsError, Result};
