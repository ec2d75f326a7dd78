//! Statistics pipeline (request schema -> matrices -> summary).
//!
//! This module hosts the three stages of the service's only operation:
//! - `request`: the typed `POST /stats` body with the Q/R shape check.
//! - `matrix`: row-of-rows matrix values and the diagonal predicate.
//! - `summary`: the single-pass fold producing max/min/sum/average.
//!
//! All stages are panic-free: malformed input is reported as `MatStatsError`
//! instead of panicking, keeping the gateway resilient to hostile bodies.

pub mod matrix;
pub mod request;
pub mod summary;

pub use matrix::Matrix;
pub use request::StatsRequest;
pub use summary::{compute, StatsSummary};
