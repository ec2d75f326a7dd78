//! HTTP layer (request handlers).
//!
//! Exposes the stats handler; JSON bodies are decoded once by the extractor
//! before the shape check runs.

pub mod stats;
