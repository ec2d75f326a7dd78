//! Top-level facade crate for matstats.
//!
//! Re-exports the core types and the gateway library so users can depend on a
//! single crate.

pub mod core {
    pub use matstats_core::*;
}

pub mod gateway {
    pub use matstats_gateway::*;
}
