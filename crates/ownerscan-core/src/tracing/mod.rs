//! Observability for ownerscan.
//! `tracing` crate with `EnvFilter`, log output on stderr.

pub mod fields;
pub mod setup;

pub use setup::init_tracing;
