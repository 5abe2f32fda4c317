//! Core types, errors, configuration, and tracing for ownerscan.
//!
//! This crate carries no domain logic. The ownership resolver and change
//! aggregator live in `ownerscan-analysis`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
