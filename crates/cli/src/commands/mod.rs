//! CLI command implementations.

pub mod account;
pub mod migrate;
pub mod seed;
