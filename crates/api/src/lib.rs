//! MindWell backend API library.
//!
//! JSON API for the MindWell mental-wellness platform: accounts and
//! sessions, appointment booking, the counselor directory, contact
//! messages, and the relaxation music library.
//!
//! Exposed as a library so the CLI can reuse configuration, seeding, and
//! the repositories.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
