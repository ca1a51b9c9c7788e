//! Domain logic for preflight check dispatch.
//!
//! This crate has no database dependencies. Persistence is reached through
//! the [`preflight::PendingPreflightSource`] trait, which the `db` crate
//! implements over a PostgreSQL pool.

pub mod endpoints;
pub mod error;
pub mod preflight;
pub mod types;
