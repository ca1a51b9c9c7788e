//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod downstream_version_repo;

pub use downstream_version_repo::DownstreamVersionRepo;
