//! Row structs mapped from query results.

pub mod downstream_version;
