//! Configuration: persisted preferences and seed data.

/// Theme and language preferences, persisted to a small TOML file
pub mod prefs;
/// Static sample records the in-memory state starts from
pub mod seed;
