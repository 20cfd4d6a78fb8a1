//! Typed error definitions shared across ScoreSync crates.
//!
//! Storage and network errors live next to the code that raises them
//! (`scoresync-core` and `scoresync-client`); only errors that cross every
//! crate boundary are defined here.

mod config;

pub use config::ConfigError;
