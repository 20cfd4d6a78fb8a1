//! Local storage, synchronization, leaderboard caching and configuration modules.

pub mod config;
pub mod leaderboard_cache;
pub mod logger;
pub mod reconciler;
pub mod record_store;
pub mod service;
