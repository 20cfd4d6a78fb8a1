#![doc = include_str!("../README.md")]

mod api;
mod client;
mod error;

pub use api::LeaderboardApi;
pub use client::LeaderboardClient;
pub use error::ClientError;
