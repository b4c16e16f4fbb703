// Upstream Fantasy Premier League API: payload types, cached client, league search.

pub mod client;
pub mod league;
pub mod types;

pub use client::{FplClient, SeasonSource};
pub use league::search_managers;
