//! Player strokes-gained statistics service.
//!
//! Mirrors the DataGolf true-strokes-gained lookup: given an exact player
//! name, return a two-window statistic bundle (`"2-year"` baseline and
//! `"3-month"` recent form). Ships an in-process mock registry plus a thin
//! HTTP client speaking the same wire contract.

pub mod http;
mod mock_data;
pub mod service;
pub mod types;

pub use http::RemoteDataGolf;
pub use service::{DataGolfError, MockDataGolf, StatsProvider};
pub use types::{PlayerStats, StrokesGained};
