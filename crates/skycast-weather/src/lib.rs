//! Forecast-service access for Skycast.
//!
//! Provides the HTTP client for the forecast and history endpoints, the wire
//! types both return, and the weekly-grid transformation of the lookup
//! history.

pub mod client;
pub mod history;
pub mod types;

pub use client::WeatherClient;
pub use history::{weekly_grid, WEEK_WIDTH};
pub use types::{icon_url, DayForecast, Forecast, HistoryEntry, HistoryResponse};
