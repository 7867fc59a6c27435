//! Wire types for the forecast service.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One day of a returned forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    /// Forecast timestamp as the service formats it (`YYYY-MM-DD HH:MM:SS`).
    /// Printed verbatim by the presentation layer, so kept as received.
    pub date: String,
    pub temperature: f64,
    pub description: String,
    pub icon: String,
}

/// Forecast payload for one city lookup. Replaced wholesale on each fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub city: String,
    pub forecast: Vec<DayForecast>,
    /// Country code; older service versions omit it.
    #[serde(default)]
    pub country: Option<String>,
    #[serde(rename = "fromCache", default)]
    pub from_cache: bool,
}

/// One aggregated record of a past lookup. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub city: String,
    pub forecast_date: NaiveDate,
    pub avg_temperature: f64,
    pub description: String,
    pub icon: String,
    /// When the lookup that produced this record was made.
    #[serde(default)]
    pub request_time: Option<DateTime<Utc>>,
}

/// Wire envelope of the history endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

const ICON_URL_BASE: &str = "http://openweathermap.org/img/wn";

/// Resolve a provider icon code to its image URL.
///
/// Pure string interpolation; no request is made here.
pub fn icon_url(icon: &str) -> String {
    format!("{ICON_URL_BASE}/{icon}@2x.png")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn forecast_deserializes_from_service_payload() {
        let payload = serde_json::json!({
            "city": "London",
            "forecast": [
                {"date": "2025-03-01 12:00:00", "temperature": 7.4, "description": "light rain", "icon": "10d"},
                {"date": "2025-03-02 12:00:00", "temperature": 9.1, "description": "clear sky", "icon": "01d"}
            ],
            "country": "GB",
            "fromCache": true
        });

        let forecast: Forecast = serde_json::from_value(payload).unwrap();
        assert_eq!(forecast.city, "London");
        assert_eq!(forecast.forecast.len(), 2);
        assert_eq!(forecast.forecast[0].icon, "10d");
        assert_eq!(forecast.country.as_deref(), Some("GB"));
        assert!(forecast.from_cache);
    }

    #[test]
    fn forecast_tolerates_missing_optional_fields() {
        let payload = serde_json::json!({
            "city": "Paris",
            "forecast": []
        });

        let forecast: Forecast = serde_json::from_value(payload).unwrap();
        assert!(forecast.country.is_none());
        assert!(!forecast.from_cache);
    }

    #[test]
    fn history_entry_parses_dates() {
        let payload = serde_json::json!({
            "history": [
                {
                    "city": "London",
                    "forecast_date": "2025-03-01",
                    "avg_temperature": 6.85,
                    "description": "light rain",
                    "icon": "10d",
                    "request_time": "2025-03-01T09:30:00Z"
                },
                {
                    "city": "Paris",
                    "forecast_date": "2025-02-28",
                    "avg_temperature": 8.1,
                    "description": "clear sky",
                    "icon": "01d"
                }
            ]
        });

        let response: HistoryResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.history.len(), 2);
        assert_eq!(
            response.history[0].forecast_date,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(response.history[0].request_time.is_some());
        assert!(response.history[1].request_time.is_none());
    }

    #[test]
    fn icon_url_interpolates_code() {
        assert_eq!(
            icon_url("10d"),
            "http://openweathermap.org/img/wn/10d@2x.png"
        );
    }
}
