//! Presentation snapshots.
//!
//! Pure functions from state to renderable data: no I/O, deterministic for a
//! given state. The rendering layer draws these without touching the state
//! machine.

use chrono::NaiveDate;

use skycast_core::{localize, MessageKey};
use skycast_weather::{icon_url, weekly_grid};

use crate::session::{DisplayMode, Session};
use crate::state::DashboardState;

/// One forecast day prepared for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCard {
    pub date: String,
    pub temperature: f64,
    pub description: String,
    pub icon_url: String,
}

/// Forecast section, shaped by the session's display mode and day count.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastView {
    pub city: String,
    pub mode: DisplayMode,
    pub days: Vec<DayCard>,
    pub source_label: &'static str,
}

/// One past lookup prepared for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryCard {
    pub city: String,
    pub forecast_date: NaiveDate,
    pub avg_temperature: f64,
    pub description: String,
    pub icon_url: String,
}

/// History section: a grid of seven-slot rows, or the localized empty
/// message when there is nothing to show. A failed refresh renders as
/// `Empty`, never as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryView {
    Grid {
        title: &'static str,
        rows: Vec<Vec<Option<HistoryCard>>>,
    },
    Empty {
        title: &'static str,
        message: &'static str,
    },
}

/// Full snapshot consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub loading: bool,
    pub error: Option<&'static str>,
    pub forecast: Option<ForecastView>,
    pub history: HistoryView,
}

/// Build the snapshot for the current session and state.
pub fn render(session: &Session, state: &DashboardState) -> DashboardView {
    let forecast = state.forecast().map(|forecast| {
        // Chart view truncates to the selected day count; list view shows
        // every returned day.
        let shown = match session.display_mode {
            DisplayMode::Chart => &forecast.forecast[..forecast
                .forecast
                .len()
                .min(session.days.as_u8() as usize)],
            DisplayMode::List => &forecast.forecast[..],
        };

        ForecastView {
            city: forecast.city.clone(),
            mode: session.display_mode,
            days: shown
                .iter()
                .map(|day| DayCard {
                    date: day.date.clone(),
                    temperature: day.temperature,
                    description: day.description.clone(),
                    icon_url: icon_url(&day.icon),
                })
                .collect(),
            source_label: if forecast.from_cache {
                "From cache"
            } else {
                "From OpenWeatherMap"
            },
        }
    });

    let title = localize(session.language, MessageKey::HistoryTitle);
    let history = if state.history().is_empty() {
        HistoryView::Empty {
            title,
            message: localize(session.language, MessageKey::HistoryEmpty),
        }
    } else {
        HistoryView::Grid {
            title,
            rows: weekly_grid(state.history())
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|slot| {
                            slot.map(|entry| HistoryCard {
                                city: entry.city,
                                forecast_date: entry.forecast_date,
                                avg_temperature: entry.avg_temperature,
                                description: entry.description,
                                icon_url: icon_url(&entry.icon),
                            })
                        })
                        .collect()
                })
                .collect(),
        }
    };

    DashboardView {
        loading: state.is_loading(),
        error: state.error(),
        forecast,
        history,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use skycast_core::{FetchError, Language};
    use skycast_weather::{DayForecast, Forecast, HistoryEntry};

    use crate::session::ForecastDays;
    use crate::state::StateEvent;

    fn day(n: u32) -> DayForecast {
        DayForecast {
            date: format!("2025-03-{n:02} 12:00:00"),
            temperature: n as f64,
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
        }
    }

    fn forecast(city: &str, days: usize) -> Forecast {
        Forecast {
            city: city.to_string(),
            forecast: (1..=days as u32).map(day).collect(),
            country: None,
            from_cache: false,
        }
    }

    fn entry(city: &str) -> HistoryEntry {
        HistoryEntry {
            city: city.to_string(),
            forecast_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            avg_temperature: 5.0,
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
            request_time: None,
        }
    }

    fn state_with_forecast(city: &str, days: usize) -> DashboardState {
        let mut state = DashboardState::default();
        state.apply(StateEvent::ForecastDone {
            language: Language::En,
            result: Ok(forecast(city, days)),
        });
        state
    }

    #[test]
    fn chart_mode_truncates_to_selected_days() {
        let session = Session::default().with_days(ForecastDays::Three);
        let state = state_with_forecast("London", 5);

        let view = render(&session, &state);
        let forecast_view = view.forecast.unwrap();
        assert_eq!(forecast_view.mode, DisplayMode::Chart);
        assert_eq!(forecast_view.days.len(), 3);
        assert_eq!(forecast_view.days[0].icon_url, icon_url("01d"));
    }

    #[test]
    fn list_mode_shows_all_returned_days() {
        let session = Session::default()
            .with_days(ForecastDays::Three)
            .toggled_display_mode();
        let state = state_with_forecast("London", 5);

        let view = render(&session, &state);
        assert_eq!(view.forecast.unwrap().days.len(), 5);
    }

    #[test]
    fn chart_mode_handles_fewer_days_than_selected() {
        let session = Session::default().with_days(ForecastDays::Thirty);
        let state = state_with_forecast("London", 5);

        let view = render(&session, &state);
        assert_eq!(view.forecast.unwrap().days.len(), 5);
    }

    #[test]
    fn source_label_reflects_cache_flag() {
        let session = Session::default();
        let mut state = DashboardState::default();
        let mut cached = forecast("London", 1);
        cached.from_cache = true;
        state.apply(StateEvent::ForecastDone {
            language: Language::En,
            result: Ok(cached),
        });

        let view = render(&session, &state);
        assert_eq!(view.forecast.unwrap().source_label, "From cache");
    }

    #[test]
    fn failed_lookup_renders_error_without_forecast() {
        let session = Session::default();
        let mut state = DashboardState::default();
        state.apply(StateEvent::ForecastDone {
            language: Language::Ru,
            result: Err(FetchError::CityNotFound),
        });

        let view = render(&session, &state);
        assert!(view.forecast.is_none());
        assert_eq!(view.error, Some("Город не найден"));
    }

    #[test]
    fn empty_history_renders_localized_message() {
        let session = Session::default();
        let view = render(&session, &DashboardState::default());

        assert_eq!(
            view.history,
            HistoryView::Empty {
                title: "История запросов",
                message: "История пока пуста",
            }
        );

        let view = render(&session.toggled_language(), &DashboardState::default());
        match view.history {
            HistoryView::Empty { title, message } => {
                assert_eq!(title, "Request History");
                assert_eq!(message, "History is empty");
            }
            HistoryView::Grid { .. } => panic!("expected empty history view"),
        }
    }

    #[test]
    fn history_renders_as_padded_weekly_grid() {
        let session = Session::default();
        let mut state = DashboardState::default();
        let records: Vec<HistoryEntry> = (0..10).map(|i| entry(&format!("City {i}"))).collect();
        state.apply(StateEvent::HistoryDone(Ok(records)));

        let view = render(&session, &state);
        match view.history {
            HistoryView::Grid { rows, .. } => {
                assert_eq!(rows.len(), 2);
                assert!(rows[0].iter().all(Option::is_some));
                assert_eq!(rows[1].iter().filter(|slot| slot.is_some()).count(), 3);
                let card = rows[0][0].as_ref().unwrap();
                assert_eq!(card.city, "City 0");
                assert_eq!(card.icon_url, icon_url("01d"));
            }
            HistoryView::Empty { .. } => panic!("expected grid"),
        }
    }

    #[test]
    fn render_is_pure() {
        let session = Session::default();
        let state = state_with_forecast("London", 5);
        assert_eq!(render(&session, &state), render(&session, &state));
    }
}
