//! Dashboard state and the reducer applying fetch completions.
//!
//! The state has a single writer: completions arrive over one channel and are
//! applied in completion order, so overlapping lookups resolve to
//! last-write-wins instead of a data race.

use skycast_core::{localize, FetchError, Language};
use skycast_weather::{Forecast, HistoryEntry};

/// Completion events produced by fetch tasks.
#[derive(Debug)]
pub enum StateEvent {
    /// The forecast round trip finished. `language` is the language the
    /// request was issued with, used to localize a failure.
    ForecastDone {
        language: Language,
        result: Result<Forecast, FetchError>,
    },
    /// The history round trip finished. Only ever issued after a forecast
    /// success.
    HistoryDone(Result<Vec<HistoryEntry>, FetchError>),
}

/// Mutable dashboard state fed by [`StateEvent`]s.
///
/// A fresh forecast and an error are mutually exclusive: each forecast
/// completion sets one side and clears the other. History is best-effort and
/// independent of the error slot.
#[derive(Debug, Default)]
pub struct DashboardState {
    forecast: Option<Forecast>,
    error: Option<&'static str>,
    history: Vec<HistoryEntry>,
    pending: u32,
}

impl DashboardState {
    pub fn forecast(&self) -> Option<&Forecast> {
        self.forecast.as_ref()
    }

    /// Localized message of the last failed forecast, if the last completion
    /// was a failure.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Most recent lookup records, newest first as received.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// True while at least one forecast request is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// Record that a forecast request went out.
    pub(crate) fn begin_fetch(&mut self) {
        self.pending += 1;
    }

    /// Apply a completion event.
    pub fn apply(&mut self, event: StateEvent) {
        match event {
            StateEvent::ForecastDone { language, result } => {
                self.pending = self.pending.saturating_sub(1);
                match result {
                    Ok(forecast) => {
                        tracing::info!(city = %forecast.city, "Forecast applied");
                        self.forecast = Some(forecast);
                        self.error = None;
                    }
                    Err(e) => {
                        // A failure discards the previous forecast rather
                        // than presenting stale data next to an error.
                        tracing::warn!(error = %e, "Forecast failed");
                        self.forecast = None;
                        self.error = Some(localize(language, e.message_key()));
                    }
                }
            }
            StateEvent::HistoryDone(Ok(history)) => {
                tracing::debug!(records = history.len(), "History applied");
                self.history = history;
            }
            StateEvent::HistoryDone(Err(e)) => {
                // History is best-effort: a failed refresh empties it and
                // surfaces nothing to the user.
                tracing::warn!(error = %e, "History refresh failed");
                self.history.clear();
            }
        }
    }
}
