//! Wires the session, the HTTP client, and the state reducer together.
//!
//! Every submit spawns one task: forecast round trip, completion event, and
//! only on success a history round trip with its own completion event. All
//! events funnel through one channel into the single reducer, which is what
//! turns overlapping submits into a well-defined last-write-wins.

use std::sync::Arc;

use tokio::sync::mpsc;

use skycast_weather::WeatherClient;

use crate::session::Session;
use crate::state::{DashboardState, StateEvent};
use crate::view::{self, DashboardView};

/// Owns the session, the dashboard state, and the completion channel.
pub struct Dashboard {
    session: Session,
    state: DashboardState,
    client: Arc<WeatherClient>,
    history_limit: u32,
    events_tx: mpsc::UnboundedSender<StateEvent>,
    events_rx: mpsc::UnboundedReceiver<StateEvent>,
}

impl Dashboard {
    pub fn new(client: WeatherClient, history_limit: u32) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            session: Session::default(),
            state: DashboardState::default(),
            client: Arc::new(client),
            history_limit,
            events_tx,
            events_rx,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Replace the session with a new revision, e.g.
    /// `dashboard.update_session(|s| s.with_city("London"))`.
    pub fn update_session(&mut self, revise: impl FnOnce(Session) -> Session) {
        self.session = revise(self.session.clone());
    }

    /// Submit the current session.
    ///
    /// Always fires, even with an empty city (the service answers that with
    /// an error status; nothing is validated locally). Overlapping submits
    /// are allowed and race; the completion applied last wins. The history
    /// refresh is initiated only after the forecast resolves successfully,
    /// and its outcome never affects the forecast's.
    pub fn submit(&mut self) {
        let city = self.session.city.clone();
        let language = self.session.language;
        self.state.begin_fetch();

        tracing::info!(city = %city, lang = language.lang_code(), "Forecast lookup submitted");

        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        let limit = self.history_limit;

        tokio::spawn(async move {
            let result = client.forecast(&city, language).await;
            let fetched = result.is_ok();

            if tx.send(StateEvent::ForecastDone { language, result }).is_err() {
                return;
            }

            if fetched {
                let history = client.history(limit).await;
                let _ = tx.send(StateEvent::HistoryDone(history));
            }
        });
    }

    /// Wait for the next completion and apply it. Returns `false` once the
    /// channel closes.
    pub async fn recv_apply(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => {
                self.state.apply(event);
                true
            }
            None => false,
        }
    }

    /// Apply every completion already delivered, without waiting. Returns
    /// how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.state.apply(event);
            applied += 1;
        }
        applied
    }

    /// Snapshot of the current state for the rendering layer.
    pub fn view(&self) -> DashboardView {
        view::render(&self.session, &self.state)
    }
}
