//! Dashboard session for Skycast.
//!
//! This crate owns the user-facing state machine: session settings revised by
//! user actions, the reducer applying fetch completions, the coordinator that
//! spawns fetch tasks and serializes their completions through one channel,
//! and the pure view snapshots handed to the rendering layer.

pub mod coordinator;
pub mod session;
pub mod state;
pub mod view;

pub use coordinator::Dashboard;
pub use session::{DisplayMode, ForecastDays, Session};
pub use state::{DashboardState, StateEvent};
pub use view::{DashboardView, DayCard, ForecastView, HistoryCard, HistoryView};
