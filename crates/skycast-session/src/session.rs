//! Session settings: one revision per user action.
//!
//! Actions consume the current revision and return the next one, so a fetch
//! task holding a snapshot can never observe a half-updated session.

use serde::{Deserialize, Serialize};

use skycast_core::Language;

/// Forecast display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Chart,
    List,
}

impl DisplayMode {
    /// The other mode. The UI exposes a single toggle.
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Chart => DisplayMode::List,
            DisplayMode::List => DisplayMode::Chart,
        }
    }
}

/// Supported forecast lengths, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ForecastDays {
    One,
    Three,
    Five,
    Seven,
    Fifteen,
    Thirty,
}

impl ForecastDays {
    pub fn as_u8(self) -> u8 {
        match self {
            ForecastDays::One => 1,
            ForecastDays::Three => 3,
            ForecastDays::Five => 5,
            ForecastDays::Seven => 7,
            ForecastDays::Fifteen => 15,
            ForecastDays::Thirty => 30,
        }
    }

    pub const fn all() -> &'static [ForecastDays] {
        &[
            ForecastDays::One,
            ForecastDays::Three,
            ForecastDays::Five,
            ForecastDays::Seven,
            ForecastDays::Fifteen,
            ForecastDays::Thirty,
        ]
    }
}

impl Default for ForecastDays {
    fn default() -> Self {
        ForecastDays::Five
    }
}

impl From<ForecastDays> for u8 {
    fn from(days: ForecastDays) -> Self {
        days.as_u8()
    }
}

impl TryFrom<u8> for ForecastDays {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ForecastDays::One),
            3 => Ok(ForecastDays::Three),
            5 => Ok(ForecastDays::Five),
            7 => Ok(ForecastDays::Seven),
            15 => Ok(ForecastDays::Fifteen),
            30 => Ok(ForecastDays::Thirty),
            _ => Err(anyhow::anyhow!(
                "Unsupported forecast length '{value}'. Supported: 1, 3, 5, 7, 15, 30."
            )),
        }
    }
}

/// Session settings. Defaults match the dashboard's initial screen: empty
/// city, five days, Russian, chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Session {
    pub city: String,
    pub days: ForecastDays,
    pub language: Language,
    pub display_mode: DisplayMode,
}

impl Session {
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    #[must_use]
    pub fn with_days(mut self, days: ForecastDays) -> Self {
        self.days = days;
        self
    }

    #[must_use]
    pub fn toggled_language(mut self) -> Self {
        self.language = self.language.toggled();
        self
    }

    #[must_use]
    pub fn toggled_display_mode(mut self) -> Self {
        self.display_mode = self.display_mode.toggled();
        self
    }
}
