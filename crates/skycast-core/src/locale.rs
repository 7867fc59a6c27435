//! Localization of user-visible strings.
//!
//! Classification code never carries display text; it produces a
//! [`MessageKey`] and the presentation side resolves it here with the
//! language the request was issued in.

use serde::{Deserialize, Serialize};

/// Interface language selected in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    /// Wire code sent as the `lang` query parameter.
    pub fn lang_code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// The other language. The UI exposes a single toggle, not a picker.
    pub fn toggled(self) -> Self {
        match self {
            Language::Ru => Language::En,
            Language::En => Language::Ru,
        }
    }
}

/// Keys for user-visible strings, resolved via [`localize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    CityNotFound,
    ServerError,
    NetworkError,
    HistoryTitle,
    HistoryEmpty,
}

/// Look up the display string for a message in the given language.
pub fn localize(language: Language, key: MessageKey) -> &'static str {
    match (language, key) {
        (Language::Ru, MessageKey::CityNotFound) => "Город не найден",
        (Language::En, MessageKey::CityNotFound) => "City not found",
        (Language::Ru, MessageKey::ServerError) => "Ошибка сервера",
        (Language::En, MessageKey::ServerError) => "Server error",
        (Language::Ru, MessageKey::NetworkError) => "Ошибка сети",
        (Language::En, MessageKey::NetworkError) => "Network error",
        (Language::Ru, MessageKey::HistoryTitle) => "История запросов",
        (Language::En, MessageKey::HistoryTitle) => "Request History",
        (Language::Ru, MessageKey::HistoryEmpty) => "История пока пуста",
        (Language::En, MessageKey::HistoryEmpty) => "History is empty",
    }
}
