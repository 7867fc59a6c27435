//! Failure taxonomy for forecast-service round trips.
//!
//! Every fetch resolves to either a payload or one of these variants; nothing
//! is thrown across component boundaries. The variants stay free of display
//! text: [`FetchError::message_key`] bridges into the localization table.

use reqwest::StatusCode;
use thiserror::Error;

use crate::locale::MessageKey;

/// Classified outcome of a failed round trip.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The service answered 404 for the requested city.
    #[error("city not found")]
    CityNotFound,

    /// The service answered with any other error status.
    #[error("server responded with status {0}")]
    Server(u16),

    /// A 2xx answer whose body could not be decoded.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    /// No response at all: DNS, refused connection, timeout.
    #[error("network failure: {0}")]
    Network(String),
}

impl FetchError {
    /// Classify an error status from the forecast endpoint.
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::NOT_FOUND {
            FetchError::CityNotFound
        } else {
            FetchError::Server(status.as_u16())
        }
    }

    /// Message key for user-facing display.
    ///
    /// An undecodable body collapses into the server-error message: a
    /// response was received, so "network error" would mislead.
    pub fn message_key(&self) -> MessageKey {
        match self {
            FetchError::CityNotFound => MessageKey::CityNotFound,
            FetchError::Server(_) | FetchError::InvalidResponse(_) => MessageKey::ServerError,
            FetchError::Network(_) => MessageKey::NetworkError,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return FetchError::InvalidResponse(e.to_string());
        }
        match e.status() {
            Some(status) => FetchError::from_status(status),
            None => FetchError::Network(e.to_string()),
        }
    }
}
