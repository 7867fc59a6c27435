//! Core library for the Skycast dashboard.
//!
//! This crate defines:
//! - The fetch failure taxonomy and its classification from transport errors
//! - The localization table for user-visible strings
//! - Client configuration
//!
//! It is used by `skycast-weather` and `skycast-session`, but can also be
//! reused by other binaries embedding the dashboard.

pub mod config;
pub mod error;
pub mod locale;

pub use config::ClientConfig;
pub use error::FetchError;
pub use locale::{localize, Language, MessageKey};

use anyhow::Result;

/// Initialize the core: installs the tracing subscriber.
pub fn init() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    tracing::info!("Skycast core initialized");
    Ok(())
}
