//! Logging integration for the django-rs backend crates.
//!
//! Lookups and engine resolution emit [`tracing`] events; this module installs
//! a subscriber configured from [`Settings`].

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level` and falls back to `info` when
/// it does not parse. Debug mode gets a pretty, human-readable format; other
/// modes get structured JSON. A subscriber that is already installed is left
/// in place.
pub fn setup_logging(settings: &Settings) {
    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a span grouping the events emitted while a schema is generated
/// for one database alias.
pub fn schema_span(alias: &str) -> tracing::Span {
    tracing::info_span!("schema", alias = alias)
}
