//! # django-rs-core
//!
//! Settings, logging, and error types shared by the django-rs backend crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Framework settings
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{DjangoError, DjangoResult};
pub use settings::{DatabaseSettings, Settings};
