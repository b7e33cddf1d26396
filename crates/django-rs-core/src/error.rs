//! Core error types for the django-rs backend crates.
//!
//! [`DjangoError`] covers the failures that can surface while resolving a
//! backend's column-type table: an unknown field type, an engine that has no
//! table, and settings that cannot be loaded.

use thiserror::Error;

/// The primary error type for the django-rs backend crates.
///
/// # Examples
///
/// ```
/// use django_rs_core::DjangoError;
///
/// let err = DjangoError::UnknownFieldType("JsonField".into());
/// assert_eq!(err.to_string(), "Unknown field type: JsonField");
/// ```
#[derive(Error, Debug)]
pub enum DjangoError {
    // ── Schema ───────────────────────────────────────────────────────

    /// A field type name is not part of the backend's vocabulary.
    ///
    /// This signals a mismatch between the model layer and the backend and
    /// is never recovered from locally.
    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The framework is improperly configured.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred, e.g. while reading a settings file.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DjangoError {
    /// Returns `true` for errors caused by settings rather than by a lookup.
    ///
    /// I/O errors only arise while loading settings, so they count too.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationError(_) | Self::ImproperlyConfigured(_) | Self::IoError(_)
        )
    }
}

/// A convenience type alias for `Result<T, DjangoError>`.
pub type DjangoResult<T> = Result<T, DjangoError>;
