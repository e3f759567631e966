//! Top-level error type.
//!
//! Most failures in the portal are handled where they occur: missing
//! sessions become redirects, unknown slugs become fallback panels, and
//! dataset fetch failures are absorbed into the dashboard's error state.
//! `PortalError` aggregates what is left — the failures that should abort
//! startup or bubble out of a handler.

use crate::auth::session::SessionError;
use crate::config::ConfigError;
use crate::services::DataError;

#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("session error: {0}")]
    Session(#[from] SessionError),
    #[error("data error: {0}")]
    Data(#[from] DataError),
    #[error("validation failed")]
    Validation(Vec<FieldError>),
}

/// A single rejected form field. Validation failures carry one of these
/// per offending field so callers can render inline messages.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
