// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for the relay and the selector

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

const UNKNOWN_LOCATION_MESSAGE: &str =
    "Unable to find your location. Please enable location services.";

/// Relay error types
/// DOCUMENTATION: Every failure of a relayed call ends in one of these
/// and is rendered as the `{error, details}` envelope, never as a raw error
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Invalid request: {0}")]
    ValidationError(String),

    /// Transport failure, timeout, non-2xx status or unreadable upstream body
    #[error("{context}: {details}")]
    Upstream {
        context: &'static str,
        details: String,
    },
}

impl RelayError {
    pub fn upstream(context: &'static str, details: impl Into<String>) -> Self {
        RelayError::Upstream {
            context,
            details: details.into(),
        }
    }
}

/// Convert RelayError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON envelopes
impl ResponseError for RelayError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            RelayError::ValidationError(details) => json!({
                "error": "Invalid request",
                "details": details,
            }),
            RelayError::Upstream { context, details } => json!({
                "error": context,
                "details": details,
            }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::ValidationError(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failure reported by a location provider
/// DOCUMENTATION: Mirrors the platform geolocation error codes (1, 2, 3)
/// Display output is the user-facing message for each kind
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("Location access denied. Please enable location services in your browser settings.")]
    PermissionDenied,

    #[error("Location unavailable. Please check your device's location services.")]
    PositionUnavailable,

    #[error("Location request timed out. Please try again.")]
    Timeout,

    #[error("{}", unknown_message(.0))]
    Unknown(Option<String>),
}

fn unknown_message(message: &Option<String>) -> &str {
    match message.as_deref() {
        Some(m) if !m.is_empty() => m,
        _ => UNKNOWN_LOCATION_MESSAGE,
    }
}

impl LocationError {
    /// Map a platform error code to its kind; anything but 1, 2, 3 is Unknown
    pub fn from_code(code: u16, message: Option<String>) -> Self {
        match code {
            1 => LocationError::PermissionDenied,
            2 => LocationError::PositionUnavailable,
            3 => LocationError::Timeout,
            _ => LocationError::Unknown(message),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            LocationError::PermissionDenied => 1,
            LocationError::PositionUnavailable => 2,
            LocationError::Timeout => 3,
            LocationError::Unknown(_) => 0,
        }
    }
}

/// Selector error types
/// DOCUMENTATION: Terminal failures of one lunch attempt
/// None of them is retried; Display output is the message shown to the user
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectorError {
    #[error(transparent)]
    Location(#[from] LocationError),

    /// Relay or network failure
    #[error("Failed to fetch restaurant data: {0}")]
    Upstream(String),

    /// Non-OK search status or empty result set
    #[error("Failed to fetch restaurant data: {0}")]
    NoResults(String),

    #[error("Lunch summoning was cancelled")]
    Cancelled,
}

impl SelectorError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Recent-results storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
