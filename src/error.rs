//! Custom error types for actual-widget
//!
//! This module defines the error hierarchy for the widget using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for actual-widget operations
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Transport-level failure talking to the API server
    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },

    /// The API server answered with a non-success status
    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body did not have the expected shape
    #[error("Unexpected response from {url}: {message}")]
    Decode { url: String, message: String },

    /// Budget fetch failed and no cached snapshot exists
    #[error("No data & no cache available.")]
    NoDataAvailable,
}

impl WidgetError {
    /// Check if this is the terminal "nothing to show" error
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoDataAvailable)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for WidgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for actual-widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;
