//! Error types for VerseVibe Core

use thiserror::Error;

/// Message shown whenever the analysis service cannot be reached or fails
/// without telling us why.
pub const SERVICE_UNREACHABLE_MESSAGE: &str = "Backend unreachable. Check your terminal.";

/// Message shown when the history list cannot be fetched.
pub const HISTORY_UNAVAILABLE_MESSAGE: &str = "Could not load history";

/// Main error type for VerseVibe operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Keymap error: {0}")]
    Keymap(#[from] KeymapError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Failures of a single analysis request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Manuscript is empty")]
    EmptyManuscript,

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Service returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Service { status: u16, message: Option<String> },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Analysis task aborted")]
    Aborted,
}

impl AnalysisError {
    /// Text to put in front of the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyManuscript => "Please write something first ✍️".to_string(),
            Self::Service {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => SERVICE_UNREACHABLE_MESSAGE.to_string(),
        }
    }
}

/// Failures while fetching the history list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Service returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Service { status: u16, message: Option<String> },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("History task aborted")]
    Aborted,
}

impl HistoryError {
    /// History failures are always reported generically.
    pub fn user_message(&self) -> String {
        HISTORY_UNAVAILABLE_MESSAGE.to_string()
    }
}

/// Keyboard binding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    #[error("Key chord already bound: {0}")]
    AlreadyBound(String),
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client could not be built: {0}")]
    HttpClient(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
