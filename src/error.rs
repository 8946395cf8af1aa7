//! Error types for tablet database lookups.

use thiserror::Error;

/// Primary error type for database queries.
#[derive(Error, Debug)]
pub enum WdbError {
    // Resolution errors
    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    #[error("Invalid database: {message}")]
    InvalidDb { message: String },

    #[error("Unknown tablet model{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    UnknownModel { message: Option<String> },

    #[error("Unknown stylus id {0:#x}")]
    UnknownStylus(u32),

    // Configuration errors
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl WdbError {
    pub(crate) fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath {
            message: message.into(),
        }
    }

    pub(crate) fn unknown_model(message: impl Into<String>) -> Self {
        Self::UnknownModel {
            message: Some(message.into()),
        }
    }

    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidPath { .. }
                | Self::InvalidDb { .. }
                | Self::UnknownModel { .. }
                | Self::UnknownStylus(_)
                | Self::ConfigParse(_)
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPath { .. } => Some("Pass an event node of a connected tablet, e.g. /dev/input/event5"),
            Self::InvalidDb { .. } => Some("Use --datadir or WDB_DATADIR to point at the tablet data files"),
            Self::UnknownModel { .. } => Some("Run: wdb list, or retry with --fallback"),
            Self::UnknownStylus(_) => Some("Run: wdb stylus"),
            Self::ConfigParse(_) => Some("Check the TOML syntax of the config file"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using WdbError.
pub type Result<T> = std::result::Result<T, WdbError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E: std::error::Error> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| WdbError::Other(format!("{}: {e}", f().into())))
    }
}
