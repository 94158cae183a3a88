//! Page error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the portfolio page
///
/// None of these ever reach the visitor. Callers log and absorb them, falling
/// back to in-memory defaults.
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Browser Storage Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Storage error: {message}")]
    Storage { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Lookup Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Storage and preference decoding failures degrade to defaults; a bad
    /// section or field name is a programming error in the view layer.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Storage { .. } | Error::Json(_) | Error::Config { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::storage("localStorage unavailable");
        assert_eq!(err.to_string(), "Storage error: localStorage unavailable");

        let err = Error::UnknownSection("blog".to_string());
        assert_eq!(err.to_string(), "Unknown section: blog");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<bool>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::storage("quota").is_recoverable());
        assert!(Error::config("bad toml").is_recoverable());
        assert!(!Error::UnknownField("phone".to_string()).is_recoverable());
        assert!(!Error::UnknownSection("blog".to_string()).is_recoverable());
    }
}
