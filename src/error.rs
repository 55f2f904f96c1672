//! Error types for `chantier`
//!
//! Domain error enums plus the exit-code table used by the CLI.
//! Nothing here is fatal to an embedding process: every failure is
//! reported to the caller and leaves prior state intact.

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `chantier` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Mapping document error (malformed import, validation failure)
    pub const MAPPING_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Game engine error (start without a loaded model)
    pub const GAME_ERROR: i32 = 5;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `chantier` operations.
///
/// Aggregates all domain-specific errors and provides a unified
/// interface for error handling and exit-code mapping.
#[derive(Debug, Error)]
pub enum ChantierError {
    /// Mapping store / document error
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Game engine error
    #[error(transparent)]
    Game(#[from] GameError),

    /// Headless session error
    #[error(transparent)]
    Session(#[from] SessionError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChantierError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Mapping(_) | Self::Json(_) => ExitCode::MAPPING_ERROR,
            Self::Game(_) => ExitCode::GAME_ERROR,
            Self::Session(_) => ExitCode::ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Mapping Errors
// ============================================================================

/// Mapping document errors.
///
/// Import validation is atomic: a document that fails to parse as
/// `{phase_key: [entity_id, ...]}` is rejected without mutating the store.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Document is not a phase-key → list-of-identifier-strings object
    #[error("malformed mapping document: {0}")]
    Format(String),
}

// ============================================================================
// Game Engine Errors
// ============================================================================

/// Game state-machine errors.
///
/// An empty phase target set and a stale mapping reference are NOT
/// errors — the engine auto-skips the former and silently drops the
/// latter.
#[derive(Debug, Error)]
pub enum GameError {
    /// `start_game` was called before any model populated the registry
    #[error("no model loaded; load a scene before starting a game")]
    NoModelLoaded,
}

// ============================================================================
// Headless Session Errors
// ============================================================================

/// Errors raised while driving a scripted headless session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Play script could not be parsed
    #[error("invalid play script: {0}")]
    Script(String),

    /// Play script references an entity id absent from the scene
    #[error("script references unknown entity '{0}'")]
    UnknownEntity(String),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `chantier` operations.
pub type Result<T> = std::result::Result<T, ChantierError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::MAPPING_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::GAME_ERROR, 5);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
        assert_eq!(ExitCode::INTERRUPTED, 130);
        assert_eq!(ExitCode::TERMINATED, 143);
    }

    #[test]
    fn test_mapping_error_exit_code() {
        let err: ChantierError = MappingError::Format("not an object".to_string()).into();
        assert_eq!(err.exit_code(), ExitCode::MAPPING_ERROR);
    }

    #[test]
    fn test_game_error_exit_code() {
        let err: ChantierError = GameError::NoModelLoaded.into();
        assert_eq!(err.exit_code(), ExitCode::GAME_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: ChantierError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::UnknownEntity("mesh-42".to_string());
        assert!(err.to_string().contains("mesh-42"));
    }

    #[test]
    fn test_no_model_loaded_display() {
        let err = GameError::NoModelLoaded;
        assert!(err.to_string().contains("no model loaded"));
    }
}
