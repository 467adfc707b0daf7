//! Error types for sfx-gen.
//!
//! The only failures possible during a generation pass are I/O: the
//! output directory cannot be created, or a WAV file cannot be written.
//! Both are fatal for the run; there is no retry or fallback path.

use std::fmt;
use std::path::Path;

/// Error codes for generation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Output directory could not be created.
    /// Trigger: missing permissions or a file occupying the path.
    DirCreateFailed,

    /// WAV file could not be created, written, or finalized.
    /// Trigger: unwritable destination, disk full.
    WavWriteFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DirCreateFailed => "DIR_CREATE_FAILED",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::DirCreateFailed => "Output directory could not be created",
            ErrorCode::WavWriteFailed => "WAV file could not be written",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for generation operations.
#[derive(Debug)]
pub struct SfxError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SfxError {
    /// Creates a new SfxError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new SfxError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a DIR_CREATE_FAILED error.
    pub fn dir_create_failed(path: &Path, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::DirCreateFailed,
            format!("Failed to create output directory {}", path.display()),
            source,
        )
    }

    /// Creates a WAV_WRITE_FAILED error for a named destination.
    pub fn wav_write_failed(path: &Path, source: hound::Error) -> Self {
        Self::with_source(
            ErrorCode::WavWriteFailed,
            format!("Failed to write {}", path.display()),
            source,
        )
    }

    /// Creates a WAV_WRITE_FAILED error for an in-memory encode.
    pub fn wav_encode_failed(source: hound::Error) -> Self {
        Self::with_source(ErrorCode::WavWriteFailed, "Failed to encode WAV buffer", source)
    }
}

impl fmt::Display for SfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref source) = self.source {
            write!(f, ": {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for SfxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using SfxError.
pub type Result<T> = std::result::Result<T, SfxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::DirCreateFailed.as_str(), "DIR_CREATE_FAILED");
        assert_eq!(ErrorCode::WavWriteFailed.as_str(), "WAV_WRITE_FAILED");
    }

    #[test]
    fn error_code_descriptions_not_empty() {
        assert!(!ErrorCode::DirCreateFailed.description().is_empty());
        assert!(!ErrorCode::WavWriteFailed.description().is_empty());
    }

    #[test]
    fn sfx_error_display_includes_code_and_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SfxError::dir_create_failed(Path::new("public/sounds"), io);
        let rendered = err.to_string();
        assert!(rendered.contains("DIR_CREATE_FAILED"));
        assert!(rendered.contains("public/sounds"));
        assert!(rendered.contains("denied"));
    }

    #[test]
    fn sfx_error_exposes_source() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = SfxError::dir_create_failed(Path::new("out"), io);
        assert!(err.source().is_some());

        let plain = SfxError::new(ErrorCode::WavWriteFailed, "no cause");
        assert!(plain.source().is_none());
    }
}
