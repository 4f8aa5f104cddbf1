//! Error types for UI Forge
//!
//! This module provides unified error handling for the element model,
//! document persistence and code export: validation errors, IO errors,
//! serialization errors and export failures.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for UI Forge
#[derive(Debug, Error)]
pub enum ForgeError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Element validation failed
    #[error("Element validation failed for '{element}': {message}")]
    ElementValidation { element: String, message: String },

    /// Two elements in one document share an id
    #[error("Duplicate element id: '{0}' appears more than once")]
    DuplicateElementId(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Document file not found
    #[error("Document not found at path: {0}")]
    DocumentNotFound(PathBuf),

    // ========================================================================
    // Export Errors
    // ========================================================================
    /// Output file already exists
    #[error("Output file already exists: {0}")]
    OutputExists(PathBuf),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Invalid document file format
    #[error("Invalid document file format: {0}")]
    InvalidDocumentFormat(String),

    /// Schema version mismatch
    #[error("Schema version mismatch: expected {expected}, found {found}")]
    SchemaVersionMismatch { expected: u32, found: u32 },

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl ForgeError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ForgeError::Validation(msg.into())
    }

    /// Create an element validation error
    pub fn element_validation(element: impl Into<String>, msg: impl Into<String>) -> Self {
        ForgeError::ElementValidation {
            element: element.into(),
            message: msg.into(),
        }
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        ForgeError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ForgeError::Validation(_)
                | ForgeError::ElementValidation { .. }
                | ForgeError::DuplicateElementId(_)
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ForgeError::DocumentNotFound(_))
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ForgeError::Io(_)
                | ForgeError::FileWrite { .. }
                | ForgeError::DirectoryCreate { .. }
        )
    }
}

/// Result type alias using ForgeError
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> ForgeResult<T>;
}

impl<T, E: Into<ForgeError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> ForgeResult<T> {
        self.map_err(|e| {
            let err: ForgeError = e.into();
            ForgeError::with_context(context, err.to_string())
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = ForgeError::validation("Zoom must be positive");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Validation error: Zoom must be positive");
    }

    #[test]
    fn test_element_validation_error() {
        let err = ForgeError::element_validation("element_1", "width is negative");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Element validation failed for 'element_1': width is negative"
        );
    }

    #[test]
    fn test_duplicate_id_is_validation() {
        let err = ForgeError::DuplicateElementId("element_1".to_string());
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Duplicate element id: 'element_1' appears more than once"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = ForgeError::DocumentNotFound(PathBuf::from("missing.json"));
        assert!(err.is_not_found());
        assert!(!err.is_io());
    }

    #[test]
    fn test_output_exists_error() {
        let err = ForgeError::OutputExists(PathBuf::from("out/Component.tsx"));
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Output file already exists: out/Component.tsx");
    }

    #[test]
    fn test_error_with_context() {
        let err = ForgeError::with_context("Saving document", "Permission denied");
        assert_eq!(err.to_string(), "Saving document: Permission denied");
    }

    #[test]
    fn test_result_ext_wraps_message() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.with_context("Writing export").unwrap_err();
        assert_eq!(err.to_string(), "Writing export: IO error: denied");
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ForgeError = io_err.into();
        assert!(err.is_io());
    }
}
