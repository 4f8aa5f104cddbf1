//! Error types for the store

use std::path::PathBuf;

use thiserror::Error;
use uiforge_core::{ComponentId, ForgeError, ProjectId, UserId};

/// Errors returned by store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("User with id {0} not found")]
    UserNotFound(UserId),

    #[error("A user with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),

    /// The project does not exist, or the requester does not own it
    #[error("Project not found or access denied: {0}")]
    ProjectNotFound(ProjectId),

    /// The component does not exist, or the requester does not own it
    #[error("Component not found or access denied: {0}")]
    ComponentNotFound(ComponentId),

    #[error("Invalid JSON format for component properties: {0}")]
    InvalidProperties(String),

    #[error("'{0}' is not a component library type")]
    InvalidComponentType(String),

    #[error("Failed to access store snapshot '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Canvas document could not be encoded: {0}")]
    Document(#[from] ForgeError),
}

impl StoreError {
    /// Whether the error means "no such record" (or no access to it)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::UserNotFound(_)
                | StoreError::ProjectNotFound(_)
                | StoreError::ComponentNotFound(_)
        )
    }

    /// Whether the error was caused by invalid caller input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            StoreError::DuplicateEmail(_)
                | StoreError::InvalidEmail(_)
                | StoreError::InvalidProperties(_)
                | StoreError::InvalidComponentType(_)
        )
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StoreError::ProjectNotFound(7).to_string(),
            "Project not found or access denied: 7"
        );
        assert_eq!(
            StoreError::InvalidComponentType("menu".into()).to_string(),
            "'menu' is not a component library type"
        );
    }

    #[test]
    fn test_classification() {
        assert!(StoreError::UserNotFound(1).is_not_found());
        assert!(StoreError::ComponentNotFound(1).is_not_found());
        assert!(!StoreError::DuplicateEmail("a@b.c".into()).is_not_found());
        assert!(StoreError::InvalidProperties("x".into()).is_invalid_input());
    }
}
