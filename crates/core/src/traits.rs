//! Core traits for UI Forge
//!
//! This module defines the fundamental traits that elements, documents and
//! stored records implement to provide consistent behavior for validation,
//! placement and timestamp bookkeeping.

use crate::error::ForgeResult;
use crate::types::{Position, Rect};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use uiforge_core::{Validatable, ForgeResult, ForgeError};
///
/// struct Viewport {
///     zoom: f32,
/// }
///
/// impl Validatable for Viewport {
///     fn validate(&self) -> ForgeResult<()> {
///         if self.zoom <= 0.0 {
///             return Err(ForgeError::validation("Zoom must be positive"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `ForgeError` describing the problem.
    fn validate(&self) -> ForgeResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Positioned Trait
// ============================================================================

/// Trait for types that have a position on the canvas
pub trait Positioned {
    /// Get the current position
    fn position(&self) -> Position;

    /// Set the position
    fn set_position(&mut self, position: Position);

    /// Move by a relative offset
    fn translate(&mut self, dx: f32, dy: f32) {
        let pos = self.position();
        self.set_position(pos.offset(dx, dy));
    }

    /// Get the bounding rectangle (requires size information)
    fn bounds(&self) -> Option<Rect> {
        None
    }
}

// ============================================================================
// Timestamped Trait
// ============================================================================

/// Trait for types that track creation and modification times
pub trait Timestamped {
    /// Get the creation timestamp
    fn created_at(&self) -> chrono::DateTime<chrono::Utc>;

    /// Get the last modification timestamp
    fn modified_at(&self) -> chrono::DateTime<chrono::Utc>;

    /// Update the modification timestamp to now
    fn touch(&mut self);
}

// ============================================================================
// Tests
// ============================================================================
