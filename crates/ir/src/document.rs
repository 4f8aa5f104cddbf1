//! Canvas documents
//!
//! A [`CanvasDocument`] is the whole persisted state of one editing session:
//! the ordered element list (order is render order) plus the viewport.

use crate::element::{Element, ElementId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uiforge_core::{ForgeError, ForgeResult, Position, Validatable};

/// Smallest zoom factor the viewport accepts
pub const MIN_ZOOM: f32 = 0.25;

/// Largest zoom factor the viewport accepts
pub const MAX_ZOOM: f32 = 3.0;

// ============================================================================
// Viewport
// ============================================================================

/// Zoom and pan transform applied when displaying the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub zoom: f32,
    pub offset: Position,
}

impl Viewport {
    /// Set the zoom, clamped to the supported range
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Pan by a delta in screen pixels
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset = self.offset.offset(dx, dy);
    }

    /// Convert screen coordinates to canvas coordinates
    pub fn screen_to_canvas(&self, screen: Position) -> Position {
        Position::new(
            (screen.x - self.offset.x) / self.zoom,
            (screen.y - self.offset.y) / self.zoom,
        )
    }

    /// Convert canvas coordinates to screen coordinates
    pub fn canvas_to_screen(&self, canvas: Position) -> Position {
        Position::new(
            canvas.x * self.zoom + self.offset.x,
            canvas.y * self.zoom + self.offset.y,
        )
    }

    /// Back to zoom 1 and no offset
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: Position::zero(),
        }
    }
}

// ============================================================================
// Canvas Document
// ============================================================================

/// The serializable `{elements, viewport}` state of the editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasDocument {
    #[serde(default)]
    pub elements: Vec<Element>,

    #[serde(default)]
    pub viewport: Viewport,
}

impl CanvasDocument {
    /// An empty document with the default viewport
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an element by id
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    /// Find an element by id for mutation
    pub fn element_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| &e.id == id)
    }

    /// Index of an element in render order
    pub fn index_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| &e.id == id)
    }

    /// Number of top-level elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Validatable for CanvasDocument {
    fn validate(&self) -> ForgeResult<()> {
        if self.viewport.zoom.is_nan() || self.viewport.zoom <= 0.0 {
            return Err(ForgeError::validation("Viewport zoom must be positive"));
        }

        let mut seen = HashSet::new();
        for element in &self.elements {
            element.validate()?;
            if !seen.insert(element.id.as_str()) {
                return Err(ForgeError::DuplicateElementId(element.id.to_string()));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
