//! # UI Forge IR (Element Model)
//!
//! This crate provides the element model shared by the editor, the code
//! generator and the project store.
//!
//! ## Core Concepts
//!
//! - **Element**: one placed, typed, positioned UI unit on the canvas
//! - **ElementKind**: the vocabulary of element types, open to custom strings
//! - **Properties**: the open, per-element bag of primitive values
//! - **CanvasDocument**: the serializable `{elements, viewport}` editor state
//! - **ElementRenderer**: the single dispatch over kinds used by every renderer
//!

// Module declarations
pub mod document;
pub mod element;
pub mod kind;
pub mod render;
pub mod serialization;

// Re-export commonly used types at crate root
pub use document::{CanvasDocument, MAX_ZOOM, MIN_ZOOM, Viewport};
pub use element::{Element, ElementId, Properties, create_element, default_properties};
pub use kind::{CustomKind, ElementKind, PaletteCategory, palette};
pub use render::{ElementRenderer, HeadingLevel, render_all, render_element};
pub use serialization::{
    DocumentFile, document_from_json, document_from_json_or_default, document_to_json,
    empty_document_json, load_document, save_document,
};

// Re-export core types that are commonly used with IR
pub use uiforge_core::{ForgeError, ForgeResult, Position, PropertyValue, Rect, Size};

/// Current schema version for document files
pub const SCHEMA_VERSION: u32 = 1;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        CanvasDocument,
        Element,
        ElementId,
        ElementKind,
        ElementRenderer,
        // Re-exported from core
        ForgeError,
        ForgeResult,
        Position,
        Properties,
        PropertyValue,
        Size,
        Viewport,
        create_element,
    };
}
