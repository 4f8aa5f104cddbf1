//! # Canvas Engine
//!
//! [`CanvasEngine`] owns the element collection, the viewport and the single
//! selection pointer as one unit. Every mutation of a canvas document goes
//! through it, which keeps the couplings between the three in one place:
//!
//! - deleting the selected element clears the selection;
//! - the selected element always renders above its siblings;
//! - selecting an id that is not on the canvas selects nothing.
//!
//! All operations are synchronous. Ids that are not present make update and
//! delete no-ops, never errors.

use uiforge_core::{Position, Positioned, Rect, Size};
use uiforge_ir::{
    CanvasDocument, Element, ElementId, ElementKind, ElementRenderer, Properties, PropertyValue,
    create_element, render_element,
};

/// Where newly added elements are placed
pub const DEFAULT_INSERTION_POINT: Position = Position { x: 50.0, y: 50.0 };

/// Offset applied to a duplicated element
pub const DUPLICATE_OFFSET: f32 = 30.0;

/// Stacking order of an unselected element
pub const Z_INDEX_BASE: i32 = 1;

/// Stacking order of the selected element
pub const Z_INDEX_SELECTED: i32 = 10;

/// Zoom step for the zoom in / zoom out controls
pub const ZOOM_STEP: f32 = 0.25;

// ============================================================================
// Element Update
// ============================================================================

/// A partial update of one element
///
/// Top-level fields replace the element's value when set. `properties` is a
/// patch: its keys are merged into the existing bag and every other key is
/// kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementUpdate {
    pub kind: Option<ElementKind>,
    pub position: Option<Position>,
    pub size: Option<Size>,
    pub children: Option<Vec<Element>>,
    pub properties: Option<Properties>,
}

impl ElementUpdate {
    /// An update that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `position`
    pub fn position(position: Position) -> Self {
        Self::new().with_position(position)
    }

    /// Resize to `size`
    pub fn size(size: Size) -> Self {
        Self::new().with_size(size)
    }

    /// Merge `patch` into the property bag
    pub fn properties(patch: Properties) -> Self {
        Self {
            properties: Some(patch),
            ..Self::default()
        }
    }

    /// Set a single property key
    pub fn property(key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self::properties(Properties::new().with(key, value))
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<ElementKind>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = Some(children);
        self
    }

    /// Whether applying this update would change nothing
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.position.is_none()
            && self.size.is_none()
            && self.children.is_none()
            && self.properties.as_ref().is_none_or(Properties::is_empty)
    }

    /// Non-finite geometry is dropped; it cannot be persisted as JSON.
    fn apply(self, element: &mut Element) {
        if let Some(kind) = self.kind {
            element.kind = kind;
        }
        if let Some(position) = self.position.filter(Position::is_finite) {
            element.set_position(position);
        }
        if let Some(size) = self.size.filter(Size::is_finite) {
            element.size = size;
        }
        if let Some(children) = self.children {
            element.children = Some(children);
        }
        if let Some(patch) = self.properties {
            element.properties.merge(patch);
        }
    }
}

// ============================================================================
// Rendered Element
// ============================================================================

/// One element prepared for display
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedElement<T> {
    pub id: ElementId,
    pub kind: ElementKind,
    pub rect: Rect,
    pub z_index: i32,
    pub selected: bool,
    /// `false` when the element's `visible` property is switched off
    pub visible: bool,
    pub content: T,
}

// ============================================================================
// Canvas Engine
// ============================================================================

/// Authoritative owner of a canvas document and its selection
#[derive(Debug, Clone, Default)]
pub struct CanvasEngine {
    document: CanvasDocument,
    selected: Option<ElementId>,
    dirty: bool,
}

impl CanvasEngine {
    /// An engine holding an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine holding `document`, with nothing selected
    pub fn from_document(document: CanvasDocument) -> Self {
        Self {
            document,
            selected: None,
            dirty: false,
        }
    }

    /// Replace the whole document, clearing the selection
    pub fn load_document(&mut self, document: CanvasDocument) {
        tracing::debug!("Loading document with {} elements", document.len());
        self.document = document;
        self.selected = None;
        self.dirty = false;
    }

    /// Replace the whole document as an edit, e.g. when importing a file
    pub fn replace_document(&mut self, document: CanvasDocument) {
        self.load_document(document);
        self.dirty = true;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The current document
    pub fn document(&self) -> &CanvasDocument {
        &self.document
    }

    /// A copy of the current document, e.g. for saving
    pub fn snapshot(&self) -> CanvasDocument {
        self.document.clone()
    }

    /// Elements in collection (render) order
    pub fn elements(&self) -> &[Element] {
        &self.document.elements
    }

    /// Find an element by id
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.document.element(id)
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.document.len()
    }

    /// Whether the canvas has no elements
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    /// Id of the selected element
    pub fn selected_id(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    /// The selected element
    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.as_ref().and_then(|id| self.document.element(id))
    }

    /// Whether `id` is the selected element
    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Whether the document changed since it was loaded or last marked saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record that the current document has been persisted
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    // ========================================================================
    // Element Operations
    // ========================================================================

    /// Append a new element of `kind` at the default insertion point.
    ///
    /// The new element is not selected.
    pub fn add_element(&mut self, kind: impl Into<ElementKind>) -> ElementId {
        self.add_element_at(kind, DEFAULT_INSERTION_POINT)
    }

    /// Append a new element of `kind` at `position`.
    ///
    /// A non-finite position falls back to [`DEFAULT_INSERTION_POINT`].
    pub fn add_element_at(&mut self, kind: impl Into<ElementKind>, position: Position) -> ElementId {
        let position = if position.is_finite() {
            position.clamp_non_negative()
        } else {
            DEFAULT_INSERTION_POINT
        };
        let element = create_element(kind, position);
        let id = element.id.clone();
        tracing::debug!(id = %id, kind = %element.kind, "add element");
        self.document.elements.push(element);
        self.dirty = true;
        id
    }

    /// Apply a partial update to the element with `id`.
    ///
    /// Returns `false` (and changes nothing) when no such element exists.
    pub fn update_element(&mut self, id: &ElementId, update: ElementUpdate) -> bool {
        let Some(element) = self.document.element_mut(id) else {
            tracing::debug!(id = %id, "update ignored, no such element");
            return false;
        };
        if update.is_empty() {
            return true;
        }
        update.apply(element);
        self.dirty = true;
        true
    }

    /// Move the element with `id` to `position`
    pub fn move_element(&mut self, id: &ElementId, position: Position) -> bool {
        self.update_element(id, ElementUpdate::position(position))
    }

    /// Remove the element with `id`, clearing the selection if it was selected.
    ///
    /// Returns `false` when no such element exists.
    pub fn delete_element(&mut self, id: &ElementId) -> bool {
        let Some(index) = self.document.index_of(id) else {
            return false;
        };
        self.document.elements.remove(index);
        if self.is_selected(id) {
            self.selected = None;
        }
        self.dirty = true;
        tracing::debug!(id = %id, "delete element");
        true
    }

    /// Insert a copy of the element with `id` right after it, offset down and
    /// to the right, and select the copy.
    pub fn duplicate_element(&mut self, id: &ElementId) -> Option<ElementId> {
        let index = self.document.index_of(id)?;
        let mut copy = self.document.elements[index].duplicate();
        copy.translate(DUPLICATE_OFFSET, DUPLICATE_OFFSET);
        let copy_id = copy.id.clone();

        self.document.elements.insert(index + 1, copy);
        self.selected = Some(copy_id.clone());
        self.dirty = true;
        tracing::debug!(source = %id, copy = %copy_id, "duplicate element");
        Some(copy_id)
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Select the element with `id`, or clear the selection with `None`.
    ///
    /// Selecting an id that is not on the canvas clears the selection.
    pub fn select_element(&mut self, id: Option<&ElementId>) {
        self.selected = id
            .filter(|id| self.document.element(id).is_some())
            .cloned();
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    /// Current zoom factor
    pub fn zoom(&self) -> f32 {
        self.document.viewport.zoom
    }

    /// Set the zoom factor (clamped)
    pub fn set_zoom(&mut self, zoom: f32) {
        self.document.viewport.set_zoom(zoom);
    }

    /// Zoom in one step
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom() + ZOOM_STEP);
    }

    /// Zoom out one step
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom() - ZOOM_STEP);
    }

    /// Pan the viewport by a screen-space delta
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.document.viewport.pan(dx, dy);
    }

    /// Reset zoom and pan
    pub fn reset_view(&mut self) {
        self.document.viewport.reset();
    }

    /// Convert a pointer position relative to the canvas area into canvas coordinates
    pub fn to_canvas(&self, local: Position) -> Position {
        self.document.viewport.screen_to_canvas(local)
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render every element through `renderer`.
    ///
    /// The result is in collection order except that the selected element
    /// comes last and carries the raised z-index.
    pub fn render<R: ElementRenderer + ?Sized>(
        &self,
        renderer: &R,
    ) -> Vec<RenderedElement<R::Output>> {
        let mut rendered: Vec<RenderedElement<R::Output>> = Vec::with_capacity(self.len());
        let mut selected = None;

        for element in self.elements() {
            let is_selected = self.is_selected(&element.id);
            let item = RenderedElement {
                id: element.id.clone(),
                kind: element.kind.clone(),
                rect: element.rect(),
                z_index: if is_selected {
                    Z_INDEX_SELECTED
                } else {
                    Z_INDEX_BASE
                },
                selected: is_selected,
                visible: element.properties.flag_or("visible", true),
                content: render_element(renderer, element),
            };
            if is_selected {
                selected = Some(item);
            } else {
                rendered.push(item);
            }
        }

        rendered.extend(selected);
        rendered
    }
}

// ============================================================================
// Tests
// ============================================================================
