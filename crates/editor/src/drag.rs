//! # Selection & Drag Controller
//!
//! Translates pointer events on the canvas area into selection changes and
//! element moves. It knows nothing about rendering: pointer positions arrive
//! already converted to canvas coordinates.
//!
//! ```text
//!            down on element               move
//!   Idle ───────────────────────► Dragging ─────┐
//!    ▲  ◄──────────────────────────   │  ◄──────┘
//!    │        up / leave              │
//!    └── down on background (clears selection)
//! ```
//!
//! Selecting is not a resting state: a pointer-down on an element selects it
//! and starts the drag in the same step.

use uiforge_core::Position;
use uiforge_ir::ElementId;

use crate::canvas::CanvasEngine;

// ============================================================================
// Drag State
// ============================================================================

/// Current state of the controller
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        element_id: ElementId,
        /// Pointer position minus the element's top-left at grab time
        offset: Position,
    },
}

impl DragState {
    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// The element being dragged, if any
    pub fn element_id(&self) -> Option<&ElementId> {
        match self {
            DragState::Dragging { element_id, .. } => Some(element_id),
            DragState::Idle => None,
        }
    }

    /// Position of the dragged element's top-left for a pointer at `pointer`,
    /// clamped so neither axis is negative
    pub fn element_position(&self, pointer: Position) -> Option<Position> {
        match self {
            DragState::Dragging { offset, .. } => Some((pointer - *offset).clamp_non_negative()),
            DragState::Idle => None,
        }
    }
}

// ============================================================================
// Drag Controller
// ============================================================================

/// One-pointer, one-target drag state machine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// A controller in the idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Pointer pressed on the element `id`.
    ///
    /// Selects the element and starts dragging it, anchored at the grab
    /// point. Returns `false` if the element is not on the canvas.
    pub fn pointer_down_on_element(
        &mut self,
        engine: &mut CanvasEngine,
        id: &ElementId,
        pointer: Position,
    ) -> bool {
        let Some(element) = engine.element(id) else {
            self.state = DragState::Idle;
            return false;
        };
        let offset = pointer - element.position;

        engine.select_element(Some(id));
        self.state = DragState::Dragging {
            element_id: id.clone(),
            offset,
        };
        tracing::trace!(id = %id, "drag start");
        true
    }

    /// Pointer pressed on empty canvas background: clear the selection.
    pub fn pointer_down_on_background(&mut self, engine: &mut CanvasEngine) {
        engine.clear_selection();
        self.state = DragState::Idle;
    }

    /// Pointer moved to `pointer`.
    ///
    /// While dragging, moves the element so the grab point stays under the
    /// pointer and returns its new position. Ignored when idle. If the
    /// dragged element has disappeared the drag ends.
    pub fn pointer_move(&mut self, engine: &mut CanvasEngine, pointer: Position) -> Option<Position> {
        let position = self.state.element_position(pointer)?;
        let id = self.state.element_id()?.clone();

        if engine.move_element(&id, position) {
            Some(position)
        } else {
            tracing::debug!(id = %id, "dragged element vanished, ending drag");
            self.state = DragState::Idle;
            None
        }
    }

    /// Pointer released: end any drag.
    pub fn pointer_up(&mut self) {
        if self.state.is_dragging() {
            tracing::trace!("drag end");
        }
        self.state = DragState::Idle;
    }

    /// Pointer left the canvas area: same as releasing it.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }
}

// ============================================================================
// Tests
// ============================================================================
