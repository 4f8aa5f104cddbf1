//! # UI Forge Editor
//!
//! Toolkit-independent editing logic behind the desktop canvas:
//!
//! - [`canvas`]: the [`CanvasEngine`], sole owner of the document and selection
//! - [`drag`]: pointer-driven selection and moving
//! - [`visual`]: the on-canvas [`ElementRenderer`](uiforge_ir::ElementRenderer)
//! - [`inspector`]: properties panel fields and edit routing
//! - [`session`]: signed-in user, open project and saving

pub mod canvas;
pub mod drag;
pub mod inspector;
pub mod session;
pub mod visual;

pub use canvas::{
    CanvasEngine, DEFAULT_INSERTION_POINT, DUPLICATE_OFFSET, ElementUpdate, RenderedElement,
    Z_INDEX_BASE, Z_INDEX_SELECTED, ZOOM_STEP,
};
pub use drag::{DragController, DragState};
pub use inspector::{FieldControl, FieldGroup, FieldInput, FieldSpec, FieldTarget};
pub use session::{PendingSave, Session};
pub use visual::{ElementStyle, Visual, VisualRenderer};
