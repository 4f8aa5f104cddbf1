//! # UI Components
//!
//! ```text
//! App
//! ├── Dashboard
//! │   ├── CreateProjectForm
//! │   └── ProjectCard (multiple)
//! └── Editor
//!     ├── Toolbar
//!     ├── Palette
//!     ├── Canvas
//!     │   └── CanvasElement (multiple)
//!     ├── CodeViewer
//!     └── PropertiesPanel
//!         └── FieldRow (multiple)
//! ```

pub mod canvas;
pub mod code_viewer;
pub mod dashboard;
pub mod palette;
pub mod properties;

pub use canvas::Canvas;
pub use code_viewer::{CodeViewer, copy_to_clipboard};
pub use dashboard::Dashboard;
pub use palette::Palette;
pub use properties::PropertiesPanel;
