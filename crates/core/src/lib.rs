//! # UI Forge Core
//!
//! Core types, traits, and error handling for UI Forge.
//!
//! This crate provides the foundational building blocks shared by the
//! element model, the canvas editor, the code generator and the store:
//!
//! - **Types**: Geometric primitives (Position, Size, Rect), record ids and
//!   the primitive `PropertyValue` stored in element property bags
//! - **Traits**: Common behaviors like `Validatable`, `Positioned` and `Timestamped`
//! - **Errors**: Unified error handling with `ForgeError` and `ForgeResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ForgeError, ForgeResult, ResultExt};
pub use traits::{Positioned, Timestamped, Validatable};
pub use types::{ComponentId, Position, ProjectId, PropertyValue, Rect, Size, UserId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
