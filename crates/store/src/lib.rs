//! # UI Forge Store
//!
//! Persistence for users, projects (serialized canvases) and the reusable
//! component library, behind the ownership rules the editor relies on:
//!
//! - a project is readable by its owner, or by anyone once public
//! - only the owner may save, update or delete a project or component
//! - global components are visible to every user
//!
//! The capabilities are async traits ([`UserStore`], [`ProjectStore`],
//! [`ComponentStore`]) so the editor can run against any backend;
//! [`MemoryStore`] is the in-process implementation.

pub mod error;
pub mod memory;
pub mod model;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::{MemoryStore, StoreConfig};
pub use model::{
    ComponentUpdate, NewComponent, NewProject, NewUser, Project, ProjectUpdate,
    ReusableComponent, User, UserUpdate,
};
pub use store::{ComponentStore, ProjectStore, Store, UserStore};
