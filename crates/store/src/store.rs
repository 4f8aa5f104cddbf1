//! # Store Capabilities
//!
//! The storage seams used by the editor. Reads that the requester is not
//! allowed to see come back as `Ok(None)`; writes the requester may not make
//! come back as an error.

use async_trait::async_trait;
use uiforge_core::{ComponentId, ProjectId, UserId};

use crate::error::StoreResult;
use crate::model::{
    ComponentUpdate, NewComponent, NewProject, NewUser, Project, ProjectUpdate,
    ReusableComponent, User, UserUpdate,
};

/// User accounts
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Register a user. Emails are unique.
    async fn create_user(&self, input: NewUser) -> StoreResult<User>;

    async fn user_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    async fn user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn update_user(&self, id: UserId, update: UserUpdate) -> StoreResult<User>;
}

/// Saved canvases and their ownership rules
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects owned by `owner_id`, oldest first
    async fn list_projects(&self, owner_id: UserId) -> StoreResult<Vec<Project>>;

    /// Create a project for an existing user
    async fn create_project(&self, owner_id: UserId, input: NewProject) -> StoreResult<Project>;

    /// The project if `requester_id` owns it or it is public
    async fn load_project(
        &self,
        project_id: ProjectId,
        requester_id: UserId,
    ) -> StoreResult<Option<Project>>;

    /// Replace the serialized canvas. Owner only.
    async fn save_project(
        &self,
        project_id: ProjectId,
        owner_id: UserId,
        canvas_data: String,
    ) -> StoreResult<Project>;

    /// Partially update a project. Owner only.
    async fn update_project(
        &self,
        project_id: ProjectId,
        owner_id: UserId,
        update: ProjectUpdate,
    ) -> StoreResult<Project>;

    /// Delete a project. Returns `false` if it did not exist or is not owned by `owner_id`.
    async fn delete_project(&self, project_id: ProjectId, owner_id: UserId) -> StoreResult<bool>;
}

/// The reusable component library
#[async_trait]
pub trait ComponentStore: Send + Sync {
    async fn create_component(
        &self,
        owner_id: UserId,
        input: NewComponent,
    ) -> StoreResult<ReusableComponent>;

    /// Components owned by `user_id` plus every global component
    async fn components_for_user(&self, user_id: UserId) -> StoreResult<Vec<ReusableComponent>>;

    async fn global_components(&self) -> StoreResult<Vec<ReusableComponent>>;

    /// Partially update a component. Owner only.
    async fn update_component(
        &self,
        component_id: ComponentId,
        owner_id: UserId,
        update: ComponentUpdate,
    ) -> StoreResult<ReusableComponent>;

    /// Delete a component. Returns `false` if it did not exist or is not owned by `owner_id`.
    async fn delete_component(&self, component_id: ComponentId, owner_id: UserId)
    -> StoreResult<bool>;
}

/// Everything the editor needs from storage
pub trait Store: UserStore + ProjectStore + ComponentStore {}

impl<T: UserStore + ProjectStore + ComponentStore> Store for T {}
