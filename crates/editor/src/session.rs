//! # Editing Session
//!
//! A [`Session`] is built when a user signs in and dropped at logout. It
//! holds the signed-in user, the store handle, the open project (if any)
//! and the [`CanvasEngine`] editing that project's canvas.
//!
//! Saving is split in two so a UI can keep editing while the write is in
//! flight: [`Session::prepare_save`] snapshots the document synchronously,
//! [`PendingSave::submit`] performs the async store write, and
//! [`Session::complete_save`] records the result.

use std::sync::Arc;

use uiforge_core::{ProjectId, UserId};
use uiforge_ir::{CanvasDocument, document_from_json_or_default, document_to_json};
use uiforge_store::{NewProject, NewUser, Project, ProjectStore, Store, StoreError, StoreResult, User};

use crate::canvas::CanvasEngine;

/// Snapshot of a canvas waiting to be written
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSave {
    pub project_id: ProjectId,
    pub owner_id: UserId,
    document: CanvasDocument,
    canvas_data: String,
}

impl PendingSave {
    /// Serialized canvas that will be stored
    pub fn canvas_data(&self) -> &str {
        &self.canvas_data
    }

    /// Write the snapshot. Last save wins.
    pub async fn submit<S: ProjectStore + ?Sized>(&self, store: &S) -> StoreResult<Project> {
        store
            .save_project(self.project_id, self.owner_id, self.canvas_data.clone())
            .await
    }
}

/// Signed-in editing state
pub struct Session {
    user: User,
    store: Arc<dyn Store>,
    project: Option<Project>,
    engine: CanvasEngine,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user.email)
            .field("project", &self.project.as_ref().map(|p| p.id))
            .field("elements", &self.engine.len())
            .finish()
    }
}

impl Session {
    /// Start a session for an already known user
    pub fn new(store: Arc<dyn Store>, user: User) -> Self {
        tracing::info!(user = user.id, "Session started");
        Self {
            user,
            store,
            project: None,
            engine: CanvasEngine::new(),
        }
    }

    /// Sign in by email, registering the user on first sign-in
    pub async fn sign_in(store: Arc<dyn Store>, email: &str, name: &str) -> StoreResult<Self> {
        let user = match store.user_by_email(email).await? {
            Some(user) => user,
            None => store.create_user(NewUser::new(email, name)).await?,
        };
        Ok(Self::new(store, user))
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Shared store handle, e.g. for spawning a save
    pub fn store(&self) -> Arc<dyn Store> {
        Arc::clone(&self.store)
    }

    /// The open project, if any
    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn engine(&self) -> &CanvasEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CanvasEngine {
        &mut self.engine
    }

    /// Whether the open canvas has unsaved edits
    pub fn has_unsaved_changes(&self) -> bool {
        self.project.is_some() && self.engine.is_dirty()
    }

    // ========================================================================
    // Projects
    // ========================================================================

    /// The signed-in user's projects
    pub async fn projects(&self) -> StoreResult<Vec<Project>> {
        self.store.list_projects(self.user.id).await
    }

    /// Create a project owned by the signed-in user
    pub async fn create_project(
        &self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> StoreResult<Project> {
        let mut input = NewProject::new(name);
        input.description = description;
        self.store.create_project(self.user.id, input).await
    }

    /// Open a project for editing.
    ///
    /// Canvas data that cannot be parsed opens as an empty document.
    pub async fn open_project(&mut self, project_id: ProjectId) -> StoreResult<&Project> {
        let project = self
            .store
            .load_project(project_id, self.user.id)
            .await?
            .ok_or(StoreError::ProjectNotFound(project_id))?;
        self.enter_project(project)
    }

    /// Open a project record that was already fetched, e.g. by a UI task
    /// that could not hold the session across the store call.
    pub fn enter_project(&mut self, project: Project) -> StoreResult<&Project> {
        if !project.is_readable_by(self.user.id) {
            return Err(StoreError::ProjectNotFound(project.id));
        }
        self.engine
            .load_document(document_from_json_or_default(&project.canvas_data));
        tracing::info!(
            project = project.id,
            elements = self.engine.len(),
            "Opened project"
        );
        Ok(&*self.project.insert(project))
    }

    /// Close the open project, discarding the canvas
    pub fn close_project(&mut self) {
        if let Some(project) = self.project.take() {
            tracing::info!(project = project.id, "Closed project");
        }
        self.engine = CanvasEngine::new();
    }

    // ========================================================================
    // Saving
    // ========================================================================

    /// Snapshot the open canvas for saving. `None` when no project is open.
    pub fn prepare_save(&self) -> StoreResult<Option<PendingSave>> {
        let Some(project) = &self.project else {
            return Ok(None);
        };
        let document = self.engine.snapshot();
        let canvas_data = document_to_json(&document)?;
        Ok(Some(PendingSave {
            project_id: project.id,
            owner_id: self.user.id,
            document,
            canvas_data,
        }))
    }

    /// Record a finished save. The canvas is marked clean only if it was not
    /// edited while the save was in flight.
    pub fn complete_save(&mut self, pending: &PendingSave, saved: Project) {
        if self.engine.document() == &pending.document {
            self.engine.mark_saved();
        }
        if self.project.as_ref().is_some_and(|p| p.id == saved.id) {
            self.project = Some(saved);
        }
    }

    /// Snapshot, write and record in one step
    pub async fn save(&mut self) -> StoreResult<Option<Project>> {
        let Some(pending) = self.prepare_save()? else {
            return Ok(None);
        };
        let saved = pending.submit(self.store.as_ref()).await?;
        self.complete_save(&pending, saved.clone());
        Ok(Some(saved))
    }

    /// End the session
    pub fn logout(mut self) {
        self.close_project();
        tracing::info!(user = self.user.id, "Session ended");
    }
}
