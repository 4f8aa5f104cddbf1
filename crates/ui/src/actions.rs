//! # Actions
//!
//! Operations triggered from more than one component. Store calls run in
//! spawned tasks; the global state is never borrowed across an `.await`.

use std::sync::Arc;

use anyhow::Result;
use dioxus::prelude::*;
use uiforge_core::{Position, ProjectId, UserId};
use uiforge_editor::Session;
use uiforge_ir::{ElementId, ElementKind};
use uiforge_store::{MemoryStore, NewProject, Project, ProjectStore, Store, StoreError};

use crate::state::{APP_STATE, StatusMessage};

// ============================================================================
// Session
// ============================================================================

/// Open the store and sign in as the demo user
pub async fn sign_in_demo_user() -> Result<(Session, Vec<Project>)> {
    let store: Arc<dyn Store> = Arc::new(MemoryStore::open(crate::store_config()).await?);
    let session = Session::sign_in(store, crate::DEMO_EMAIL, crate::DEMO_NAME).await?;
    let projects = session.projects().await?;
    Ok((session, projects))
}

/// Store handle and user id of the signed-in session
fn store_handle() -> Option<(Arc<dyn Store>, UserId)> {
    let state = APP_STATE.read();
    let session = state.session.as_ref()?;
    Some((session.store(), session.user().id))
}

fn report_error(action: &str, err: impl std::fmt::Display) {
    tracing::error!("{} failed: {}", action, err);
    APP_STATE
        .write()
        .set_status(StatusMessage::error(format!("{} failed: {}", action, err)));
}

// ============================================================================
// Projects
// ============================================================================

/// Re-fetch the dashboard's project list
pub fn refresh_projects() {
    let Some((store, user_id)) = store_handle() else {
        return;
    };
    spawn(async move {
        match store.list_projects(user_id).await {
            Ok(projects) => APP_STATE.write().projects = projects,
            Err(e) => report_error("Loading projects", e),
        }
    });
}

/// Create a project and open it in the editor
pub fn create_project(name: String, description: Option<String>) {
    let Some((store, user_id)) = store_handle() else {
        return;
    };
    spawn(async move {
        let mut input = NewProject::new(name);
        input.description = description.filter(|d| !d.trim().is_empty());

        match store.create_project(user_id, input).await {
            Ok(project) => {
                let mut state = APP_STATE.write();
                state.upsert_project(project.clone());
                enter(&mut state, project);
            }
            Err(e) => report_error("Creating project", e),
        }
    });
}

/// Load a project and open it in the editor
pub fn open_project(id: ProjectId) {
    let Some((store, user_id)) = store_handle() else {
        return;
    };
    spawn(async move {
        match store.load_project(id, user_id).await {
            Ok(Some(project)) => enter(&mut APP_STATE.write(), project),
            Ok(None) => report_error("Opening project", StoreError::ProjectNotFound(id)),
            Err(e) => report_error("Opening project", e),
        }
    });
}

fn enter(state: &mut crate::state::AppState, project: Project) {
    let Some(session) = state.session.as_mut() else {
        return;
    };
    match session.enter_project(project) {
        Ok(project) => {
            let text = format!("Opened {}", project.name);
            state.show_editor();
            state.set_status(StatusMessage::info(text));
        }
        Err(e) => state.set_status(StatusMessage::error(e.to_string())),
    }
}

/// Delete one of the user's projects
pub fn delete_project(id: ProjectId) {
    let Some((store, user_id)) = store_handle() else {
        return;
    };
    spawn(async move {
        match store.delete_project(id, user_id).await {
            Ok(true) => {
                let mut state = APP_STATE.write();
                state.projects.retain(|p| p.id != id);
                state.set_status(StatusMessage::success("Project deleted"));
            }
            Ok(false) => report_error("Deleting project", StoreError::ProjectNotFound(id)),
            Err(e) => report_error("Deleting project", e),
        }
    });
}

/// Save the open canvas. Editing continues while the write is in flight.
pub fn save_project() {
    let prepared = {
        let state = APP_STATE.read();
        if state.ui.saving {
            return;
        }
        let Some(session) = state.session.as_ref() else {
            return;
        };
        session
            .prepare_save()
            .map(|pending| pending.map(|p| (p, session.store())))
    };

    let (pending, store) = match prepared {
        Ok(Some(prepared)) => prepared,
        Ok(None) => return,
        Err(e) => return report_error("Saving", e),
    };

    APP_STATE.write().ui.saving = true;
    spawn(async move {
        let result = pending.submit(store.as_ref()).await;

        let mut state = APP_STATE.write();
        state.ui.saving = false;
        match result {
            Ok(project) => {
                if let Some(session) = state.session.as_mut() {
                    session.complete_save(&pending, project.clone());
                }
                state.upsert_project(project);
                state.set_status(StatusMessage::success("Project saved"));
            }
            Err(e) => {
                drop(state);
                report_error("Saving", e);
            }
        }
    });
}

// ============================================================================
// Canvas
// ============================================================================

/// Add an element of `kind` at the default insertion point
pub fn add_element(kind: ElementKind) {
    let mut state = APP_STATE.write();
    if let Some(engine) = state.engine_mut() {
        let id = engine.add_element(kind);
        tracing::debug!(id = %id, "Added element from palette");
    }
}

pub fn duplicate_element(id: &ElementId) {
    if let Some(engine) = APP_STATE.write().engine_mut() {
        engine.duplicate_element(id);
    }
}

pub fn delete_element(id: &ElementId) {
    if let Some(engine) = APP_STATE.write().engine_mut() {
        engine.delete_element(id);
    }
}

/// Delete the selected element, if any
pub fn delete_selected() {
    let mut state = APP_STATE.write();
    let Some(engine) = state.engine_mut() else {
        return;
    };
    if let Some(id) = engine.selected_id().cloned() {
        engine.delete_element(&id);
    }
}

/// Duplicate the selected element, if any
pub fn duplicate_selected() {
    let mut state = APP_STATE.write();
    let Some(engine) = state.engine_mut() else {
        return;
    };
    if let Some(id) = engine.selected_id().cloned() {
        engine.duplicate_element(&id);
    }
}

// ============================================================================
// Pointer
// ============================================================================

fn client_position(e: &MouseEvent) -> Position {
    let point = e.client_coordinates();
    Position::new(point.x as f32, point.y as f32)
}

/// Pointer pressed on an element
pub fn pointer_down_on_element(id: &ElementId, e: &MouseEvent) {
    let mut state = APP_STATE.write();
    let pointer = state.canvas_point(client_position(e));
    state.with_canvas(|drag, engine| drag.pointer_down_on_element(engine, id, pointer));
}

/// Pointer pressed on the canvas background
pub fn pointer_down_on_background() {
    APP_STATE
        .write()
        .with_canvas(|drag, engine| drag.pointer_down_on_background(engine));
}

/// Pointer moved over the canvas
pub fn pointer_move(e: &MouseEvent) {
    if !APP_STATE.read().drag.is_dragging() {
        return;
    }
    let mut state = APP_STATE.write();
    let pointer = state.canvas_point(client_position(e));
    state.with_canvas(|drag, engine| drag.pointer_move(engine, pointer));
}

/// Pointer released or left the canvas
pub fn pointer_release(left: bool) {
    let mut state = APP_STATE.write();
    if left {
        state.drag.pointer_leave();
    } else {
        state.drag.pointer_up();
    }
}
