//! # Application State
//!
//! Global state for the UI Forge desktop app.
//!
//! All interaction logic lives in the editor crate; this module only holds
//! the signed-in [`Session`], the dashboard's project list and the
//! presentation flags the shell needs between renders.

use dioxus::prelude::*;
use uiforge_codegen::{Generator, GeneratorConfig, generate_css, generate_html};
use uiforge_core::Position;
use uiforge_editor::{CanvasEngine, DragController, Session};
use uiforge_store::Project;

// ============================================================================
// View
// ============================================================================

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Editor,
}

/// Preview width of the canvas area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportMode {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl ViewportMode {
    pub fn all() -> &'static [ViewportMode] {
        &[
            ViewportMode::Desktop,
            ViewportMode::Tablet,
            ViewportMode::Mobile,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewportMode::Desktop => "Desktop",
            ViewportMode::Tablet => "Tablet",
            ViewportMode::Mobile => "Mobile",
        }
    }

    /// Maximum width of the canvas frame in pixels, `None` for full width
    pub fn max_width(&self) -> Option<u32> {
        match self {
            ViewportMode::Desktop => None,
            ViewportMode::Tablet => Some(672),
            ViewportMode::Mobile => Some(384),
        }
    }

    /// Inline style for the canvas frame
    pub fn frame_style(&self) -> String {
        match self.max_width() {
            Some(width) => format!("max-width: {}px;", width),
            None => "max-width: 100%;".to_string(),
        }
    }
}

/// Tabs of the code viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeTab {
    #[default]
    React,
    Css,
    Html,
}

impl CodeTab {
    pub fn all() -> &'static [CodeTab] {
        &[CodeTab::React, CodeTab::Css, CodeTab::Html]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CodeTab::React => "React",
            CodeTab::Css => "CSS",
            CodeTab::Html => "HTML",
        }
    }

    /// File name offered when downloading this tab
    pub fn file_name(&self, config: &GeneratorConfig) -> String {
        match self {
            CodeTab::React => config.component_file_name(),
            CodeTab::Css => format!("{}.css", config.component_name),
            CodeTab::Html => "index.html".to_string(),
        }
    }
}

// ============================================================================
// Status Bar
// ============================================================================

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Error,
        }
    }
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

impl StatusLevel {
    pub fn class(&self) -> &'static str {
        match self {
            StatusLevel::Info => "status-info",
            StatusLevel::Success => "status-success",
            StatusLevel::Error => "status-error",
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// Presentation flags
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub view: View,
    pub viewport_mode: ViewportMode,
    pub show_code: bool,
    pub code_tab: CodeTab,
    /// A save is in flight
    pub saving: bool,
    pub status: Option<StatusMessage>,
}

// ============================================================================
// App State
// ============================================================================

/// Root application state
#[derive(Debug, Default)]
pub struct AppState {
    /// `None` until the demo user is signed in
    pub session: Option<Session>,
    /// The signed-in user's projects, as last fetched
    pub projects: Vec<Project>,
    pub drag: DragController,
    /// Top-left corner of the canvas area in client coordinates
    pub canvas_origin: Position,
    pub ui: UiState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// The engine of the open project
    pub fn engine(&self) -> Option<&CanvasEngine> {
        self.session
            .as_ref()
            .filter(|s| s.project().is_some())
            .map(|s| s.engine())
    }

    pub fn engine_mut(&mut self) -> Option<&mut CanvasEngine> {
        self.session
            .as_mut()
            .filter(|s| s.project().is_some())
            .map(|s| s.engine_mut())
    }

    /// Run `f` with the drag controller and the open engine
    pub fn with_canvas<R>(
        &mut self,
        f: impl FnOnce(&mut DragController, &mut CanvasEngine) -> R,
    ) -> Option<R> {
        let Self { session, drag, .. } = self;
        let session = session.as_mut().filter(|s| s.project().is_some())?;
        Some(f(drag, session.engine_mut()))
    }

    /// Convert a client-space pointer position into canvas coordinates
    pub fn canvas_point(&self, client: Position) -> Position {
        let local = Position::new(client.x - self.canvas_origin.x, client.y - self.canvas_origin.y);
        match self.engine() {
            Some(engine) => engine.to_canvas(local),
            None => local,
        }
    }

    pub fn project(&self) -> Option<&Project> {
        self.session.as_ref().and_then(|s| s.project())
    }

    pub fn project_name(&self) -> String {
        self.project()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.has_unsaved_changes())
    }

    /// Replace a project in the dashboard list, or add it at the front
    pub fn upsert_project(&mut self, project: Project) {
        match self.projects.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => *slot = project,
            None => self.projects.insert(0, project),
        }
    }

    /// Switch to the editor for the session's open project
    pub fn show_editor(&mut self) {
        self.drag = DragController::new();
        self.ui.view = View::Editor;
        self.ui.show_code = false;
    }

    /// Close the open project and return to the dashboard
    pub fn show_dashboard(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.close_project();
        }
        self.drag = DragController::new();
        self.ui.view = View::Dashboard;
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.ui.status = Some(status);
    }

    /// Generated source for `tab` from the open canvas
    pub fn generated_code(&self, tab: CodeTab) -> String {
        let config = GeneratorConfig::new();
        match tab {
            CodeTab::React => {
                let elements = self.engine().map(|e| e.elements()).unwrap_or_default();
                Generator::new(config).component(elements)
            }
            CodeTab::Css => generate_css(),
            CodeTab::Html => generate_html(&config),
        }
    }

    /// Window title reflecting the open project
    pub fn window_title(&self) -> String {
        match self.project() {
            Some(project) => {
                let dirty = if self.has_unsaved_changes() { " •" } else { "" };
                format!("{}{} - {}", project.name, dirty, crate::NAME)
            }
            None => crate::TITLE.to_string(),
        }
    }
}

// ============================================================================
// Global State
// ============================================================================

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use uiforge_store::{MemoryStore, Store};

    async fn signed_in_state() -> AppState {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        let session = Session::sign_in(store, "demo@example.com", "Demo User")
            .await
            .unwrap();
        AppState {
            session: Some(session),
            ..AppState::new()
        }
    }

    #[test]
    fn test_viewport_mode_widths() {
        assert_eq!(ViewportMode::default(), ViewportMode::Desktop);
        assert_eq!(ViewportMode::Desktop.frame_style(), "max-width: 100%;");
        assert_eq!(ViewportMode::Tablet.max_width(), Some(672));
        assert_eq!(ViewportMode::Mobile.frame_style(), "max-width: 384px;");
    }

    #[test]
    fn test_code_tab_file_names() {
        let config = GeneratorConfig::new();
        assert_eq!(CodeTab::React.file_name(&config), "Component.tsx");
        assert_eq!(CodeTab::Css.file_name(&config), "Component.css");
        assert_eq!(CodeTab::Html.file_name(&config), "index.html");
    }

    #[test]
    fn test_no_engine_before_sign_in() {
        let mut state = AppState::new();
        assert!(!state.is_signed_in());
        assert!(state.engine().is_none());
        assert!(state.with_canvas(|_, _| ()).is_none());
        assert_eq!(state.project_name(), "Untitled");
        assert_eq!(state.window_title(), crate::TITLE);
    }

    #[tokio::test]
    async fn test_editor_round_trip() {
        let mut state = signed_in_state().await;
        let session = state.session.as_mut().unwrap();
        let project = session.create_project("Landing", None).await.unwrap();
        session.enter_project(project.clone()).unwrap();
        state.upsert_project(project);
        state.show_editor();
        assert_eq!(state.ui.view, View::Editor);

        state.engine_mut().unwrap().add_element("button");
        assert!(state.has_unsaved_changes());
        assert!(state.window_title().starts_with("Landing •"));
        assert!(state.generated_code(CodeTab::React).contains("<Button"));

        state.show_dashboard();
        assert_eq!(state.ui.view, View::Dashboard);
        assert!(state.engine().is_none());
        assert_eq!(state.projects.len(), 1);
    }

    #[tokio::test]
    async fn test_canvas_point_uses_origin_and_zoom() {
        let mut state = signed_in_state().await;
        let session = state.session.as_mut().unwrap();
        let project = session.create_project("Landing", None).await.unwrap();
        session.enter_project(project).unwrap();
        state.canvas_origin = Position::new(200.0, 100.0);

        assert_eq!(
            state.canvas_point(Position::new(250.0, 130.0)),
            Position::new(50.0, 30.0)
        );

        state.engine_mut().unwrap().set_zoom(2.0);
        assert_eq!(
            state.canvas_point(Position::new(250.0, 130.0)),
            Position::new(25.0, 15.0)
        );
    }

    #[test]
    fn test_upsert_project_replaces_by_id() {
        let mut state = AppState::new();
        let mut project: Project =
            serde_json::from_value(serde_json::json!({
                "id": 1, "name": "A", "description": null, "user_id": 1,
                "canvas_data": "{}", "is_public": false,
                "created_at": "2026-01-01T00:00:00Z", "updated_at": "2026-01-01T00:00:00Z"
            }))
            .unwrap();
        state.upsert_project(project.clone());
        project.name = "B".into();
        state.upsert_project(project);
        assert_eq!(state.projects.len(), 1);
        assert_eq!(state.projects[0].name, "B");
    }
}
