//! # App
//!
//! Root component and the editor chrome: toolbar, the three-pane editor
//! layout and the status bar.

use dioxus::prelude::*;

use crate::actions;
use crate::components::{Canvas, CodeViewer, Dashboard, Palette, PropertiesPanel, copy_to_clipboard};
use crate::file_ops;
use crate::state::{APP_STATE, CodeTab, StatusMessage, View, ViewportMode};

/// Root component
#[component]
pub fn App() -> Element {
    use_hook(|| {
        spawn(async move {
            match actions::sign_in_demo_user().await {
                Ok((session, projects)) => {
                    tracing::info!(user = %session.user().email, "Signed in");
                    let mut state = APP_STATE.write();
                    state.session = Some(session);
                    state.projects = projects;
                }
                Err(e) => {
                    tracing::error!("Sign-in failed: {:#}", e);
                    APP_STATE
                        .write()
                        .set_status(StatusMessage::error(format!("Sign-in failed: {}", e)));
                }
            }
        });
    });

    use_effect(|| {
        let title = APP_STATE.read().window_title();
        dioxus::desktop::window().set_title(&title);
    });

    let state = APP_STATE.read();
    let signed_in = state.is_signed_in();
    let view = state.ui.view;
    drop(state);

    rsx! {
        div {
            class: "app-container",

            if !signed_in {
                div {
                    class: "loading",
                    div { class: "spinner" }
                    p { class: "muted", "Signing in..." }
                }
            } else {
                if view == View::Editor {
                    Editor {}
                } else {
                    Dashboard {}
                }
            }

            StatusBar {}
        }
    }
}

// ============================================================================
// Editor Layout
// ============================================================================

#[component]
fn Editor() -> Element {
    let show_code = APP_STATE.read().ui.show_code;

    rsx! {
        div {
            class: "editor",
            tabindex: -1,
            onkeydown: move |e: KeyboardEvent| {
                let modifiers = e.modifiers();
                let is_ctrl = modifiers.ctrl() || modifiers.meta();
                if let Key::Character(ref c) = e.key() {
                    if is_ctrl && c == "s" {
                        e.prevent_default();
                        actions::save_project();
                    }
                }
            },

            Toolbar {}

            div {
                class: "editor-body",
                Palette {}
                main {
                    class: "editor-main",
                    Canvas {}
                    if show_code {
                        CodeViewer {}
                    }
                }
                PropertiesPanel {}
            }
        }
    }
}

// ============================================================================
// Toolbar
// ============================================================================

#[component]
fn Toolbar() -> Element {
    let state = APP_STATE.read();
    let project_name = state.project_name();
    let dirty = state.has_unsaved_changes();
    let saving = state.ui.saving;
    let show_code = state.ui.show_code;
    let mode = state.ui.viewport_mode;
    let zoom_percent = state
        .engine()
        .map(|e| (e.zoom() * 100.0).round())
        .unwrap_or(100.0);
    drop(state);

    rsx! {
        header {
            class: "toolbar",

            div {
                class: "toolbar-group",
                ToolbarButton {
                    icon: "←",
                    label: "Dashboard",
                    onclick: move |_| {
                        let mut state = APP_STATE.write();
                        state.show_dashboard();
                        drop(state);
                        actions::refresh_projects();
                    },
                }
                span { class: "toolbar-title", "{project_name}" }
                if dirty {
                    span { class: "dirty-dot", title: "Unsaved changes", "•" }
                }
            }

            div {
                class: "toolbar-group viewport-modes",
                for candidate in ViewportMode::all().iter().copied() {
                    ViewportButton { key: "{candidate:?}", mode: candidate, active: candidate == mode }
                }
            }

            div {
                class: "toolbar-group",
                ToolbarButton {
                    icon: "−",
                    label: "Zoom out",
                    compact: true,
                    onclick: move |_| {
                        if let Some(engine) = APP_STATE.write().engine_mut() {
                            engine.zoom_out();
                        }
                    },
                }
                button {
                    class: "zoom-label",
                    title: "Reset view",
                    onclick: move |_| {
                        if let Some(engine) = APP_STATE.write().engine_mut() {
                            engine.reset_view();
                        }
                    },
                    "{zoom_percent}%"
                }
                ToolbarButton {
                    icon: "+",
                    label: "Zoom in",
                    compact: true,
                    onclick: move |_| {
                        if let Some(engine) = APP_STATE.write().engine_mut() {
                            engine.zoom_in();
                        }
                    },
                }
            }

            div {
                class: "toolbar-group",
                ToolbarButton {
                    icon: "⤓",
                    label: "Import",
                    onclick: move |_| import_canvas(),
                }
                ToolbarButton {
                    icon: "⤒",
                    label: "Export",
                    onclick: move |_| export_canvas(),
                }
                ToolbarButton {
                    icon: "⧉",
                    label: "Copy Code",
                    onclick: move |_| {
                        let code = APP_STATE.read().generated_code(CodeTab::React);
                        copy_to_clipboard(code);
                    },
                }
                ToolbarButton {
                    icon: "</>",
                    label: "Code",
                    active: show_code,
                    onclick: move |_| {
                        let mut state = APP_STATE.write();
                        state.ui.show_code = !state.ui.show_code;
                    },
                }
                button {
                    class: "btn btn-primary",
                    disabled: saving,
                    onclick: move |_| actions::save_project(),
                    if saving { "Saving..." } else { "Save" }
                }
            }
        }
    }
}

#[component]
fn ToolbarButton(
    icon: &'static str,
    label: &'static str,
    #[props(default = false)] active: bool,
    #[props(default = false)] compact: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let class = if active {
        "toolbar-button toolbar-button-active"
    } else {
        "toolbar-button"
    };

    rsx! {
        button {
            class: "{class}",
            title: "{label}",
            onclick: move |e| onclick.call(e),
            span { "{icon}" }
            if !compact {
                span { class: "toolbar-label", "{label}" }
            }
        }
    }
}

#[component]
fn ViewportButton(mode: ViewportMode, active: bool) -> Element {
    let label = mode.label();
    let class = if active { "tab tab-active" } else { "tab" };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| APP_STATE.write().ui.viewport_mode = mode,
            "{label}"
        }
    }
}

/// Replace the open canvas with a document file's content
fn import_canvas() {
    spawn(async move {
        match file_ops::import_document().await {
            Ok(Some(file)) => {
                let mut state = APP_STATE.write();
                let count = file.document.len();
                if let Some(engine) = state.engine_mut() {
                    engine.replace_document(file.document);
                }
                state.set_status(StatusMessage::info(format!(
                    "Imported {} ({} elements)",
                    file.name, count
                )));
            }
            Ok(None) => {}
            Err(e) => APP_STATE
                .write()
                .set_status(StatusMessage::error(format!("{:#}", e))),
        }
    });
}

/// Write the generated bundle into a picked folder
fn export_canvas() {
    let elements = APP_STATE
        .read()
        .engine()
        .map(|e| e.elements().to_vec())
        .unwrap_or_default();
    spawn(async move {
        match file_ops::export_bundle_with_dialog(elements).await {
            Ok(Some((dir, export))) => {
                let mut text = format!("Exported {} files to {}", export.file_count(), dir.display());
                if export.has_warnings() {
                    text.push_str(&format!(" ({} warnings)", export.warnings.len()));
                }
                APP_STATE.write().set_status(StatusMessage::success(text));
            }
            Ok(None) => {}
            Err(e) => APP_STATE
                .write()
                .set_status(StatusMessage::error(format!("{:#}", e))),
        }
    });
}

// ============================================================================
// Status Bar
// ============================================================================

#[component]
fn StatusBar() -> Element {
    let state = APP_STATE.read();
    let status = state.ui.status.clone();
    let element_count = state.engine().map(|e| e.len());
    let user = state.session.as_ref().map(|s| s.user().email.clone());
    drop(state);

    rsx! {
        footer {
            class: "status-bar",

            if let Some(msg) = status {
                span { class: msg.level.class(), "{msg.text}" }
            } else {
                span { "Ready" }
            }

            div { class: "spacer" }

            if let Some(count) = element_count {
                span { "Elements: {count}" }
            }
            if let Some(email) = user {
                span { class: "muted", "{email}" }
            }
        }
    }
}
