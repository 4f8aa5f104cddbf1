//! Generated code panel with React, CSS and HTML tabs.

use dioxus::prelude::*;
use uiforge_codegen::GeneratorConfig;

use crate::file_ops;
use crate::state::{APP_STATE, CodeTab, StatusMessage};

/// Script that copies `code` to the clipboard
pub fn clipboard_script(code: &str) -> String {
    // A JSON string literal is also a valid JS string literal.
    let literal = serde_json::Value::String(code.to_string()).to_string();
    format!("navigator.clipboard.writeText({});", literal)
}

/// Copy `code` to the clipboard and report it in the status bar
pub fn copy_to_clipboard(code: String) {
    spawn(async move {
        let script = clipboard_script(&code);
        match document::eval(&script).await {
            Ok(_) => APP_STATE
                .write()
                .set_status(StatusMessage::success("Code copied to clipboard")),
            Err(e) => {
                tracing::warn!("Clipboard write failed: {:?}", e);
                APP_STATE
                    .write()
                    .set_status(StatusMessage::error("Could not copy code"));
            }
        }
    });
}

#[component]
pub fn CodeViewer() -> Element {
    let state = APP_STATE.read();
    let tab = state.ui.code_tab;
    let code = state.generated_code(tab);
    drop(state);

    let file_name = tab.file_name(&GeneratorConfig::new());
    let copy_code = code.clone();
    let download_code = code.clone();

    rsx! {
        section {
            class: "code-viewer",
            header {
                class: "code-header",
                div {
                    class: "code-title",
                    h2 { class: "panel-title", "Generated Code" }
                    span { class: "badge", "React + Tailwind" }
                }
                div {
                    class: "code-actions",
                    button {
                        class: "btn btn-sm",
                        onclick: move |_| copy_to_clipboard(copy_code.clone()),
                        "Copy"
                    }
                    button {
                        class: "btn btn-sm",
                        onclick: move |_| {
                            let code = download_code.clone();
                            let name = file_name.clone();
                            spawn(async move {
                                match file_ops::download_code(code, &name).await {
                                    Ok(Some(path)) => APP_STATE.write().set_status(
                                        StatusMessage::success(format!("Saved {}", path.display())),
                                    ),
                                    Ok(None) => {}
                                    Err(e) => APP_STATE
                                        .write()
                                        .set_status(StatusMessage::error(e.to_string())),
                                }
                            });
                        },
                        "Download"
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        title: "Close",
                        onclick: move |_| APP_STATE.write().ui.show_code = false,
                        "✕"
                    }
                }
            }

            nav {
                class: "tabs",
                for candidate in CodeTab::all().iter().copied() {
                    CodeTabButton { key: "{candidate:?}", tab: candidate, active: candidate == tab }
                }
            }

            pre {
                class: "code-block",
                code { "{code}" }
            }
        }
    }
}

#[component]
fn CodeTabButton(tab: CodeTab, active: bool) -> Element {
    let label = tab.label();
    rsx! {
        button {
            class: if active { "tab tab-active" } else { "tab" },
            onclick: move |_| APP_STATE.write().ui.code_tab = tab,
            "{label}"
        }
    }
}
