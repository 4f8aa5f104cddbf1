//! Project dashboard: the signed-in user's projects and a create form.

use dioxus::prelude::*;
use uiforge_store::Project;

use crate::actions;
use crate::state::APP_STATE;

#[component]
pub fn Dashboard() -> Element {
    let state = APP_STATE.read();
    let projects = state.projects.clone();
    let user_name = state
        .session
        .as_ref()
        .map(|s| s.user().name.clone())
        .unwrap_or_default();
    drop(state);

    let mut show_form = use_signal(|| false);

    rsx! {
        div {
            class: "dashboard",

            header {
                class: "dashboard-header",
                div {
                    h1 { "Your Projects" }
                    p { class: "muted", "Create and manage your UI prototypes" }
                }
                div {
                    class: "dashboard-actions",
                    span { class: "muted", "{user_name}" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_form.set(!show_form()),
                        "+ New Project"
                    }
                }
            }

            if show_form() {
                CreateProjectForm { on_close: move |_| show_form.set(false) }
            }

            if projects.is_empty() {
                div {
                    class: "empty-state",
                    div { class: "empty-icon", "▦" }
                    h3 { "No projects yet" }
                    p { class: "muted", "Create your first project to get started" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_form.set(true),
                        "Create Project"
                    }
                }
            } else {
                div {
                    class: "project-grid",
                    for project in projects {
                        ProjectCard { key: "{project.id}", project }
                    }
                }
            }
        }
    }
}

#[component]
fn CreateProjectForm(on_close: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);

    let can_submit = !name.read().trim().is_empty();

    rsx! {
        form {
            class: "create-form card",
            onsubmit: move |e| {
                e.prevent_default();
                let project_name = name.read().trim().to_string();
                if project_name.is_empty() {
                    return;
                }
                let text = description.read().trim().to_string();
                actions::create_project(project_name, Some(text));
                name.set(String::new());
                description.set(String::new());
                on_close.call(());
            },

            h3 { "Create New Project" }
            label {
                class: "field",
                span { "Project Name" }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "My Landing Page",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
            }
            label {
                class: "field",
                span { "Description (optional)" }
                textarea {
                    class: "input",
                    rows: 3,
                    placeholder: "What are you building?",
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                }
            }
            div {
                class: "form-actions",
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: !can_submit,
                    "Create Project"
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let id = project.id;
    let (badge_class, badge) = if project.is_public {
        ("badge badge-public", "Public")
    } else {
        ("badge", "Private")
    };
    let updated = project.updated_at.format("%b %-d, %Y").to_string();

    rsx! {
        div {
            class: "project-card card",
            onclick: move |_| actions::open_project(id),

            div {
                class: "project-card-header",
                h3 { "{project.name}" }
                span { class: "{badge_class}", "{badge}" }
            }
            if let Some(description) = &project.description {
                p { class: "muted project-description", "{description}" }
            }
            div {
                class: "project-card-footer",
                span { class: "muted", "Updated {updated}" }
                button {
                    class: "btn btn-ghost btn-danger",
                    title: "Delete project",
                    onclick: move |e| {
                        e.stop_propagation();
                        actions::delete_project(id);
                    },
                    "Delete"
                }
            }
        }
    }
}
