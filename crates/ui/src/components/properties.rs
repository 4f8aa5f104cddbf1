//! # Properties Panel
//!
//! Edits the selected element. The fields come from the editor's
//! inspector; this module only maps each [`FieldControl`] to a widget and
//! feeds typed values back through [`inspector::edit`].

use dioxus::prelude::*;
use uiforge_editor::inspector::{self, field_value, fields};
use uiforge_editor::{FieldControl, FieldGroup, FieldInput, FieldSpec};
use uiforge_ir::{Element as CanvasElement, ElementId};

use crate::actions;
use crate::state::APP_STATE;

/// Apply one field edit to the element `id`
fn apply(id: &ElementId, spec: &FieldSpec, input: FieldInput) {
    let mut state = APP_STATE.write();
    let Some(engine) = state.engine_mut() else {
        return;
    };
    let Some(update) = engine
        .element(id)
        .and_then(|element| inspector::edit(element, spec, input))
    else {
        return;
    };
    engine.update_element(id, update);
}

/// Parse what a number widget produced
fn number_input(raw: &str) -> FieldInput {
    match raw.trim().parse::<f64>() {
        Ok(n) => FieldInput::Number(n),
        Err(_) => FieldInput::Text(raw.to_string()),
    }
}

#[component]
pub fn PropertiesPanel() -> Element {
    let mut group = use_signal(|| FieldGroup::Content);

    let state = APP_STATE.read();
    let element = state.engine().and_then(|e| e.selected_element()).cloned();
    drop(state);

    let Some(element) = element else {
        return rsx! {
            aside {
                class: "properties",
                h2 { class: "panel-title", "Properties" }
                p { class: "muted panel-empty", "Select an element to edit its properties" }
            }
        };
    };

    let specs = fields(group(), &element.kind);
    let tabs: Vec<(FieldGroup, &'static str)> =
        FieldGroup::all().iter().map(|g| (*g, g.label())).collect();
    let short_id = element.id.short().to_string();
    let kind_label = element.kind.display_name();

    rsx! {
        aside {
            class: "properties",
            header {
                class: "properties-header",
                h2 { class: "panel-title", "Properties" }
                div {
                    class: "properties-meta",
                    span { class: "badge", "{kind_label}" }
                    span { class: "muted mono", "#{short_id}" }
                }
            }

            nav {
                class: "tabs",
                for (tab, tab_label) in tabs {
                    button {
                        key: "{tab_label}",
                        class: if group() == tab { "tab tab-active" } else { "tab" },
                        onclick: move |_| group.set(tab),
                        "{tab_label}"
                    }
                }
            }

            div {
                class: "properties-fields",
                if specs.is_empty() {
                    p { class: "muted", "No properties available for this element type" }
                }
                for spec in specs {
                    FieldRow { key: "{spec.label}", element: element.clone(), spec }
                }
            }

            div {
                class: "properties-actions",
                button {
                    class: "btn",
                    onclick: move |_| actions::duplicate_selected(),
                    "Duplicate"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| actions::delete_selected(),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn FieldRow(element: CanvasElement, spec: FieldSpec) -> Element {
    let id = element.id.clone();
    let value = field_value(&element, &spec);
    let label = spec.label;

    let text = match &value {
        FieldInput::Text(text) => text.clone(),
        FieldInput::Number(n) => n.to_string(),
        FieldInput::Bool(b) => b.to_string(),
    };

    let widget = match spec.control {
        FieldControl::Text => rsx! {
            input {
                class: "input",
                r#type: "text",
                value: "{text}",
                oninput: move |e| apply(&id, &spec, FieldInput::Text(e.value())),
            }
        },
        FieldControl::TextArea => rsx! {
            textarea {
                class: "input",
                rows: 3,
                value: "{text}",
                oninput: move |e| apply(&id, &spec, FieldInput::Text(e.value())),
            }
        },
        FieldControl::Select(options) => rsx! {
            select {
                class: "input",
                value: "{text}",
                onchange: move |e| apply(&id, &spec, FieldInput::Text(e.value())),
                for (option, option_label) in options.iter().copied() {
                    option {
                        key: "{option}",
                        value: "{option}",
                        selected: option == text,
                        "{option_label}"
                    }
                }
            }
        },
        FieldControl::Color => {
            let picker = id.clone();
            let picker_spec = spec.clone();
            rsx! {
                div {
                    class: "color-field",
                    input {
                        class: "color-swatch",
                        r#type: "color",
                        value: "{text}",
                        oninput: move |e| apply(&picker, &picker_spec, FieldInput::Text(e.value())),
                    }
                    input {
                        class: "input mono",
                        r#type: "text",
                        value: "{text}",
                        oninput: move |e| apply(&id, &spec, FieldInput::Text(e.value())),
                    }
                }
            }
        }
        FieldControl::Slider { min, max } => rsx! {
            div {
                class: "slider-field",
                input {
                    r#type: "range",
                    min: "{min}",
                    max: "{max}",
                    step: "1",
                    value: "{text}",
                    oninput: move |e| apply(&id, &spec, number_input(&e.value())),
                }
                span { class: "muted mono", "{text}px" }
            }
        },
        FieldControl::Number => rsx! {
            input {
                class: "input",
                r#type: "number",
                value: "{text}",
                oninput: move |e| apply(&id, &spec, number_input(&e.value())),
            }
        },
        FieldControl::Switch => {
            let on = matches!(value, FieldInput::Bool(true));
            rsx! {
                button {
                    class: if on { "switch switch-on" } else { "switch" },
                    role: "switch",
                    onclick: move |_| apply(&id, &spec, FieldInput::Bool(!on)),
                    span { class: "switch-thumb" }
                }
            }
        }
    };

    rsx! {
        label {
            class: "field",
            span { "{label}" }
            {widget}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_input() {
        assert_eq!(number_input(" 42 "), FieldInput::Number(42.0));
        assert_eq!(number_input("abc"), FieldInput::Text("abc".into()));
    }
}
