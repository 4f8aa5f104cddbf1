//! # Canvas
//!
//! Renders the open document and forwards pointer input to the drag
//! controller. Elements are absolutely positioned inside a layer that
//! carries the viewport's pan and zoom.

use dioxus::prelude::*;
use uiforge_core::Position;
use uiforge_editor::{ElementStyle, RenderedElement, Visual, VisualRenderer};

use crate::actions;
use crate::state::APP_STATE;

/// Opacity of elements whose `visible` property is off
const HIDDEN_OPACITY: f32 = 0.35;

// ============================================================================
// Styling Helpers
// ============================================================================

/// Inline style of an element's frame on the canvas
pub fn frame_style(item: &RenderedElement<Visual>, style_css: &str) -> String {
    let rect = &item.rect;
    let mut css = format!(
        "left: {}px; top: {}px; width: {}px; height: {}px; z-index: {};",
        rect.position.x, rect.position.y, rect.size.width, rect.size.height, item.z_index
    );
    if !item.visible {
        css.push_str(&format!(" opacity: {};", HIDDEN_OPACITY));
    }
    if !style_css.is_empty() {
        css.push(' ');
        css.push_str(style_css);
    }
    css
}

/// Inline style of the layer holding the elements
pub fn layer_style(zoom: f32, offset: Position) -> String {
    format!(
        "transform: translate({}px, {}px) scale({}); transform-origin: 0 0;",
        offset.x, offset.y, zoom
    )
}

/// Classes for a preview button
pub fn button_class(variant: &str, size: &str) -> String {
    let variant = match variant {
        "destructive" | "outline" | "secondary" | "ghost" | "link" => variant,
        _ => "default",
    };
    let size = match size {
        "sm" | "lg" | "icon" => size,
        _ => "default",
    };
    format!("ui-button ui-button-{} ui-size-{}", variant, size)
}

// ============================================================================
// Canvas
// ============================================================================

#[component]
pub fn Canvas() -> Element {
    let mut area = use_signal(|| None::<std::rc::Rc<MountedData>>);

    let state = APP_STATE.read();
    let Some(engine) = state.engine() else {
        return rsx! {};
    };
    let items: Vec<(RenderedElement<Visual>, String)> = engine
        .render(&VisualRenderer)
        .into_iter()
        .map(|item| {
            let css = engine
                .element(&item.id)
                .map(|e| ElementStyle::from_properties(&e.properties).to_css())
                .unwrap_or_default();
            (item, css)
        })
        .collect();
    let layer = layer_style(engine.zoom(), engine.document().viewport.offset);
    let frame = state.ui.viewport_mode.frame_style();
    let dragging = state.drag.is_dragging();
    drop(state);

    // Re-measure the canvas origin; the layout shifts when panels toggle.
    let measure = move || async move {
        let Some(mounted) = area() else {
            return;
        };
        if let Ok(rect) = mounted.get_client_rect().await {
            APP_STATE.write().canvas_origin =
                Position::new(rect.origin.x as f32, rect.origin.y as f32);
        }
    };

    let cursor = if dragging { "cursor-grabbing" } else { "" };

    rsx! {
        div {
            class: "canvas-wrapper",
            div {
                class: "canvas-frame",
                style: "{frame}",
                div {
                    class: "canvas-area {cursor}",
                    tabindex: 0,
                    onmounted: move |e: MountedEvent| async move {
                        area.set(Some(e.data()));
                        measure().await;
                    },
                    onmouseenter: move |_| async move { measure().await },
                    onmousedown: move |_| actions::pointer_down_on_background(),
                    onmousemove: move |e| actions::pointer_move(&e),
                    onmouseup: move |_| actions::pointer_release(false),
                    onmouseleave: move |_| actions::pointer_release(true),
                    onwheel: move |e: WheelEvent| {
                        if !e.modifiers().ctrl() {
                            return;
                        }
                        e.prevent_default();
                        let mut state = APP_STATE.write();
                        if let Some(engine) = state.engine_mut() {
                            if wheel_zooms_in(&e) {
                                engine.zoom_in();
                            } else {
                                engine.zoom_out();
                            }
                        }
                    },
                    onkeydown: move |e: KeyboardEvent| {
                        let modifiers = e.modifiers();
                        let is_ctrl = modifiers.ctrl() || modifiers.meta();
                        match e.key() {
                            Key::Delete | Key::Backspace => {
                                e.prevent_default();
                                actions::delete_selected();
                            }
                            Key::Escape => actions::pointer_down_on_background(),
                            Key::Character(ref c) if is_ctrl && c == "d" => {
                                e.prevent_default();
                                actions::duplicate_selected();
                            }
                            _ => {}
                        }
                    },

                    div {
                        class: "canvas-layer",
                        style: "{layer}",
                        for (item , css) in items.iter().cloned() {
                            CanvasElement { key: "{item.id}", item, style_css: css }
                        }
                    }

                    if items.is_empty() {
                        div {
                            class: "canvas-empty",
                            div { class: "empty-icon", "✦" }
                            h3 { "Your canvas is empty" }
                            p { class: "muted", "Start by adding components from the left panel" }
                        }
                    }
                }
            }
        }
    }
}

/// Scrolling up zooms in
fn wheel_zooms_in(e: &WheelEvent) -> bool {
    match e.delta() {
        dioxus::html::geometry::WheelDelta::Pixels(v) => v.y < 0.0,
        dioxus::html::geometry::WheelDelta::Lines(v) => v.y < 0.0,
        dioxus::html::geometry::WheelDelta::Pages(v) => v.y < 0.0,
    }
}

// ============================================================================
// Element
// ============================================================================

#[component]
fn CanvasElement(item: RenderedElement<Visual>, style_css: String) -> Element {
    let style = frame_style(&item, &style_css);
    let selected = item.selected;
    let class = if selected {
        "canvas-element element-selected"
    } else {
        "canvas-element"
    };

    let down_id = item.id.clone();
    let duplicate_id = item.id.clone();
    let delete_id = item.id.clone();

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            onmousedown: move |e: MouseEvent| {
                e.stop_propagation();
                actions::pointer_down_on_element(&down_id, &e);
            },

            VisualContent { visual: item.content.clone() }

            if selected {
                div {
                    class: "element-toolbar",
                    onmousedown: move |e: MouseEvent| e.stop_propagation(),
                    button {
                        class: "element-tool",
                        title: "Duplicate",
                        onclick: move |_| actions::duplicate_element(&duplicate_id),
                        "⧉"
                    }
                    button {
                        class: "element-tool element-tool-danger",
                        title: "Delete",
                        onclick: move |_| actions::delete_element(&delete_id),
                        "✕"
                    }
                }
            }
        }
    }
}

#[component]
fn VisualContent(visual: Visual) -> Element {
    match visual {
        Visual::Button {
            text,
            variant,
            size,
        } => {
            let class = button_class(&variant, &size);
            rsx! {
                button { class: "{class}", tabindex: -1, "{text}" }
            }
        }
        Visual::Input {
            placeholder,
            input_type,
        } => rsx! {
            input {
                class: "ui-input",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                readonly: true,
                tabindex: -1,
            }
        },
        Visual::Heading { level, text } => {
            let tag = level.tag();
            rsx! {
                div { class: "ui-heading ui-{tag}", role: "heading", "{text}" }
            }
        }
        Visual::Paragraph { text } => rsx! {
            p { class: "ui-paragraph", "{text}" }
        },
        Visual::Image { src: Some(src), alt } => rsx! {
            img { class: "ui-image", src: "{src}", alt: "{alt}", draggable: false }
        },
        Visual::Image { src: None, alt } => rsx! {
            div { class: "ui-image-empty", "{alt}" }
        },
        Visual::Card { title, content } => rsx! {
            div {
                class: "ui-card",
                h3 { class: "ui-card-title", "{title}" }
                p { class: "ui-card-content", "{content}" }
            }
        },
        Visual::Container {
            background,
            padding,
        } => rsx! {
            div {
                class: "ui-container",
                style: "background-color: {background}; padding: {padding};",
                "Container"
            }
        },
        Visual::Placeholder { label } => rsx! {
            div { class: "ui-placeholder", "{label}" }
        },
    }
}
