//! Component palette: click an entry to add it to the canvas.

use dioxus::prelude::*;
use uiforge_ir::{ElementKind, palette};

use crate::actions;

/// Glyph shown next to a palette entry
pub fn kind_icon(kind: &ElementKind) -> &'static str {
    match kind {
        ElementKind::Button => "▭",
        ElementKind::Input => "⌨",
        ElementKind::Title => "H",
        ElementKind::Paragraph => "¶",
        ElementKind::Image => "🖼",
        ElementKind::Container => "□",
        ElementKind::Card => "▤",
        ElementKind::Grid => "▦",
        ElementKind::Layout => "◫",
        ElementKind::Checkbox => "☑",
        ElementKind::Radio => "◉",
        ElementKind::Select => "▾",
        ElementKind::Textarea => "☰",
        ElementKind::Tab => "⊟",
        ElementKind::Accordion => "⌄",
        ElementKind::Modal => "⧉",
        ElementKind::Navbar => "≡",
        ElementKind::Footer => "▁",
        ElementKind::Menu => "☷",
        _ => "◇",
    }
}

#[component]
pub fn Palette() -> Element {
    rsx! {
        aside {
            class: "palette",
            h2 { class: "panel-title", "Components" }

            for category in palette() {
                section {
                    key: "{category.title}",
                    class: "palette-category",
                    h3 { "{category.title}" }
                    div {
                        class: "palette-grid",
                        for kind in category.kinds {
                            PaletteItem { key: "{kind}", kind }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PaletteItem(kind: ElementKind) -> Element {
    let icon = kind_icon(&kind);
    let label = kind.display_name();

    rsx! {
        button {
            class: "palette-item",
            title: "Add {label}",
            onclick: move |_| actions::add_element(kind.clone()),
            span { class: "palette-icon", "{icon}" }
            span { "{label}" }
        }
    }
}
