//! Element kind vocabulary
//!
//! Every placed element carries a kind. The known kinds drive default
//! properties, live rendering and code generation; anything else is kept as
//! a [`ElementKind::Custom`] string and rendered as an unstyled block.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Element Kind
// ============================================================================

/// The type of a placed UI element
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementKind {
    // Basic
    Button,
    Input,
    Title,
    Paragraph,
    Image,
    // Layout
    Container,
    Card,
    Grid,
    Layout,
    // Form
    Checkbox,
    Radio,
    Select,
    Textarea,
    // Interactive
    Tab,
    Accordion,
    Modal,
    // Navigation
    Navbar,
    Footer,
    Menu,
    // Library only
    Icon,
    /// Any type string outside the known vocabulary
    Custom(CustomKind),
}

/// A type string outside the known vocabulary
///
/// Only built by `ElementKind::from`, so it never spells a known kind and
/// a custom kind always deserializes back to itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomKind(String);

impl CustomKind {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ElementKind {
    /// All known (non-custom) kinds
    pub fn known() -> &'static [ElementKind] {
        &[
            ElementKind::Button,
            ElementKind::Input,
            ElementKind::Title,
            ElementKind::Paragraph,
            ElementKind::Image,
            ElementKind::Container,
            ElementKind::Card,
            ElementKind::Grid,
            ElementKind::Layout,
            ElementKind::Checkbox,
            ElementKind::Radio,
            ElementKind::Select,
            ElementKind::Textarea,
            ElementKind::Tab,
            ElementKind::Accordion,
            ElementKind::Modal,
            ElementKind::Navbar,
            ElementKind::Footer,
            ElementKind::Menu,
            ElementKind::Icon,
        ]
    }

    /// The raw type string used in persisted documents
    pub fn as_str(&self) -> &str {
        match self {
            ElementKind::Button => "button",
            ElementKind::Input => "input",
            ElementKind::Title => "title",
            ElementKind::Paragraph => "paragraph",
            ElementKind::Image => "image",
            ElementKind::Container => "container",
            ElementKind::Card => "card",
            ElementKind::Grid => "grid",
            ElementKind::Layout => "layout",
            ElementKind::Checkbox => "checkbox",
            ElementKind::Radio => "radio",
            ElementKind::Select => "select",
            ElementKind::Textarea => "textarea",
            ElementKind::Tab => "tab",
            ElementKind::Accordion => "accordion",
            ElementKind::Modal => "modal",
            ElementKind::Navbar => "navbar",
            ElementKind::Footer => "footer",
            ElementKind::Menu => "menu",
            ElementKind::Icon => "icon",
            ElementKind::Custom(raw) => raw.as_str(),
        }
    }

    /// Human readable label for palettes and badges
    pub fn display_name(&self) -> String {
        match self {
            ElementKind::Tab => "Tabs".to_string(),
            ElementKind::Custom(raw) => raw.as_str().to_string(),
            other => {
                let raw = other.as_str();
                let mut chars = raw.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }

    /// Whether this kind is outside the known vocabulary
    pub fn is_custom(&self) -> bool {
        matches!(self, ElementKind::Custom(_))
    }

    /// Whether the reusable component library accepts this kind
    pub fn is_library_type(&self) -> bool {
        !matches!(self, ElementKind::Menu | ElementKind::Custom(_))
    }
}

impl From<&str> for ElementKind {
    fn from(raw: &str) -> Self {
        ElementKind::known()
            .iter()
            .find(|kind| kind.as_str() == raw)
            .cloned()
            .unwrap_or_else(|| ElementKind::Custom(CustomKind(raw.to_string())))
    }
}

impl From<String> for ElementKind {
    fn from(raw: String) -> Self {
        match ElementKind::from(raw.as_str()) {
            ElementKind::Custom(_) => ElementKind::Custom(CustomKind(raw)),
            known => known,
        }
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Custom(raw) => raw.0,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Palette
// ============================================================================

/// A titled group of kinds offered in the component palette
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteCategory {
    pub title: &'static str,
    pub kinds: Vec<ElementKind>,
}

/// The palette offered by the editor, in display order
pub fn palette() -> Vec<PaletteCategory> {
    vec![
        PaletteCategory {
            title: "Basic Elements",
            kinds: vec![
                ElementKind::Button,
                ElementKind::Input,
                ElementKind::Title,
                ElementKind::Paragraph,
                ElementKind::Image,
            ],
        },
        PaletteCategory {
            title: "Layout",
            kinds: vec![
                ElementKind::Container,
                ElementKind::Card,
                ElementKind::Grid,
                ElementKind::Layout,
            ],
        },
        PaletteCategory {
            title: "Form Elements",
            kinds: vec![
                ElementKind::Checkbox,
                ElementKind::Radio,
                ElementKind::Select,
                ElementKind::Textarea,
            ],
        },
        PaletteCategory {
            title: "Interactive",
            kinds: vec![ElementKind::Tab, ElementKind::Accordion, ElementKind::Modal],
        },
        PaletteCategory {
            title: "Navigation",
            kinds: vec![ElementKind::Navbar, ElementKind::Footer, ElementKind::Menu],
        },
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds_round_trip_through_strings() {
        for kind in ElementKind::known() {
            assert_eq!(ElementKind::from(kind.as_str()), *kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_custom() {
        let kind = ElementKind::from("widget123");
        assert!(matches!(&kind, ElementKind::Custom(raw) if raw.as_str() == "widget123"));
        assert!(kind.is_custom());
        assert_eq!(kind.to_string(), "widget123");
    }

    #[test]
    fn test_kind_parsing_is_case_sensitive() {
        assert!(ElementKind::from("Button").is_custom());
    }

    #[test]
    fn test_kind_serializes_as_plain_string() {
        let json = serde_json::to_string(&ElementKind::Card).unwrap();
        assert_eq!(json, r#""card""#);

        let custom: ElementKind = serde_json::from_str(r#""hero""#).unwrap();
        assert_eq!(custom, ElementKind::from("hero"));
    }

    #[test]
    fn test_custom_kind_never_spells_a_known_kind() {
        assert_eq!(ElementKind::from("button".to_string()), ElementKind::Button);

        for raw in ["hero", "widget123", "Button"] {
            let kind = ElementKind::from(raw);
            let json = serde_json::to_string(&kind).unwrap();
            let back: ElementKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(ElementKind::Button.display_name(), "Button");
        assert_eq!(ElementKind::Tab.display_name(), "Tabs");
        assert_eq!(ElementKind::from("hero").display_name(), "hero");
    }

    #[test]
    fn test_library_types() {
        assert!(ElementKind::Icon.is_library_type());
        assert!(ElementKind::Layout.is_library_type());
        assert!(!ElementKind::Menu.is_library_type());
        assert!(!ElementKind::from("hero").is_library_type());
    }

    #[test]
    fn test_palette_covers_every_canvas_kind_once() {
        let categories = palette();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0].title, "Basic Elements");

        let all: Vec<&ElementKind> = categories.iter().flat_map(|c| c.kinds.iter()).collect();
        assert_eq!(all.len(), 19);
        assert!(!all.contains(&&ElementKind::Icon));
    }
}
