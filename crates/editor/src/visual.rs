//! Visual rendering of elements for the live canvas
//!
//! [`VisualRenderer`] is the on-canvas implementation of the shared
//! [`ElementRenderer`] dispatch. It produces a [`Visual`] per element: a
//! small, toolkit-neutral description that the desktop shell turns into
//! widgets. Property values are substituted here, with the canvas defaults.

use uiforge_ir::{Element, ElementRenderer, HeadingLevel, Properties};

/// Paragraph text shown when the element's text is empty
pub const PARAGRAPH_PLACEHOLDER: &str =
    "This is a paragraph of text. You can edit this content in the properties panel.";

/// Card body shown when the element's content is empty
pub const CARD_PLACEHOLDER: &str =
    "Card content goes here. You can customize this text in the properties panel.";

// ============================================================================
// Visual
// ============================================================================

/// What one element looks like on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    Button {
        text: String,
        variant: String,
        size: String,
    },
    Input {
        placeholder: String,
        input_type: String,
    },
    Heading {
        level: HeadingLevel,
        text: String,
    },
    Paragraph {
        text: String,
    },
    /// `src` is `None` when no image source is set
    Image {
        src: Option<String>,
        alt: String,
    },
    Card {
        title: String,
        content: String,
    },
    Container {
        background: String,
        padding: String,
    },
    /// Generic dashed box labelled with the raw type string
    Placeholder {
        label: String,
    },
}

// ============================================================================
// Element Style
// ============================================================================

/// Type-agnostic style properties applied to an element's frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementStyle {
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub border_radius: Option<f64>,
    /// Top, right, bottom, left
    pub padding: [Option<f64>; 4],
}

impl ElementStyle {
    /// Read the style group from a property bag
    pub fn from_properties(props: &Properties) -> Self {
        let text = |key: &str| {
            props
                .get(key)
                .filter(|v| v.is_truthy())
                .map(|v| v.to_string())
        };
        Self {
            background_color: text("backgroundColor"),
            text_color: text("textColor"),
            border_radius: props.number("borderRadius"),
            padding: [
                props.number("paddingTop"),
                props.number("paddingRight"),
                props.number("paddingBottom"),
                props.number("paddingLeft"),
            ],
        }
    }

    /// Inline CSS declarations for the set fields
    pub fn to_css(&self) -> String {
        let mut css = Vec::new();
        if let Some(color) = &self.background_color {
            css.push(format!("background-color: {};", color));
        }
        if let Some(color) = &self.text_color {
            css.push(format!("color: {};", color));
        }
        if let Some(radius) = self.border_radius {
            css.push(format!("border-radius: {}px;", radius));
        }
        let sides = ["top", "right", "bottom", "left"];
        for (side, value) in sides.iter().zip(self.padding.iter()) {
            if let Some(value) = value {
                css.push(format!("padding-{}: {}px;", side, value));
            }
        }
        css.join(" ")
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Renders elements as [`Visual`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualRenderer;

impl ElementRenderer for VisualRenderer {
    type Output = Visual;

    fn button(&self, element: &Element) -> Visual {
        let props = &element.properties;
        Visual::Button {
            text: props.text_or("text", "Button"),
            variant: props.text_or("variant", "default"),
            size: props.text_or("size", "default"),
        }
    }

    fn input(&self, element: &Element) -> Visual {
        let props = &element.properties;
        Visual::Input {
            placeholder: props.text_or("placeholder", "Enter text..."),
            input_type: props.text_or("type", "text"),
        }
    }

    fn title(&self, element: &Element, level: HeadingLevel) -> Visual {
        Visual::Heading {
            level,
            text: element.properties.text_or("text", "Title"),
        }
    }

    fn paragraph(&self, element: &Element) -> Visual {
        Visual::Paragraph {
            text: element.properties.text_or("text", PARAGRAPH_PLACEHOLDER),
        }
    }

    fn image(&self, element: &Element) -> Visual {
        let props = &element.properties;
        let src = props.text_or("src", "");
        Visual::Image {
            src: (!src.is_empty()).then_some(src),
            alt: props.text_or("alt", "Image"),
        }
    }

    fn card(&self, element: &Element) -> Visual {
        let props = &element.properties;
        Visual::Card {
            title: props.text_or("title", "Card Title"),
            content: props.text_or("content", CARD_PLACEHOLDER),
        }
    }

    fn container(&self, element: &Element) -> Visual {
        let props = &element.properties;
        Visual::Container {
            background: props.text_or("backgroundColor", "#ffffff"),
            padding: props.text_or("padding", "16px"),
        }
    }

    fn fallback(&self, element: &Element) -> Visual {
        Visual::Placeholder {
            label: element.kind.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
