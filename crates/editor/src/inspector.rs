//! # Properties Editor
//!
//! Describes the editable fields for a selected element and turns a single
//! field edit into an [`ElementUpdate`].
//!
//! Fields come in three groups:
//!
//! - **Content**: type-specific (button text, heading level, ...)
//! - **Style**: background and text color, border radius, four-sided padding
//! - **Layout**: width, height, x, y and a visibility switch
//!
//! Content and style fields, and the visibility switch, live in the property
//! bag and produce single-key property patches. Width, height, x and y are
//! top-level element fields and produce `size` / `position` replacements, so
//! resizing or moving through the panel never touches the property bag.

use uiforge_core::{Position, PropertyValue, Size};
use uiforge_ir::{Element, ElementKind};

use crate::canvas::ElementUpdate;

const BUTTON_VARIANTS: &[(&str, &str)] = &[
    ("default", "Default"),
    ("destructive", "Destructive"),
    ("outline", "Outline"),
    ("secondary", "Secondary"),
    ("ghost", "Ghost"),
    ("link", "Link"),
];

const BUTTON_SIZES: &[(&str, &str)] = &[("sm", "Small"), ("default", "Default"), ("lg", "Large")];

const INPUT_TYPES: &[(&str, &str)] = &[
    ("text", "Text"),
    ("email", "Email"),
    ("password", "Password"),
    ("number", "Number"),
    ("tel", "Phone"),
    ("url", "URL"),
];

const HEADING_LEVELS: &[(&str, &str)] = &[
    ("h1", "H1 - Largest"),
    ("h2", "H2 - Large"),
    ("h3", "H3 - Medium"),
    ("h4", "H4 - Small"),
    ("h5", "H5 - Smaller"),
    ("h6", "H6 - Smallest"),
];

// ============================================================================
// Field Descriptions
// ============================================================================

/// Which panel tab a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    Content,
    Style,
    Layout,
}

impl FieldGroup {
    pub fn all() -> &'static [FieldGroup] {
        &[FieldGroup::Content, FieldGroup::Style, FieldGroup::Layout]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldGroup::Content => "Content",
            FieldGroup::Style => "Style",
            FieldGroup::Layout => "Layout",
        }
    }
}

/// What an edit to a field changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    /// A key in the property bag
    Property(&'static str),
    Width,
    Height,
    X,
    Y,
}

impl FieldTarget {
    /// Whether edits go through the top-level field path instead of the property merge
    pub fn is_top_level(&self) -> bool {
        !matches!(self, FieldTarget::Property(_))
    }
}

/// The input widget used for a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldControl {
    Text,
    TextArea,
    /// `(value, label)` options
    Select(&'static [(&'static str, &'static str)]),
    Color,
    Slider { min: f64, max: f64 },
    Number,
    Switch,
}

/// One editable field of the panel
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub target: FieldTarget,
    pub control: FieldControl,
    /// Shown when the property is unset
    pub default: &'static str,
}

impl FieldSpec {
    fn property(label: &'static str, key: &'static str, control: FieldControl) -> Self {
        Self {
            label,
            target: FieldTarget::Property(key),
            control,
            default: "",
        }
    }

    fn layout(label: &'static str, target: FieldTarget) -> Self {
        Self {
            label,
            target,
            control: FieldControl::Number,
            default: "",
        }
    }

    fn or(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }
}

/// Type-specific content fields; empty for kinds without any
pub fn content_fields(kind: &ElementKind) -> Vec<FieldSpec> {
    use FieldControl::*;
    match kind {
        ElementKind::Button => vec![
            FieldSpec::property("Button Text", "text", Text),
            FieldSpec::property("Variant", "variant", Select(BUTTON_VARIANTS)).or("default"),
            FieldSpec::property("Size", "size", Select(BUTTON_SIZES)).or("default"),
        ],
        ElementKind::Input => vec![
            FieldSpec::property("Placeholder", "placeholder", Text),
            FieldSpec::property("Input Type", "type", Select(INPUT_TYPES)).or("text"),
        ],
        ElementKind::Title => vec![
            FieldSpec::property("Title Text", "text", Text),
            FieldSpec::property("Heading Level", "level", Select(HEADING_LEVELS)).or("h1"),
        ],
        ElementKind::Paragraph => vec![FieldSpec::property("Paragraph Text", "text", TextArea)],
        ElementKind::Image => vec![
            FieldSpec::property("Image URL", "src", Text),
            FieldSpec::property("Alt Text", "alt", Text),
        ],
        ElementKind::Card => vec![
            FieldSpec::property("Card Title", "title", Text),
            FieldSpec::property("Card Content", "content", TextArea),
        ],
        _ => Vec::new(),
    }
}

/// Style fields shared by every kind
pub fn style_fields() -> Vec<FieldSpec> {
    use FieldControl::*;
    vec![
        FieldSpec::property("Background Color", "backgroundColor", Color).or("#ffffff"),
        FieldSpec::property("Text Color", "textColor", Color).or("#000000"),
        FieldSpec::property("Border Radius", "borderRadius", Slider { min: 0.0, max: 50.0 }).or("0"),
        FieldSpec::property("Padding Top", "paddingTop", Number),
        FieldSpec::property("Padding Right", "paddingRight", Number),
        FieldSpec::property("Padding Bottom", "paddingBottom", Number),
        FieldSpec::property("Padding Left", "paddingLeft", Number),
    ]
}

/// Layout fields shared by every kind
pub fn layout_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::layout("Width", FieldTarget::Width),
        FieldSpec::layout("Height", FieldTarget::Height),
        FieldSpec::layout("X Position", FieldTarget::X),
        FieldSpec::layout("Y Position", FieldTarget::Y),
        FieldSpec::property("Visible", "visible", FieldControl::Switch),
    ]
}

/// Fields of one group for `kind`
pub fn fields(group: FieldGroup, kind: &ElementKind) -> Vec<FieldSpec> {
    match group {
        FieldGroup::Content => content_fields(kind),
        FieldGroup::Style => style_fields(),
        FieldGroup::Layout => layout_fields(),
    }
}

// ============================================================================
// Reading and Editing
// ============================================================================

/// A value typed into a field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text(String),
    Number(f64),
    Bool(bool),
}

/// Current display value of a field for `element`
pub fn field_value(element: &Element, spec: &FieldSpec) -> FieldInput {
    match spec.target {
        FieldTarget::Width => FieldInput::Number(element.size.width as f64),
        FieldTarget::Height => FieldInput::Number(element.size.height as f64),
        FieldTarget::X => FieldInput::Number(element.position.x as f64),
        FieldTarget::Y => FieldInput::Number(element.position.y as f64),
        FieldTarget::Property(key) => match spec.control {
            FieldControl::Switch => FieldInput::Bool(element.properties.flag_or(key, true)),
            FieldControl::Slider { .. } => {
                FieldInput::Number(element.properties.number(key).unwrap_or(0.0))
            }
            _ => FieldInput::Text(element.properties.text_or(key, spec.default)),
        },
    }
}

/// Turn one field edit into an update for `element`.
///
/// Returns `None` when the input does not make sense for the field, e.g.
/// non-numeric text typed into the width field or a number too large for
/// canvas geometry. Negative sizes and positions are clamped at zero.
pub fn edit(element: &Element, spec: &FieldSpec, input: FieldInput) -> Option<ElementUpdate> {
    match spec.target {
        FieldTarget::Property(key) => {
            let value = match (spec.control, input) {
                (FieldControl::Slider { min, max }, input) => {
                    PropertyValue::Number(as_number(input)?.clamp(min, max))
                }
                (_, FieldInput::Text(text)) => PropertyValue::Text(text),
                (_, FieldInput::Number(n)) => PropertyValue::Number(n),
                (_, FieldInput::Bool(b)) => PropertyValue::Bool(b),
            };
            Some(ElementUpdate::property(key, value))
        }
        FieldTarget::Width => {
            let width = non_negative(input)?;
            Some(ElementUpdate::size(Size::new(width, element.size.height)))
        }
        FieldTarget::Height => {
            let height = non_negative(input)?;
            Some(ElementUpdate::size(Size::new(element.size.width, height)))
        }
        FieldTarget::X => {
            let x = non_negative(input)?;
            Some(ElementUpdate::position(Position::new(x, element.position.y)))
        }
        FieldTarget::Y => {
            let y = non_negative(input)?;
            Some(ElementUpdate::position(Position::new(element.position.x, y)))
        }
    }
}

fn as_number(input: FieldInput) -> Option<f64> {
    match input {
        FieldInput::Number(n) => Some(n),
        FieldInput::Text(text) => text.trim().parse().ok(),
        FieldInput::Bool(_) => None,
    }
    .filter(|n: &f64| n.is_finite())
}

fn non_negative(input: FieldInput) -> Option<f32> {
    as_number(input)
        .map(|n| n.max(0.0) as f32)
        .filter(|n| n.is_finite())
}

// ============================================================================
// Tests
// ============================================================================
