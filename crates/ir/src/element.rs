//! Placed elements and their property bags
//!
//! An [`Element`] is one typed, positioned UI unit on the canvas. New
//! elements are only ever built through [`create_element`], which assigns a
//! fresh id, the default size and the kind's default property bag.

use crate::kind::ElementKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use uiforge_core::{
    ForgeError, ForgeResult, Position, Positioned, PropertyValue, Rect, Size, Validatable,
};

// ============================================================================
// Element Id
// ============================================================================

/// Session-wide sequence mixed into every generated id
static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Opaque, immutable element identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Generate a fresh id of the form `element_<millis>_<sequence>_<random>`
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let sequence = NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let random = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("element_{}_{}_{}", millis, sequence, &random[..9]))
    }

    /// Borrow the raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last eight characters, used as a compact label
    pub fn short(&self) -> &str {
        let start = self
            .0
            .char_indices()
            .rev()
            .nth(7)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.0[start..]
    }
}

impl From<&str> for ElementId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for ElementId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Properties
// ============================================================================

/// Open mapping from property name to a primitive value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, PropertyValue>);

impl Properties {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key)
    }

    /// Set a single key, leaving every other key untouched
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Remove a key
    pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        self.0.remove(key)
    }

    /// Merge a patch into this bag key by key
    pub fn merge(&mut self, patch: Properties) {
        self.0.extend(patch.0);
    }

    /// Read a key as display text, falling back when it is missing or not truthy
    pub fn text_or(&self, key: &str, default: &str) -> String {
        match self.0.get(key) {
            Some(value) if value.is_truthy() => value.to_string(),
            _ => default.to_string(),
        }
    }

    /// Read a numeric key, accepting numbers and numeric strings
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            PropertyValue::Number(n) => Some(*n),
            PropertyValue::Text(s) => s.trim().trim_end_matches("px").parse().ok(),
            PropertyValue::Bool(_) => None,
        }
    }

    /// Read a boolean flag, treating a missing key as `default`
    pub fn flag_or(&self, key: &str, default: bool) -> bool {
        self.0
            .get(key)
            .and_then(PropertyValue::as_bool)
            .unwrap_or(default)
    }

    /// Check if a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the bag has no keys
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The default property bag for a kind
///
/// Kinds without an entry get an empty bag.
pub fn default_properties(kind: &ElementKind) -> Properties {
    match kind {
        ElementKind::Button => Properties::new()
            .with("text", "Button")
            .with("variant", "default")
            .with("size", "default"),
        ElementKind::Input => Properties::new()
            .with("placeholder", "Enter text...")
            .with("type", "text"),
        ElementKind::Title => Properties::new().with("text", "Title").with("level", "h1"),
        ElementKind::Paragraph => {
            Properties::new().with("text", "This is a paragraph of text.")
        }
        ElementKind::Image => Properties::new()
            .with("src", "")
            .with("alt", "Image")
            .with("width", "200px")
            .with("height", "150px"),
        ElementKind::Card => Properties::new()
            .with("title", "Card Title")
            .with("content", "Card content goes here."),
        ElementKind::Container => Properties::new()
            .with("padding", "16px")
            .with("backgroundColor", "#ffffff"),
        _ => Properties::new(),
    }
}

// ============================================================================
// Element
// ============================================================================

/// One placed UI element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique within a document, never changes
    pub id: ElementId,

    #[serde(rename = "type")]
    pub kind: ElementKind,

    #[serde(default)]
    pub properties: Properties,

    pub position: Position,

    pub size: Size,

    /// Nested elements, reserved for container kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Element>>,
}

impl Element {
    /// Produce a copy of this element under a fresh id
    pub fn duplicate(&self) -> Self {
        Self {
            id: ElementId::generate(),
            ..self.clone()
        }
    }

    /// Bounding rectangle on the canvas
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

/// Build a new element of `kind` at `position` with default size and properties
pub fn create_element(kind: impl Into<ElementKind>, position: Position) -> Element {
    let kind = kind.into();
    Element {
        id: ElementId::generate(),
        properties: default_properties(&kind),
        kind,
        position,
        size: Size::default_element(),
        children: None,
    }
}

impl Positioned for Element {
    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn bounds(&self) -> Option<Rect> {
        Some(self.rect())
    }
}

impl Validatable for Element {
    fn validate(&self) -> ForgeResult<()> {
        if self.id.as_str().is_empty() {
            return Err(ForgeError::element_validation("<empty>", "id must not be empty"));
        }
        if !self.position.is_finite() {
            return Err(ForgeError::element_validation(
                self.id.as_str(),
                "position must be finite",
            ));
        }
        if self.size.width.is_nan()
            || self.size.height.is_nan()
            || self.size.width < 0.0
            || self.size.height < 0.0
        {
            return Err(ForgeError::element_validation(
                self.id.as_str(),
                "size must be non-negative",
            ));
        }
        for child in self.children.iter().flatten() {
            child.validate()?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
