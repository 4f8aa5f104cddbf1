//! Core types used throughout UI Forge
//!
//! This module contains the fundamental types shared by the element model,
//! the canvas editor, code generation and the project store.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Identifier of a stored user record
pub type UserId = i64;

/// Identifier of a stored project record
pub type ProjectId = i64;

/// Identifier of a stored reusable component record
pub type ComponentId = i64;

// ============================================================================
// Geometry Types
// ============================================================================

/// Position on the 2D canvas, in canvas-local pixels, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a new position
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a position at the origin (0, 0)
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Add an offset to this position
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Clamp both axes so neither is negative
    pub fn clamp_non_negative(&self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }

    /// Check if both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Size of an element on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Create a zero size
    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Default size for newly placed elements
    pub fn default_element() -> Self {
        Self {
            width: 200.0,
            height: 100.0,
        }
    }

    /// Calculate the area
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Check if both dimensions are finite numbers
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Check if the size contains a point (assuming origin at 0,0)
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::default_element()
    }
}

/// Bounding rectangle of an element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub position: Position,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(position: Position, size: Size) -> Self {
        Self { position, size }
    }

    /// Create a rectangle from coordinates and dimensions
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Position::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Check if a point is contained within this rectangle
    pub fn contains(&self, point: Position) -> bool {
        let local = point - self.position;
        self.size.contains(local.x, local.y)
    }

    /// Check if this rectangle intersects with another
    pub fn intersects(&self, other: &Rect) -> bool {
        self.position.x < other.position.x + other.size.width
            && self.position.x + self.size.width > other.position.x
            && self.position.y < other.position.y + other.size.height
            && self.position.y + self.size.height > other.position.y
    }

    /// Get the bottom-right corner
    pub fn bottom_right(&self) -> Position {
        Position::new(
            self.position.x + self.size.width,
            self.position.y + self.size.height,
        )
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self {
            position: Position::default(),
            size: Size::default(),
        }
    }
}

// ============================================================================
// Property Values
// ============================================================================

/// A primitive value stored in an element's property bag
///
/// Bags are open maps: any key may hold a string, a number or a boolean.
/// The untagged representation keeps the persisted JSON identical to a
/// plain object of primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl PropertyValue {
    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Whether the value counts as "set" when a template falls back to a default.
    ///
    /// Empty strings, `false`, zero and NaN are treated as unset.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropertyValue::Bool(v) => *v,
            PropertyValue::Number(v) => *v != 0.0 && !v.is_nan(),
            PropertyValue::Text(v) => !v.is_empty(),
        }
    }
}

impl Default for PropertyValue {
    fn default() -> Self {
        PropertyValue::Text(String::new())
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(v) => write!(f, "{}", v),
            PropertyValue::Number(v) => write!(f, "{}", v),
            PropertyValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Number(v as f64)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Number(v)
    }
}

impl From<f32> for PropertyValue {
    fn from(v: f32) -> Self {
        PropertyValue::Number(v as f64)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Text(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Text(v.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Position tests
    #[test]
    fn test_position_offset() {
        let pos = Position::new(10.0, 20.0);
        let new_pos = pos.offset(5.0, -10.0);
        assert_eq!(new_pos, Position::new(15.0, 10.0));
    }

    #[test]
    fn test_position_add_sub() {
        let p1 = Position::new(10.0, 20.0);
        let p2 = Position::new(5.0, 5.0);
        assert_eq!(p1 + p2, Position::new(15.0, 25.0));
        assert_eq!(p1 - p2, Position::new(5.0, 15.0));
    }

    #[test]
    fn test_position_clamp_non_negative() {
        assert_eq!(
            Position::new(-4.0, 12.0).clamp_non_negative(),
            Position::new(0.0, 12.0)
        );
        assert_eq!(
            Position::new(3.0, -0.5).clamp_non_negative(),
            Position::new(3.0, 0.0)
        );
    }

    #[test]
    fn test_position_is_finite() {
        assert!(Position::new(1.0, 2.0).is_finite());
        assert!(!Position::new(f32::NAN, 2.0).is_finite());
        assert!(!Position::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_position_default_is_origin() {
        assert_eq!(Position::default(), Position::zero());
        assert_eq!(Rect::default().position, Position::new(0.0, 0.0));
    }

    // Size tests
    #[test]
    fn test_size_default_element() {
        let size = Size::default();
        assert_eq!(size, Size::new(200.0, 100.0));
        assert_eq!(size.area(), 20000.0);
    }

    #[test]
    fn test_size_is_finite() {
        assert!(Size::new(10.0, 20.0).is_finite());
        assert!(!Size::new(f32::INFINITY, 20.0).is_finite());
    }

    // Rect tests
    #[test]
    fn test_rect_contains() {
        let rect = Rect::from_xywh(10.0, 10.0, 100.0, 50.0);
        assert!(rect.contains(Position::new(50.0, 30.0)));
        assert!(!rect.contains(Position::new(5.0, 30.0)));
        assert!(!rect.contains(Position::new(150.0, 30.0)));
        assert_eq!(rect.bottom_right(), Position::new(110.0, 60.0));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let b = Rect::from_xywh(50.0, 50.0, 100.0, 100.0);
        let c = Rect::from_xywh(200.0, 200.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    // PropertyValue tests
    #[test]
    fn test_property_value_truthiness() {
        assert!(PropertyValue::from("Button").is_truthy());
        assert!(!PropertyValue::from("").is_truthy());
        assert!(!PropertyValue::from(false).is_truthy());
        assert!(!PropertyValue::from(0).is_truthy());
        assert!(PropertyValue::from(12).is_truthy());
    }

    #[test]
    fn test_property_value_display() {
        assert_eq!(PropertyValue::from(12).to_string(), "12");
        assert_eq!(PropertyValue::from(1.5).to_string(), "1.5");
        assert_eq!(PropertyValue::from(true).to_string(), "true");
        assert_eq!(PropertyValue::from("h2").to_string(), "h2");
    }

    #[test]
    fn test_property_value_json_shape() {
        let values = vec![
            PropertyValue::from("text"),
            PropertyValue::from(8),
            PropertyValue::from(false),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"["text",8.0,false]"#);

        let back: Vec<PropertyValue> = serde_json::from_str(r#"["text",8,false]"#).unwrap();
        assert_eq!(back, values);
    }
}
