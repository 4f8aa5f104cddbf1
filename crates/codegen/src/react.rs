//! React + Tailwind markup for individual elements
//!
//! [`ReactRenderer`] is the textual implementation of the shared
//! [`ElementRenderer`] dispatch. Each element becomes one [`Fragment`]: the
//! markup plus the import declarations that markup needs.

use uiforge_ir::{Element, ElementRenderer, HeadingLevel};

// ============================================================================
// Import Declarations
// ============================================================================

/// Base framework import, always first
pub const REACT_IMPORT: &str = r#"import React from "react";"#;

/// Import required by button fragments
pub const BUTTON_IMPORT: &str = r#"import { Button } from "@/components/ui/button";"#;

/// Import required by input fragments
pub const INPUT_IMPORT: &str = r#"import { Input } from "@/components/ui/input";"#;

/// Import required by card fragments
pub const CARD_IMPORT: &str =
    r#"import { Card, CardContent, CardHeader, CardTitle } from "@/components/ui/card";"#;

/// Insertion-ordered set of import declarations
///
/// Each distinct declaration appears once, at the position it was first added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSet {
    entries: Vec<String>,
}

impl ImportSet {
    /// An empty set
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A set seeded with the base framework import
    pub fn seeded() -> Self {
        let mut set = Self::empty();
        set.insert(REACT_IMPORT);
        set
    }

    /// Add a declaration unless it is already present; returns whether it was new
    pub fn insert(&mut self, declaration: &str) -> bool {
        if self.entries.iter().any(|e| e == declaration) {
            return false;
        }
        self.entries.push(declaration.to_string());
        true
    }

    /// Declarations in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of distinct declarations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no declaration was added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One declaration per line
    pub fn render(&self) -> String {
        self.entries.join("\n")
    }
}

impl Default for ImportSet {
    fn default() -> Self {
        Self::seeded()
    }
}

// ============================================================================
// Fragment
// ============================================================================

/// Markup for one element together with the imports it requires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub imports: Vec<&'static str>,
    pub markup: String,
    /// Set when the element had no dedicated template
    pub generic: bool,
}

impl Fragment {
    fn new(markup: String) -> Self {
        Self {
            imports: Vec::new(),
            markup,
            generic: false,
        }
    }

    fn with_import(mut self, import: &'static str) -> Self {
        self.imports.push(import);
        self
    }

    /// Markup with every line prefixed by `indent`
    pub fn indented(&self, indent: &str) -> String {
        self.markup
            .lines()
            .map(|line| format!("{}{}", indent, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Renders elements as React + Tailwind markup
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactRenderer;

impl ElementRenderer for ReactRenderer {
    type Output = Fragment;

    fn button(&self, element: &Element) -> Fragment {
        let props = &element.properties;
        Fragment::new(format!(
            r#"<Button variant="{}">{}</Button>"#,
            props.text_or("variant", "default"),
            props.text_or("text", "Button"),
        ))
        .with_import(BUTTON_IMPORT)
    }

    fn input(&self, element: &Element) -> Fragment {
        let props = &element.properties;
        Fragment::new(format!(
            r#"<Input placeholder="{}" type="{}" />"#,
            props.text_or("placeholder", "Enter text..."),
            props.text_or("type", "text"),
        ))
        .with_import(INPUT_IMPORT)
    }

    fn title(&self, element: &Element, level: HeadingLevel) -> Fragment {
        let tag = level.tag();
        Fragment::new(format!(
            r#"<{tag} className="text-2xl font-bold">{}</{tag}>"#,
            element.properties.text_or("text", "Title"),
        ))
    }

    fn paragraph(&self, element: &Element) -> Fragment {
        Fragment::new(format!(
            r#"<p className="text-gray-600">{}</p>"#,
            element.properties.text_or("text", "Paragraph"),
        ))
    }

    fn card(&self, element: &Element) -> Fragment {
        let props = &element.properties;
        let markup = [
            "<Card>".to_string(),
            "  <CardHeader>".to_string(),
            format!(
                "    <CardTitle>{}</CardTitle>",
                props.text_or("title", "Card Title")
            ),
            "  </CardHeader>".to_string(),
            "  <CardContent>".to_string(),
            format!("    <p>{}</p>", props.text_or("content", "Card content")),
            "  </CardContent>".to_string(),
            "</Card>".to_string(),
        ]
        .join("\n");
        Fragment::new(markup).with_import(CARD_IMPORT)
    }

    fn fallback(&self, element: &Element) -> Fragment {
        let mut fragment = Fragment::new(format!(
            r#"<div className="p-4 border rounded">{}</div>"#,
            element.kind
        ));
        fragment.generic = true;
        fragment
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uiforge_ir::{Position, create_element, render_element};

    fn render(kind: &str, props: &[(&str, &str)]) -> Fragment {
        let mut element = create_element(kind, Position::zero());
        for (k, v) in props {
            element.properties.set(*k, *v);
        }
        render_element(&ReactRenderer, &element)
    }

    #[test]
    fn test_button_fragment() {
        let fragment = render("button", &[("text", "Save"), ("variant", "outline")]);
        assert_eq!(fragment.markup, r#"<Button variant="outline">Save</Button>"#);
        assert_eq!(fragment.imports, vec![BUTTON_IMPORT]);
    }

    #[test]
    fn test_button_empty_text_uses_default() {
        let fragment = render("button", &[("text", "")]);
        assert_eq!(fragment.markup, r#"<Button variant="default">Button</Button>"#);
    }

    #[test]
    fn test_input_fragment_defaults() {
        let fragment = render("input", &[]);
        assert_eq!(
            fragment.markup,
            r#"<Input placeholder="Enter text..." type="text" />"#
        );
        assert_eq!(fragment.imports, vec![INPUT_IMPORT]);
    }

    #[test]
    fn test_title_level() {
        let fragment = render("title", &[("text", "Pricing"), ("level", "h3")]);
        assert_eq!(
            fragment.markup,
            r#"<h3 className="text-2xl font-bold">Pricing</h3>"#
        );
        assert!(fragment.imports.is_empty());
    }

    #[test]
    fn test_title_invalid_level_falls_back_to_h1() {
        let fragment = render("title", &[("level", "h9")]);
        assert_eq!(fragment.markup, r#"<h1 className="text-2xl font-bold">Title</h1>"#);
    }

    #[test]
    fn test_paragraph_default_when_emptied() {
        let fragment = render("paragraph", &[("text", "")]);
        assert_eq!(fragment.markup, r#"<p className="text-gray-600">Paragraph</p>"#);
    }

    #[test]
    fn test_card_fragment() {
        let fragment = render("card", &[("content", "")]);
        assert_eq!(
            fragment.markup,
            "<Card>\n  <CardHeader>\n    <CardTitle>Card Title</CardTitle>\n  </CardHeader>\n  <CardContent>\n    <p>Card content</p>\n  </CardContent>\n</Card>"
        );
        assert_eq!(fragment.imports, vec![CARD_IMPORT]);
    }

    #[test]
    fn test_fallback_for_image_and_custom() {
        let image = render("image", &[]);
        assert_eq!(image.markup, r#"<div className="p-4 border rounded">image</div>"#);
        assert!(image.generic);

        let custom = render("widget123", &[]);
        assert!(custom.markup.contains("widget123"));
        assert!(custom.generic);
    }

    #[test]
    fn test_import_set_dedupes_in_order() {
        let mut set = ImportSet::seeded();
        assert!(set.insert(BUTTON_IMPORT));
        assert!(set.insert(CARD_IMPORT));
        assert!(!set.insert(BUTTON_IMPORT));
        assert!(!set.insert(REACT_IMPORT));

        let order: Vec<&str> = set.iter().collect();
        assert_eq!(order, vec![REACT_IMPORT, BUTTON_IMPORT, CARD_IMPORT]);
    }

    #[test]
    fn test_indented_prefixes_every_line() {
        let fragment = render("card", &[]);
        let indented = fragment.indented("  ");
        assert!(indented.lines().all(|line| line.starts_with("  ")));
        assert_eq!(indented.lines().count(), 8);
    }
}
