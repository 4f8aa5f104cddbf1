//! Shared element render dispatch
//!
//! Live canvas rendering and code generation walk the same kind vocabulary.
//! Both implement [`ElementRenderer`] and go through [`render_element`], so
//! a kind added here shows up in both places or in neither.

use crate::element::Element;
use crate::kind::ElementKind;

// ============================================================================
// Heading Level
// ============================================================================

/// Heading level of a title element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingLevel {
    #[default]
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// All levels, smallest number first
    pub fn all() -> &'static [HeadingLevel] {
        &[
            HeadingLevel::H1,
            HeadingLevel::H2,
            HeadingLevel::H3,
            HeadingLevel::H4,
            HeadingLevel::H5,
            HeadingLevel::H6,
        ]
    }

    /// Parse `h1`..`h6`; anything else is `H1`
    pub fn parse(raw: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|level| level.tag() == raw)
            .unwrap_or_default()
    }

    /// The markup tag name
    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }

    /// Read the level of a title element
    pub fn of(element: &Element) -> Self {
        Self::parse(&element.properties.text_or("level", "h1"))
    }
}

// ============================================================================
// Renderer Trait
// ============================================================================

/// One rendering of the element vocabulary
///
/// Kinds without a dedicated method fall through to [`ElementRenderer::fallback`],
/// which must never fail.
pub trait ElementRenderer {
    /// What a single element renders to
    type Output;

    fn button(&self, element: &Element) -> Self::Output;

    fn input(&self, element: &Element) -> Self::Output;

    fn title(&self, element: &Element, level: HeadingLevel) -> Self::Output;

    fn paragraph(&self, element: &Element) -> Self::Output;

    fn card(&self, element: &Element) -> Self::Output;

    fn image(&self, element: &Element) -> Self::Output {
        self.fallback(element)
    }

    fn container(&self, element: &Element) -> Self::Output {
        self.fallback(element)
    }

    /// Any kind without its own template, custom kinds included
    fn fallback(&self, element: &Element) -> Self::Output;
}

/// Dispatch one element to the matching renderer method
pub fn render_element<R: ElementRenderer + ?Sized>(renderer: &R, element: &Element) -> R::Output {
    match element.kind {
        ElementKind::Button => renderer.button(element),
        ElementKind::Input => renderer.input(element),
        ElementKind::Title => renderer.title(element, HeadingLevel::of(element)),
        ElementKind::Paragraph => renderer.paragraph(element),
        ElementKind::Card => renderer.card(element),
        ElementKind::Image => renderer.image(element),
        ElementKind::Container => renderer.container(element),
        _ => renderer.fallback(element),
    }
}

/// Render every element in order
pub fn render_all<R: ElementRenderer + ?Sized>(renderer: &R, elements: &[Element]) -> Vec<R::Output> {
    elements
        .iter()
        .map(|element| render_element(renderer, element))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::create_element;
    use uiforge_core::Position;

    /// Names the method each element was routed to
    struct Probe;

    impl ElementRenderer for Probe {
        type Output = String;

        fn button(&self, _: &Element) -> String {
            "button".into()
        }

        fn input(&self, _: &Element) -> String {
            "input".into()
        }

        fn title(&self, _: &Element, level: HeadingLevel) -> String {
            format!("title:{}", level.tag())
        }

        fn paragraph(&self, _: &Element) -> String {
            "paragraph".into()
        }

        fn card(&self, _: &Element) -> String {
            "card".into()
        }

        fn fallback(&self, element: &Element) -> String {
            format!("fallback:{}", element.kind)
        }
    }

    #[test]
    fn test_dispatch_by_kind() {
        let elements: Vec<Element> = ["button", "title", "image", "container", "widget123"]
            .into_iter()
            .map(|kind| create_element(kind, Position::zero()))
            .collect();

        assert_eq!(
            render_all(&Probe, &elements),
            vec![
                "button",
                "title:h1",
                "fallback:image",
                "fallback:container",
                "fallback:widget123",
            ]
        );
    }

    #[test]
    fn test_heading_level_parse() {
        assert_eq!(HeadingLevel::parse("h3"), HeadingLevel::H3);
        assert_eq!(HeadingLevel::parse("h9"), HeadingLevel::H1);
        assert_eq!(HeadingLevel::parse(""), HeadingLevel::H1);
    }

    #[test]
    fn test_heading_level_of_title() {
        let mut title = create_element("title", Position::zero());
        title.properties.set("level", "h4");
        assert_eq!(HeadingLevel::of(&title), HeadingLevel::H4);
    }
}
