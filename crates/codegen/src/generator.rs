//! # Code Generator
//!
//! The `Generator` turns an ordered element list into a React component.
//!
//! ## Pipeline
//!
//! ```text
//! &[Element]
//!     │
//!     ├──► render_element(ReactRenderer, e)  → Fragment { imports, markup }
//!     │
//!     ├──► ImportSet (seeded, deduplicated, first-seen order)
//!     │
//!     ▼
//! imports + blank line + export default function <Name>() { ... }
//! ```
//!
//! Generation is pure: the same elements always produce byte-identical text.

use uiforge_core::ForgeResult;
use uiforge_ir::{Element, render_element};

use crate::react::{Fragment, ImportSet, ReactRenderer};
use crate::scaffold;
use crate::{GeneratedExport, GeneratedFile, GeneratorConfig};

/// Indentation applied to every fragment line inside the wrapper `div`
const FRAGMENT_INDENT: &str = "      ";

// ============================================================================
// Generator
// ============================================================================

/// Code generator configured with a [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Create a new generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    // ====================================================================
    // Generation
    // ====================================================================

    /// Generate the component source for `elements`.
    pub fn component(&self, elements: &[Element]) -> String {
        let renderer = ReactRenderer;
        let mut imports = ImportSet::seeded();
        let mut body = Vec::with_capacity(elements.len());

        for element in elements {
            let fragment: Fragment = render_element(&renderer, element);
            for import in &fragment.imports {
                imports.insert(import);
            }
            body.push(fragment.indented(FRAGMENT_INDENT));
        }

        let mut out = String::new();
        out.push_str(&imports.render());
        out.push_str("\n\n");
        out.push_str(&format!(
            "export default function {}() {{\n",
            self.config.component_name
        ));
        out.push_str("  return (\n");
        out.push_str("    <div className=\"p-4 space-y-4\">\n");
        for fragment in &body {
            out.push_str(fragment);
            out.push('\n');
        }
        out.push_str("    </div>\n");
        out.push_str("  );\n");
        out.push('}');
        out
    }

    /// Generate the full export bundle: component, stylesheet and host page.
    ///
    /// Elements without a dedicated template are reported as warnings; they
    /// are still emitted as generic blocks.
    pub fn export(&self, elements: &[Element]) -> GeneratedExport {
        let mut export = GeneratedExport::new(&self.config.component_name);

        export.add_file(GeneratedFile::tsx(
            self.config.component_file_name(),
            self.component(elements),
        ));
        if self.config.include_css {
            export.add_file(GeneratedFile::css(
                format!("{}.css", self.config.component_name),
                scaffold::generate_css(),
            ));
        }
        if self.config.include_html {
            export.add_file(GeneratedFile::html(
                "index.html",
                scaffold::generate_html(&self.config),
            ));
        }

        let renderer = ReactRenderer;
        for element in elements {
            if render_element(&renderer, element).generic {
                export.add_warning(format!(
                    "Element '{}' of type '{}' has no template and was exported as a plain block",
                    element.id, element.kind
                ));
            }
        }

        tracing::info!(
            component = %self.config.component_name,
            elements = elements.len(),
            files = export.file_count(),
            "generated export",
        );
        export
    }

    /// Generate the export bundle and write it to the configured output directory.
    pub fn export_and_write(&self, elements: &[Element]) -> ForgeResult<GeneratedExport> {
        let export = self.export(elements);
        export.write_to_disk(&self.config.output_dir, self.config.overwrite)?;
        tracing::info!(
            output_dir = %self.config.output_dir.display(),
            files = export.file_count(),
            "files written to disk",
        );
        Ok(export)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// Standalone convenience function
// ============================================================================

/// Generate the component source for `elements` with default configuration.
///
/// This is a shorthand for `Generator::with_defaults().component(elements)`.
pub fn generate(elements: &[Element]) -> String {
    Generator::with_defaults().component(elements)
}

// ============================================================================
// GenerationSummary
// ============================================================================

/// A short report of what a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Component name.
    pub component_name: String,
    /// Number of elements rendered.
    pub element_count: usize,
    /// Distinct import declarations emitted.
    pub import_count: usize,
    /// Elements that fell back to a generic block.
    pub generic_count: usize,
    /// Total number of files in the bundle.
    pub total_files: usize,
}

impl GenerationSummary {
    /// Build a summary for `elements` under `config`.
    pub fn new(config: &GeneratorConfig, elements: &[Element]) -> Self {
        let renderer = ReactRenderer;
        let mut imports = ImportSet::seeded();
        let mut generic_count = 0;
        for element in elements {
            let fragment = render_element(&renderer, element);
            for import in &fragment.imports {
                imports.insert(import);
            }
            if fragment.generic {
                generic_count += 1;
            }
        }

        Self {
            component_name: config.component_name.clone(),
            element_count: elements.len(),
            import_count: imports.len(),
            generic_count,
            total_files: 1 + usize::from(config.include_css) + usize::from(config.include_html),
        }
    }
}

impl std::fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Component:  {}", self.component_name)?;
        writeln!(f, "Elements:   {}", self.element_count)?;
        writeln!(f, "Imports:    {}", self.import_count)?;
        writeln!(f, "Generic:    {}", self.generic_count)?;
        write!(f, "Files:      {}", self.total_files)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::react::{BUTTON_IMPORT, CARD_IMPORT, REACT_IMPORT};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use uiforge_ir::{Position, create_element};

    fn elements(kinds: &[&str]) -> Vec<Element> {
        kinds
            .iter()
            .map(|kind| create_element(*kind, Position::new(50.0, 50.0)))
            .collect()
    }

    #[test]
    fn test_empty_document_output() {
        let expected = r#"import React from "react";

export default function Component() {
  return (
    <div className="p-4 space-y-4">
    </div>
  );
}"#;
        assert_eq!(generate(&[]), expected);
    }

    #[test]
    fn test_full_output_layout() {
        let code = generate(&elements(&["button", "card"]));
        let expected = r#"import React from "react";
import { Button } from "@/components/ui/button";
import { Card, CardContent, CardHeader, CardTitle } from "@/components/ui/card";

export default function Component() {
  return (
    <div className="p-4 space-y-4">
      <Button variant="default">Button</Button>
      <Card>
        <CardHeader>
          <CardTitle>Card Title</CardTitle>
        </CardHeader>
        <CardContent>
          <p>Card content goes here.</p>
        </CardContent>
      </Card>
    </div>
  );
}"#;
        assert_eq!(code, expected);
    }

    #[test]
    fn test_single_button_import_for_many_buttons() {
        let code = generate(&elements(&["button", "button", "button"]));
        assert_eq!(code.matches(BUTTON_IMPORT).count(), 1);
        assert_eq!(code.matches(REACT_IMPORT).count(), 1);
        assert_eq!(code.matches(">Button</Button>").count(), 3);
    }

    #[test]
    fn test_imports_follow_first_use_order() {
        let code = generate(&elements(&["card", "button", "card"]));
        let card_at = code.find(CARD_IMPORT).unwrap();
        let button_at = code.find(BUTTON_IMPORT).unwrap();
        assert!(card_at < button_at);
    }

    #[test]
    fn test_unknown_kind_is_emitted_as_block() {
        let code = generate(&elements(&["widget123"]));
        assert!(code.contains(r#"<div className="p-4 border rounded">widget123</div>"#));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let els = elements(&["title", "paragraph", "input", "button", "card", "grid"]);
        assert_eq!(generate(&els), generate(&els));
    }

    #[test]
    fn test_custom_component_name() {
        let generator = Generator::new(GeneratorConfig::new().with_component_name("Hero"));
        let code = generator.component(&[]);
        assert!(code.contains("export default function Hero() {"));
        assert_eq!(generator.config().component_file_name(), "Hero.tsx");
    }

    #[test]
    fn test_export_bundle_and_warnings() {
        let export = Generator::with_defaults().export(&elements(&["button", "hero"]));
        let names: Vec<String> = export
            .files
            .iter()
            .map(|f| f.path.display().to_string())
            .collect();
        assert_eq!(names, vec!["Component.tsx", "Component.css", "index.html"]);
        assert_eq!(export.warnings.len(), 1);
        assert!(export.warnings[0].contains("'hero'"));
    }

    #[test]
    fn test_export_without_companions() {
        let config = GeneratorConfig::new().without_css().without_html();
        let export = Generator::new(config).export(&[]);
        assert_eq!(export.file_count(), 1);
    }

    #[test]
    fn test_export_and_write() {
        let temp_dir = TempDir::new().unwrap();
        let config = GeneratorConfig::new().with_output_dir(temp_dir.path());
        let generator = Generator::new(config);

        generator.export_and_write(&elements(&["title"])).unwrap();
        let written = std::fs::read_to_string(temp_dir.path().join("Component.tsx")).unwrap();
        assert!(written.contains(r#"<h1 className="text-2xl font-bold">Title</h1>"#));

        // second write refuses to clobber without overwrite
        assert!(generator.export_and_write(&[]).is_err());
    }

    #[test]
    fn test_summary() {
        let config = GeneratorConfig::default();
        let summary = GenerationSummary::new(&config, &elements(&["button", "button", "grid"]));
        assert_eq!(summary.element_count, 3);
        assert_eq!(summary.import_count, 2);
        assert_eq!(summary.generic_count, 1);
        assert_eq!(summary.total_files, 3);
        assert!(summary.to_string().contains("Component"));
    }
}
