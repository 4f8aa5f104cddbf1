//! # UI Forge Codegen
//!
//! Code generation for UI Forge.
//!
//! This crate turns the element list of a canvas document into exportable
//! interface code. Generation is a pure function of the elements: calling it
//! twice on the same input yields byte-identical text.
//!
//! ## Features
//!
//! - **Component Generation**: a React + Tailwind component, one fragment per element
//! - **Import Tracking**: deduplicated import declarations in first-use order
//! - **Companion Files**: Tailwind stylesheet and HTML host page scaffolds
//!

// ============================================================================
// Modules
// ============================================================================

pub mod generator;
pub mod react;
pub mod scaffold;

// ============================================================================
// Re-exports
// ============================================================================

pub use generator::{GenerationSummary, Generator, generate};
pub use react::{Fragment, ImportSet, ReactRenderer};
pub use scaffold::{generate_css, generate_html};

use std::path::{Path, PathBuf};
use uiforge_core::{ForgeError, ForgeResult};

/// File name offered when the component is downloaded
pub const EXPORT_FILE_NAME: &str = "Component.tsx";

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Configuration for the code generator
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Name of the exported component function
    pub component_name: String,

    /// Title of the generated HTML host page
    pub page_title: String,

    /// Output directory for written exports
    pub output_dir: PathBuf,

    /// Whether to include the stylesheet scaffold in exports
    pub include_css: bool,

    /// Whether to include the HTML host page in exports
    pub include_html: bool,

    /// Whether to overwrite existing files
    pub overwrite: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            component_name: "Component".to_string(),
            page_title: "Generated UI Component".to_string(),
            output_dir: PathBuf::from("./generated"),
            include_css: true,
            include_html: true,
            overwrite: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exported component name
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self
    }

    /// Set the HTML page title
    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = title.into();
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Leave the stylesheet out of exports
    pub fn without_css(mut self) -> Self {
        self.include_css = false;
        self
    }

    /// Leave the HTML page out of exports
    pub fn without_html(mut self) -> Self {
        self.include_html = false;
        self
    }

    /// Allow overwriting existing files
    pub fn allow_overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }

    /// File name of the component source
    pub fn component_file_name(&self) -> String {
        format!("{}.tsx", self.component_name)
    }
}

// ============================================================================
// GeneratedFile
// ============================================================================

/// Represents a single generated file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Relative path from output directory
    pub path: PathBuf,

    /// File content
    pub content: String,

    /// File type for categorization
    pub file_type: FileType,
}

impl GeneratedFile {
    /// Create a new generated file
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, file_type: FileType) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            file_type,
        }
    }

    /// Create a component source file
    pub fn tsx(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileType::Tsx)
    }

    /// Create a stylesheet
    pub fn css(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileType::Css)
    }

    /// Create an HTML page
    pub fn html(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileType::Html)
    }

    /// Get the file extension
    pub fn extension(&self) -> &str {
        self.file_type.extension()
    }
}

/// Type of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Tsx,
    Css,
    Html,
}

impl FileType {
    /// Get the file extension for this type
    pub fn extension(&self) -> &str {
        match self {
            FileType::Tsx => "tsx",
            FileType::Css => "css",
            FileType::Html => "html",
        }
    }

    /// Label used on code viewer tabs
    pub fn label(&self) -> &str {
        match self {
            FileType::Tsx => "React",
            FileType::Css => "CSS",
            FileType::Html => "HTML",
        }
    }
}

// ============================================================================
// GeneratedExport
// ============================================================================

/// Collection of files produced for one export
#[derive(Debug, Clone, Default)]
pub struct GeneratedExport {
    /// Component name
    pub name: String,

    /// All generated files
    pub files: Vec<GeneratedFile>,

    /// Warnings generated during code generation
    pub warnings: Vec<String>,
}

impl GeneratedExport {
    /// Create a new, empty export
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add a file to the export
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Get the number of files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get the first file of a type
    pub fn file(&self, file_type: FileType) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.file_type == file_type)
    }

    /// Write all files to disk
    pub fn write_to_disk(&self, base_dir: impl AsRef<Path>, overwrite: bool) -> ForgeResult<()> {
        let base_dir = base_dir.as_ref();

        for file in &self.files {
            let full_path = base_dir.join(&file.path);
            if full_path.exists() && !overwrite {
                return Err(ForgeError::OutputExists(full_path));
            }

            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| ForgeError::DirectoryCreate {
                    path: parent.to_path_buf(),
                    message: e.to_string(),
                })?;
            }

            std::fs::write(&full_path, &file.content).map_err(|e| ForgeError::FileWrite {
                path: full_path.clone(),
                message: e.to_string(),
            })?;
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
