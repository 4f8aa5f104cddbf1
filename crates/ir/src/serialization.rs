//! Serialization and deserialization for canvas documents
//!
//! Two formats live here:
//!
//! - the **canvas data blob**: a compact JSON object that mirrors
//!   [`CanvasDocument`] exactly and is what the project store persists;
//! - the **document file** (`.uiforge`): the same document wrapped with a
//!   name and schema version, used by the command-line tool.

use crate::{CanvasDocument, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uiforge_core::{ForgeError, ForgeResult, ResultExt, Validatable};

// ============================================================================
// Constants
// ============================================================================

/// File extension for UI Forge document files
pub const DOCUMENT_EXTENSION: &str = "uiforge";

// ============================================================================
// Canvas Data Blob
// ============================================================================

/// Serialize a document to the persisted canvas data text
pub fn document_to_json(document: &CanvasDocument) -> ForgeResult<String> {
    serde_json::to_string(document).map_err(Into::into)
}

/// Parse persisted canvas data text
pub fn document_from_json(json: &str) -> ForgeResult<CanvasDocument> {
    serde_json::from_str(json).map_err(Into::into)
}

/// Parse persisted canvas data, substituting an empty document when it is unreadable
///
/// Malformed canvas data must never strand a user from their project, so
/// the parse failure is logged and swallowed here.
pub fn document_from_json_or_default(json: &str) -> CanvasDocument {
    match document_from_json(json) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!("Unreadable canvas data, starting from an empty document: {}", e);
            CanvasDocument::default()
        }
    }
}

/// Canvas data text of a fresh, empty document
pub fn empty_document_json() -> String {
    r#"{"elements":[],"viewport":{"zoom":1.0,"offset":{"x":0.0,"y":0.0}}}"#.to_string()
}

// ============================================================================
// Document File Wrapper
// ============================================================================

/// Wrapper for document files that includes version information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFile {
    /// Schema version for migration purposes
    pub schema_version: u32,

    /// Display name of the document
    #[serde(default)]
    pub name: String,

    /// The document data
    pub document: CanvasDocument,

    /// File format version
    #[serde(default)]
    pub format_version: u32,
}

impl DocumentFile {
    /// Wrap a document for saving
    pub fn new(name: impl Into<String>, document: CanvasDocument) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            name: name.into(),
            document,
            format_version: 1,
        }
    }

    /// Check if migration is needed
    pub fn needs_migration(&self) -> bool {
        self.schema_version < SCHEMA_VERSION
    }
}

/// Save a named document to a file, creating parent directories as needed
pub fn save_document(
    name: &str,
    document: &CanvasDocument,
    path: impl AsRef<Path>,
) -> ForgeResult<()> {
    let path = path.as_ref();
    let file = DocumentFile::new(name, document.clone());

    let json = serde_json::to_string_pretty(&file).map_err(|e| ForgeError::FileWrite {
        path: path.to_path_buf(),
        message: format!("Failed to serialize document: {}", e),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| ForgeError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    std::fs::write(path, json).map_err(|e| ForgeError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!("Saved document '{}' to {}", name, path.display());
    Ok(())
}

/// Load a document file
pub fn load_document(path: impl AsRef<Path>) -> ForgeResult<DocumentFile> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ForgeError::DocumentNotFound(path.to_path_buf()));
    }

    let json = std::fs::read_to_string(path)
        .with_context(format!("Failed to read '{}'", path.display()))?;

    load_document_from_string(&json).map_err(|e| match e {
        ForgeError::JsonSerialization(je) => {
            ForgeError::InvalidDocumentFormat(format!("{}: {}", path.display(), je))
        }
        other => other,
    })
}

/// Load a document file from a JSON string
///
/// A bare canvas data blob is accepted too and gets an empty name.
pub fn load_document_from_string(json: &str) -> ForgeResult<DocumentFile> {
    let mut file = match serde_json::from_str::<DocumentFile>(json) {
        Ok(file) => file,
        Err(_) => DocumentFile::new("", document_from_json(json)?),
    };

    if file.schema_version > SCHEMA_VERSION {
        return Err(ForgeError::SchemaVersionMismatch {
            expected: SCHEMA_VERSION,
            found: file.schema_version,
        });
    }
    if file.needs_migration() {
        file.schema_version = SCHEMA_VERSION;
    }

    file.document.validate()?;
    Ok(file)
}

/// Ensure a path has the document extension
pub fn ensure_extension(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    if path.extension().is_none_or(|e| e != DOCUMENT_EXTENSION) {
        let mut new_path = path.to_path_buf();
        new_path.set_extension(DOCUMENT_EXTENSION);
        new_path
    } else {
        path.to_path_buf()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::create_element;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use uiforge_core::Position;

    fn sample_document() -> CanvasDocument {
        let mut doc = CanvasDocument::new();
        let mut button = create_element("button", Position::new(50.0, 50.0));
        button.properties.set("text", "Save");
        button.properties.set("radius", 8);
        button.properties.set("visible", false);
        doc.elements.push(button);

        let mut container = create_element("container", Position::new(10.0, 300.0));
        container.children = Some(vec![create_element("widget123", Position::zero())]);
        doc.elements.push(container);

        doc.viewport.zoom = 1.5;
        doc.viewport.offset = Position::new(-20.0, 35.5);
        doc
    }

    #[test]
    fn test_round_trip_empty_document() {
        let doc = CanvasDocument::new();
        let json = document_to_json(&doc).unwrap();
        assert_eq!(document_from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_round_trip_populated_document() {
        let doc = sample_document();
        let json = document_to_json(&doc).unwrap();
        assert_eq!(document_from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_empty_document_json_matches_default() {
        let parsed = document_from_json(&empty_document_json()).unwrap();
        assert_eq!(parsed, CanvasDocument::default());
        assert_eq!(
            empty_document_json(),
            document_to_json(&CanvasDocument::default()).unwrap()
        );
    }

    #[test]
    fn test_blob_shape_mirrors_document() {
        let json = document_to_json(&sample_document()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["viewport"]["zoom"], 1.5);
        assert_eq!(value["viewport"]["offset"]["y"], 35.5);
        assert_eq!(value["elements"][0]["type"], "button");
        assert_eq!(value["elements"][0]["properties"]["text"], "Save");
        assert_eq!(value["elements"][1]["children"][0]["type"], "widget123");
    }

    #[test]
    fn test_malformed_blob_falls_back_to_empty() {
        assert_eq!(document_from_json_or_default("{not json"), CanvasDocument::default());
        assert_eq!(document_from_json_or_default(""), CanvasDocument::default());
        assert_eq!(
            document_from_json_or_default(r#"{"elements": 5}"#),
            CanvasDocument::default()
        );
    }

    #[test]
    fn test_save_and_load_document_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("landing.uiforge");

        let doc = sample_document();
        save_document("Landing", &doc, &path).unwrap();
        assert!(path.exists());

        let loaded = load_document(&path).unwrap();
        assert_eq!(loaded.name, "Landing");
        assert_eq!(loaded.schema_version, SCHEMA_VERSION);
        assert_eq!(loaded.document, doc);
    }

    #[test]
    fn test_load_bare_blob_as_file() {
        let json = document_to_json(&sample_document()).unwrap();
        let file = load_document_from_string(&json).unwrap();
        assert_eq!(file.name, "");
        assert_eq!(file.document.len(), 2);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_document("/nonexistent/path/doc.uiforge");
        match result {
            Err(ForgeError::DocumentNotFound(path)) => {
                assert!(path.to_string_lossy().contains("nonexistent"))
            }
            other => panic!("Expected DocumentNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_garbage_file_is_format_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.uiforge");
        std::fs::write(&path, "not a document").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, ForgeError::InvalidDocumentFormat(ref msg) if msg.contains("bad.uiforge")));
        assert!(!err.is_io());
    }

    #[test]
    fn test_unreadable_file_error_names_the_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("folder.uiforge");
        std::fs::create_dir(&path).unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, ForgeError::WithContext { .. }));
        assert!(err.to_string().starts_with("Failed to read '"));
        assert!(err.to_string().contains("folder.uiforge"));
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let json = r#"{"schema_version": 99, "name": "x", "document": {"elements": []}}"#;
        let err = load_document_from_string(json).unwrap_err();
        assert!(matches!(err, ForgeError::SchemaVersionMismatch { found: 99, .. }));
    }

    #[test]
    fn test_ensure_extension() {
        assert_eq!(ensure_extension("page"), PathBuf::from("page.uiforge"));
        assert_eq!(ensure_extension("page.uiforge"), PathBuf::from("page.uiforge"));
        assert_eq!(ensure_extension("page.json"), PathBuf::from("page.uiforge"));
    }
}
