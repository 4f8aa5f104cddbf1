//! # File Operations
//!
//! Native dialogs for downloading generated code, exporting the full file
//! bundle, and moving canvases in and out of `.uiforge` document files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rfd::AsyncFileDialog;
use uiforge_codegen::{GeneratedExport, Generator, GeneratorConfig};
use uiforge_ir::serialization::{DOCUMENT_EXTENSION, ensure_extension};
use uiforge_ir::{CanvasDocument, DocumentFile, Element, load_document, save_document};

/// Display name for document file filters
pub const DOCUMENT_TYPE_NAME: &str = "UI Forge Document";

// ============================================================================
// Dialogs
// ============================================================================

/// Ask where to save one generated file
pub async fn show_save_code_dialog(default_name: &str) -> Option<PathBuf> {
    let extension = Path::new(default_name)
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut dialog = AsyncFileDialog::new()
        .set_title("Download Code")
        .set_file_name(default_name);
    if !extension.is_empty() {
        dialog = dialog.add_filter(extension.to_uppercase(), &[extension.as_str()]);
    }

    let file = dialog.save_file().await?;
    Some(file.path().to_path_buf())
}

/// Ask for a folder to export the generated bundle into
pub async fn show_export_directory_dialog() -> Option<PathBuf> {
    let folder = AsyncFileDialog::new()
        .set_title("Select Export Directory")
        .pick_folder()
        .await?;

    Some(folder.path().to_path_buf())
}

/// Ask for a document file to import
pub async fn show_open_document_dialog() -> Option<PathBuf> {
    let file = AsyncFileDialog::new()
        .set_title("Import Canvas")
        .add_filter(DOCUMENT_TYPE_NAME, &[DOCUMENT_EXTENSION])
        .add_filter("All Files", &["*"])
        .pick_file()
        .await?;

    Some(file.path().to_path_buf())
}

/// Ask where to write a document file
pub async fn show_save_document_dialog(default_name: &str) -> Option<PathBuf> {
    let file = AsyncFileDialog::new()
        .set_title("Export Canvas")
        .add_filter(DOCUMENT_TYPE_NAME, &[DOCUMENT_EXTENSION])
        .set_file_name(format!("{}.{}", default_name, DOCUMENT_EXTENSION))
        .save_file()
        .await?;

    Some(ensure_extension(file.path()))
}

// ============================================================================
// Operations
// ============================================================================

/// Write generated source to `path`
pub async fn write_code(path: &Path, code: &str) -> Result<()> {
    tokio::fs::write(path, code)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Offer `code` for download. `Ok(None)` when the dialog was cancelled.
pub async fn download_code(code: String, default_name: &str) -> Result<Option<PathBuf>> {
    let Some(path) = show_save_code_dialog(default_name).await else {
        return Ok(None);
    };
    write_code(&path, &code).await?;
    tracing::info!(path = %path.display(), "Downloaded generated code");
    Ok(Some(path))
}

/// Generate the full bundle for `elements` and write it under `dir`
pub fn export_bundle(elements: &[Element], dir: &Path) -> Result<GeneratedExport> {
    let config = GeneratorConfig::new().with_output_dir(dir).allow_overwrite();
    let generator = Generator::new(config);
    let export = generator
        .export_and_write(elements)
        .with_context(|| format!("Export to {} failed", dir.display()))?;
    tracing::info!(
        dir = %dir.display(),
        files = export.file_count(),
        "Exported generated code"
    );
    Ok(export)
}

/// Pick a folder and export into it. `Ok(None)` when cancelled.
pub async fn export_bundle_with_dialog(
    elements: Vec<Element>,
) -> Result<Option<(PathBuf, GeneratedExport)>> {
    let Some(dir) = show_export_directory_dialog().await else {
        return Ok(None);
    };
    let export = export_bundle(&elements, &dir)?;
    Ok(Some((dir, export)))
}

/// Pick and load a document file. `Ok(None)` when cancelled.
pub async fn import_document() -> Result<Option<DocumentFile>> {
    let Some(path) = show_open_document_dialog().await else {
        return Ok(None);
    };
    let file =
        load_document(&path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(Some(file))
}

/// Save `document` to a picked document file. `Ok(None)` when cancelled.
pub async fn export_document(name: String, document: CanvasDocument) -> Result<Option<PathBuf>> {
    let Some(path) = show_save_document_dialog(&name).await else {
        return Ok(None);
    };
    save_document(&name, &document, &path)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use uiforge_core::Position;
    use uiforge_ir::create_element;

    #[tokio::test]
    async fn test_write_code() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Component.tsx");
        write_code(&path, "export default function Component() {}")
            .await
            .unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("Component"));
    }

    #[test]
    fn test_export_bundle_writes_all_files() {
        let dir = TempDir::new().unwrap();
        let elements = vec![create_element("button", Position::new(10.0, 10.0))];

        let export = export_bundle(&elements, dir.path()).unwrap();
        assert_eq!(export.file_count(), 3);
        assert!(dir.path().join("Component.tsx").exists());
        assert!(dir.path().join("index.html").exists());

        // re-exporting into the same folder replaces the files
        assert!(export_bundle(&elements, dir.path()).is_ok());
    }
}
