//! Command handlers

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use serde::Serialize;
use uiforge_codegen::{GenerationSummary, Generator, GeneratorConfig};
use uiforge_core::{Position, PropertyValue};
use uiforge_editor::{CanvasEngine, ElementUpdate, Session};
use uiforge_ir::serialization::ensure_extension;
use uiforge_ir::{
    CanvasDocument, ElementId, ElementKind, Properties, load_document, palette, save_document,
};
use uiforge_store::{MemoryStore, ProjectStore, Store, StoreConfig};

use crate::args::{
    AddArgs, GenerateArgs, InfoArgs, NewArgs, ProjectCommand, ProjectSubcommand, RemoveArgs,
};

// ============================================================================
// Property Parsing
// ============================================================================

/// Parse a `key=value` override.
///
/// `true` / `false` become booleans and anything that parses as a number
/// becomes a number; everything else is kept as text.
pub fn parse_property(input: &str) -> Result<(String, PropertyValue)> {
    let Some((key, raw)) = input.split_once('=') else {
        bail!("expected KEY=VALUE, got '{}'", input);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("property name is empty in '{}'", input);
    }

    let value = match raw {
        "true" => PropertyValue::Bool(true),
        "false" => PropertyValue::Bool(false),
        _ => match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => PropertyValue::Number(n),
            _ => PropertyValue::Text(raw.to_string()),
        },
    };
    Ok((key.to_string(), value))
}

fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ============================================================================
// Document Commands
// ============================================================================

pub fn new_document(args: &NewArgs) -> Result<()> {
    let path = ensure_extension(&args.path);
    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let name = args.name.clone().unwrap_or_else(|| document_name(&path));
    save_document(&name, &CanvasDocument::new(), &path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    println!("{} {} ({})", "Created".green().bold(), name, path.display());
    Ok(())
}

pub fn add_element(args: &AddArgs) -> Result<()> {
    let file = load_document(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    let kind = ElementKind::from(args.kind.as_str());
    if kind.is_custom() {
        eprintln!(
            "{} '{}' is not a built-in type; it will render as a placeholder",
            "warning:".yellow().bold(),
            args.kind
        );
    }

    let patch = args
        .properties
        .iter()
        .map(|p| parse_property(p))
        .collect::<Result<Properties>>()?;

    let mut engine = CanvasEngine::from_document(file.document);
    let id = engine.add_element_at(kind, Position::new(args.x, args.y));
    if !patch.is_empty() {
        engine.update_element(&id, ElementUpdate::properties(patch));
    }

    save_document(&file.name, engine.document(), &args.file)
        .with_context(|| format!("Failed to save {}", args.file.display()))?;

    println!("{} {}", "Added".green().bold(), id);
    Ok(())
}

pub fn remove_element(args: &RemoveArgs) -> Result<()> {
    let file = load_document(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    let mut engine = CanvasEngine::from_document(file.document);
    if !engine.delete_element(&ElementId::from(args.id.as_str())) {
        bail!("No element with id '{}'", args.id);
    }

    save_document(&file.name, engine.document(), &args.file)
        .with_context(|| format!("Failed to save {}", args.file.display()))?;

    println!("{} {}", "Removed".green().bold(), args.id);
    Ok(())
}

pub fn generate(args: &GenerateArgs) -> Result<()> {
    let file = load_document(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let elements = &file.document.elements;

    let mut config = GeneratorConfig::new()
        .with_component_name(&args.name)
        .with_output_dir(&args.output);
    if args.no_css {
        config = config.without_css();
    }
    if args.no_html {
        config = config.without_html();
    }
    if args.force {
        config = config.allow_overwrite();
    }
    let generator = Generator::new(config);

    if args.stdout {
        println!("{}", generator.component(elements));
        return Ok(());
    }

    let export = generator
        .export_and_write(elements)
        .context("Code generation failed")?;

    for warning in &export.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
    for file in &export.files {
        println!(
            "{} {}",
            "Wrote".green().bold(),
            args.output.join(&file.path).display()
        );
    }
    println!();
    println!("{}", GenerationSummary::new(generator.config(), elements));
    Ok(())
}

#[derive(Debug, Serialize)]
struct InfoReport<'a> {
    name: &'a str,
    schema_version: u32,
    element_count: usize,
    zoom: f32,
    elements: Vec<ElementLine<'a>>,
}

#[derive(Debug, Serialize)]
struct ElementLine<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

pub fn info(args: &InfoArgs) -> Result<()> {
    let file = load_document(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let document = &file.document;

    let report = InfoReport {
        name: &file.name,
        schema_version: file.schema_version,
        element_count: document.len(),
        zoom: document.viewport.zoom,
        elements: document
            .elements
            .iter()
            .map(|e| ElementLine {
                id: e.id.as_str(),
                kind: e.kind.as_str(),
                x: e.position.x,
                y: e.position.y,
                width: e.size.width,
                height: e.size.height,
            })
            .collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.name.bold());
    println!("  Schema:   v{}", report.schema_version);
    println!("  Zoom:     {:.0}%", report.zoom * 100.0);
    println!("  Elements: {}", report.element_count);
    for line in &report.elements {
        println!(
            "    {} {:<10} at ({}, {}) size {}x{}",
            line.id.dimmed(),
            line.kind.cyan(),
            line.x,
            line.y,
            line.width,
            line.height
        );
    }
    Ok(())
}

pub fn types() {
    for category in palette() {
        println!("{}", category.title.bold());
        for kind in &category.kinds {
            println!("  {:<10} {}", kind.as_str().cyan(), kind.display_name());
        }
    }
}

// ============================================================================
// Project Commands
// ============================================================================

pub async fn project(data: &Path, cmd: &ProjectCommand) -> Result<()> {
    let store = MemoryStore::open(StoreConfig::new().with_snapshot_path(data))
        .await
        .with_context(|| format!("Failed to open store {}", data.display()))?;
    let store: Arc<dyn Store> = Arc::new(store);
    let name = cmd.email.split('@').next().unwrap_or_default().to_string();
    let mut session = Session::sign_in(Arc::clone(&store), &cmd.email, &name).await?;

    match &cmd.command {
        ProjectSubcommand::List => {
            let projects = session.projects().await?;
            if projects.is_empty() {
                println!("No projects for {}", cmd.email);
            }
            for p in projects {
                let visibility = if p.is_public { "public" } else { "private" };
                println!(
                    "{:>4}  {}  {}  {}",
                    p.id,
                    p.name.bold(),
                    visibility.dimmed(),
                    p.updated_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        ProjectSubcommand::Push {
            file,
            name,
            description,
        } => {
            let doc = load_document(file)
                .with_context(|| format!("Failed to open {}", file.display()))?;
            let name = name.clone().unwrap_or_else(|| doc.name.clone());
            let project = session.create_project(name, description.clone()).await?;
            session.open_project(project.id).await?;
            session.engine_mut().load_document(doc.document);
            session.save().await?;
            println!("{} project {} ({})", "Created".green().bold(), project.id, project.name);
        }
        ProjectSubcommand::Pull { id, out } => {
            let project = session.open_project(*id).await?.clone();
            let out = ensure_extension(out);
            save_document(&project.name, session.engine().document(), &out)?;
            println!("{} {}", "Wrote".green().bold(), out.display());
        }
        ProjectSubcommand::Save { id, file } => {
            let doc = load_document(file)
                .with_context(|| format!("Failed to open {}", file.display()))?;
            let saved = store
                .save_project(*id, session.user().id, serde_json::to_string(&doc.document)?)
                .await?;
            println!("{} project {}", "Saved".green().bold(), saved.id);
        }
        ProjectSubcommand::Delete { id } => {
            if !store.delete_project(*id, session.user().id).await? {
                bail!("Project {} not found or access denied", id);
            }
            println!("{} project {}", "Deleted".green().bold(), id);
        }
    }
    Ok(())
}
