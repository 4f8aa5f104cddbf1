//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uiforge_core::ProjectId;

#[derive(Parser, Debug)]
#[command(
    name = "uiforge-cli",
    version,
    about = "Create, edit and export UI Forge canvas documents"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Store snapshot file used by the `project` commands
    #[arg(long, env = "UIFORGE_DATA", default_value = "uiforge-data.json", global = true)]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty document file
    New(NewArgs),
    /// Add an element to a document
    Add(AddArgs),
    /// Remove an element from a document
    Remove(RemoveArgs),
    /// Generate React + Tailwind code from a document
    Generate(GenerateArgs),
    /// Show what a document contains
    Info(InfoArgs),
    /// List the element types offered by the palette
    Types,
    /// Work with projects in the store snapshot
    Project(ProjectCommand),
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Document path; the `.uiforge` extension is added when missing
    pub path: PathBuf,

    /// Display name, defaults to the file stem
    #[arg(long)]
    pub name: Option<String>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Document to edit
    pub file: PathBuf,

    /// Element type, e.g. button, title, card
    pub kind: String,

    #[arg(long, default_value_t = 50.0)]
    pub x: f32,

    #[arg(long, default_value_t = 50.0)]
    pub y: f32,

    /// Property override as key=value; repeatable
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub properties: Vec<String>,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Document to edit
    pub file: PathBuf,

    /// Element id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Document to export
    pub file: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "./generated")]
    pub output: PathBuf,

    /// Component function name
    #[arg(long, default_value = "Component")]
    pub name: String,

    /// Skip the stylesheet scaffold
    #[arg(long)]
    pub no_css: bool,

    /// Skip the HTML host page
    #[arg(long)]
    pub no_html: bool,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,

    /// Print the component source instead of writing files
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Document to inspect
    pub file: PathBuf,

    /// Print a JSON report
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ProjectCommand {
    /// Email of the acting user
    #[arg(long, global = true, default_value = "demo@example.com")]
    pub email: String,

    #[command(subcommand)]
    pub command: ProjectSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectSubcommand {
    /// List the user's projects
    List,
    /// Create a project from a document file
    Push {
        file: PathBuf,
        /// Project name, defaults to the document name
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Write a project's canvas to a document file
    Pull { id: ProjectId, out: PathBuf },
    /// Replace a project's canvas with a document file
    Save { id: ProjectId, file: PathBuf },
    /// Delete a project
    Delete { id: ProjectId },
}
