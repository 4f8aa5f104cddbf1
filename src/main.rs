//! UI Forge
//!
//! Visual drag-and-drop UI prototyping with React + Tailwind export.
//!
//! This is the main entry point for the Dioxus desktop application.

use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();

    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   {:<56}║", format!("UI Forge v{}", uiforge_ui::VERSION));
    println!("║   Visual UI prototyping with React + Tailwind export      ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    uiforge_ui::launch();
}
