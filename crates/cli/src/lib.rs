//! # UI Forge CLI
//!
//! Command-line interface for UI Forge.
//!
//! Works on `.uiforge` document files without the desktop editor, and on
//! projects in a store snapshot file.
//!
//! ## Commands
//!
//! - `new` - Create an empty document
//! - `add` / `remove` - Place or delete an element
//! - `generate` - Export React + Tailwind code
//! - `info` - Describe a document
//! - `types` - List the palette's element types
//! - `project` - List, push, pull, save and delete stored projects
//!

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Log filter for a `-v` count; `RUST_LOG` takes precedence when set
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(9), "trace");
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
