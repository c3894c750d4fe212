//! Presentation layer for hyperconf
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{CheckArgs, Cli, Command, OutputFormat, ResolveArgs};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::json::JsonFormatter;
pub use output::{formatter_for, set_color_enabled};
