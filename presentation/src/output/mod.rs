//! Output formatters

pub mod console;
pub mod formatter;
pub mod json;

use hyperconf_domain::OutputFormat;

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn formatter::OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(console::ConsoleFormatter),
        OutputFormat::Json => Box::new(json::JsonFormatter),
    }
}

/// Enable or disable colored console output globally
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}
