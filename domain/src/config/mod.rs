//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to tool configuration that are
//! used across multiple layers.

mod output_format;
mod unknown_override;

pub use output_format::OutputFormat;
pub use unknown_override::UnknownOverridePolicy;
