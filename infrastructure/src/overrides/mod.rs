//! Override sources: where replacement values come from.

mod flatten;
mod sources;

pub use flatten::{flatten_document, to_param_value};
pub use sources::{EnvOverrides, FileOverrides, parse_assignments};
