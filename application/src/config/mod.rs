//! Application-level configuration.
//!
//! - [`ResolveOptions`]: how a resolution pass treats its overrides

mod resolve_options;

pub use resolve_options::ResolveOptions;
