//! Domain layer for hyperconf
//!
//! This crate contains the value objects of typed configuration: parameter
//! names, shapes, tagged values, declarations, override mappings and
//! resolved snapshots. It has no dependencies on I/O or presentation.
//!
//! # Core Concepts
//!
//! - **Declaration**: a named slot with a default and a required [`ParamShape`]
//! - **Override**: a caller-supplied [`ParamValue`] replacing a default
//! - **Snapshot**: the resolved values of one pass, replayable as overrides
//!
//! Values are never coerced across variants: an integer `1` or the text
//! `"true"` is not a boolean.

pub mod config;
pub mod core;
pub mod param;
pub mod resolution;

// Re-export commonly used types
pub use config::{OutputFormat, UnknownOverridePolicy};
pub use core::error::ParamError;
pub use param::{
    ParamName, ParamShape, ParamType, ParamValue, ParameterDeclaration, ScalarParam,
};
pub use resolution::{OverrideMapping, ResolvedParam, ResolvedSnapshot, ValueSource};
