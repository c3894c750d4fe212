//! Configuration definitions: the scope declarations are made against,
//! code-defined configurations, and data-defined manifests.

pub mod hyperconfig;
pub mod macros;
pub mod manifest;
pub mod scope;
