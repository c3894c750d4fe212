//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ParamError`]: declaration and resolution errors

pub mod error;
