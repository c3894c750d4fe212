//! Configuration file loading for hyperconf
//!
//! This module handles file I/O and merging of the tool's own settings from
//! multiple sources. The priority order (highest to lowest):
//!
//! 1. `HYPERCONF_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./hyperconf.toml` or `./.hyperconf.toml`
//! 4. Global: `$XDG_CONFIG_HOME/hyperconf/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileOverridesConfig, FileResolveConfig,
    FileSnapshotConfig,
};
pub use loader::ConfigLoader;
