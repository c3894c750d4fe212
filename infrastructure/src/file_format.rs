//! File format detection shared by the file-based loaders.

use std::path::Path;

/// `.json` files (any case) are parsed as JSON; everything else as TOML.
pub(crate) fn is_json_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
