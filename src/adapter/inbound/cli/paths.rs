//! Default file locations, relative to the working directory.

use std::path::{Path, PathBuf};

/// Config file picked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "basoka.toml";

/// Resolve the config file to load.
///
/// An explicit path is always used (and must exist). Otherwise
/// [`DEFAULT_CONFIG_FILE`] is used if present, else no file at all.
#[must_use]
pub fn resolve_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    default.is_file().then_some(default)
}
