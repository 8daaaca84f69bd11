//! Platform-specific data directory resolution.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "CUBE_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `CUBE_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/cube`)
///
/// The directory is not created here; storage creates it on first save.
pub fn data_root() -> Result<PathBuf, PathError> {
    resolve_data_root(
        env::var_os(DATA_DIR_ENV).map(PathBuf::from),
        dirs::data_local_dir(),
    )
}

pub(super) fn resolve_data_root(
    override_dir: Option<PathBuf>,
    system_data_dir: Option<PathBuf>,
) -> Result<PathBuf, PathError> {
    if let Some(dir) = override_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        return Ok(dir);
    }
    system_data_dir
        .map(|dir| dir.join("cube"))
        .ok_or(PathError::NoDataDir)
}
