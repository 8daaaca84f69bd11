//! Path utilities for cube data locations.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod ensure;
mod error;
mod platform;

use std::path::PathBuf;

pub use ensure::ensure_directory;
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root};

/// File name of the stored food list inside the data root.
pub const FOOD_LIST_FILE_NAME: &str = "foods.json";

/// Default location of the stored food list.
pub fn food_list_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(FOOD_LIST_FILE_NAME))
}
