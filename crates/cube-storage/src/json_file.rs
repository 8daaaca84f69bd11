//! JSON file implementation of the `FoodStorage` trait.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use cube_core::{FoodList, FoodStorage, StorageError, ensure_directory};
use tracing::{debug, info};

/// Stores the food list as a pretty-printed JSON array.
///
/// Saves write a sibling temporary file and rename it over the target, so
/// an interrupted save leaves the previous list intact.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage backed by the file at `path`. Nothing is touched
    /// until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, action: &str, err: &std::io::Error) -> StorageError {
        StorageError::Io(format!(
            "failed to {action} {}: {err}",
            self.path.display()
        ))
    }
}

impl FoodStorage for JsonFileStorage {
    fn store_food_list(&self, list: &FoodList) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_directory(parent).map_err(|e| StorageError::Io(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(list)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| self.io_error("write", &e))?;
        fs::rename(&temp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp);
            self.io_error("replace", &e)
        })?;

        info!(path = %self.path.display(), foods = list.len(), "saved food list");
        Ok(())
    }

    fn load_food_list(&self) -> Result<FoodList, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no saved food list, starting empty");
                return Ok(FoodList::new());
            }
            Err(e) => return Err(self.io_error("read", &e)),
        };

        if contents.trim().is_empty() {
            debug!(path = %self.path.display(), "saved food list is blank");
            return Ok(FoodList::new());
        }

        let list: FoodList = serde_json::from_str(&contents).map_err(|e| {
            if e.is_data() {
                StorageError::Corrupt(format!("{}: {e}", self.path.display()))
            } else {
                StorageError::Serialization(format!("{}: {e}", self.path.display()))
            }
        })?;

        info!(path = %self.path.display(), foods = list.len(), "loaded food list");
        Ok(list)
    }
}
