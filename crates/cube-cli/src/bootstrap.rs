//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the storage adapter is chosen and
//! the food list is loaded. Handlers receive the composed [`CliContext`].

use std::path::PathBuf;

use cube_core::{Command, CommandError, CommandResult, FoodList, FoodStorage, food_list_path};
use cube_storage::JsonFileStorage;
use tracing::info;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// File the food list is loaded from and saved to.
    pub data_file: PathBuf,
}

impl CliConfig {
    /// Create config with the default data file under the data root.
    pub fn with_defaults() -> Result<Self, CliError> {
        Ok(Self {
            data_file: food_list_path()?,
        })
    }

    /// Use the `--data-file` override when given, the defaults otherwise.
    pub fn from_override(data_file: Option<PathBuf>) -> Result<Self, CliError> {
        match data_file {
            Some(data_file) => Ok(Self { data_file }),
            None => Self::with_defaults(),
        }
    }
}

/// Loaded food list plus the storage every mutation is saved through.
pub struct CliContext {
    foods: FoodList,
    storage: Box<dyn FoodStorage>,
}

impl CliContext {
    /// The food list as of the last command.
    pub const fn foods(&self) -> &FoodList {
        &self.foods
    }

    /// Execute one command against the session's list.
    pub fn run(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        command.execute(&mut self.foods, self.storage.as_ref())
    }
}

/// Bootstrap the CLI with JSON file storage at the configured location.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    info!(path = %config.data_file.display(), "using food list file");
    bootstrap_with(Box::new(JsonFileStorage::new(config.data_file)))
}

/// Bootstrap the CLI with any storage, loading the current list from it.
pub fn bootstrap_with(storage: Box<dyn FoodStorage>) -> Result<CliContext, CliError> {
    let foods = storage.load_food_list()?;
    Ok(CliContext { foods, storage })
}
