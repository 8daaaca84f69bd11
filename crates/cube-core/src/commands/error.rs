//! Command failure model.

use thiserror::Error;

use crate::domain::{DuplicateFoodError, ParseSortOrderError};
use crate::ports::StorageError;

/// Why a command was rejected or could not finish.
///
/// Every variant except [`CommandError::Storage`] is raised before the list
/// is touched. `Storage` means the in-memory list already changed but the
/// change was not saved.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The referenced index, name or type matches nothing in the list.
    #[error("Sorry, the food you are looking for does not exist in the list.")]
    FoodNotExists,

    /// Adding or renaming would give two foods the same name.
    #[error("Sorry, a food named '{0}' is already in the list.")]
    FoodAlreadyExists(String),

    /// A parameter was not recognized or is out of its allowed range.
    #[error("Sorry, that is not a valid parameter: {0}.")]
    InvalidParameter(String),

    /// A sale asked for more units than are in stock.
    #[error("Sorry, only {available} of {name} left in stock, cannot sell {requested}.")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },

    /// The change was applied in memory but persisting it failed.
    #[error("The change was made but could not be saved ({0}). Please try again.")]
    Storage(#[from] StorageError),
}

impl From<DuplicateFoodError> for CommandError {
    fn from(err: DuplicateFoodError) -> Self {
        Self::FoodAlreadyExists(err.0)
    }
}

impl From<ParseSortOrderError> for CommandError {
    fn from(err: ParseSortOrderError) -> Self {
        Self::InvalidParameter(format!(
            "'{}' is not a sort order (expected insertion, name, type, expiry, stock or price)",
            err.0
        ))
    }
}
