//! Core of the cube food inventory tracker.
//!
//! This crate owns the food list, the commands that validate and change it,
//! and the storage port those commands persist through. It performs no
//! terminal I/O and knows nothing about how the list is stored.

#![deny(unused_crate_dependencies)]

pub mod commands;
pub mod domain;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use commands::{
    AddCommand, Command, CommandError, CommandResult, DeleteCommand, EditCommand, FindCommand,
    FoodUpdate, ListCommand, SelectBy, Selection, SoldCommand,
};
pub use domain::{
    DEFAULT_FOOD_TYPE, DuplicateFoodError, FoodItem, FoodList, InvalidFoodListError, SortOrder,
};
pub use paths::{PathError, data_root, ensure_directory, food_list_path};
pub use ports::{FoodStorage, StorageError};

// Property tests live in tests/
#[cfg(test)]
use proptest as _;
