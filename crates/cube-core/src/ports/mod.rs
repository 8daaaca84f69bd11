//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `serde_json` or filesystem types in any signature
//! - Storage is whole-list: save everything, load everything
//! - Calls are synchronous; the core never holds a storage handle past one call

use thiserror::Error;

use crate::domain::FoodList;

/// Persistence contract for the food list.
///
/// Implementations own every storage detail (file format, location,
/// atomicity). The core calls [`FoodStorage::store_food_list`] once after
/// every successful mutation and [`FoodStorage::load_food_list`] once at
/// start-up.
#[cfg_attr(test, mockall::automock)]
pub trait FoodStorage {
    /// Persist the whole list, replacing whatever was stored before.
    fn store_food_list(&self, list: &FoodList) -> Result<(), StorageError>;

    /// Load the stored list. A store that has never been written yields an
    /// empty list.
    fn load_food_list(&self) -> Result<FoodList, StorageError>;
}

/// Domain-specific errors for storage operations.
///
/// This error type abstracts away storage implementation details (e.g. IO or
/// JSON errors) so commands can surface failures without knowing the backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("IO error: {0}")]
    Io(String),

    /// The list could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The stored data decoded but violates a list invariant.
    #[error("Corrupt food list: {0}")]
    Corrupt(String),
}
