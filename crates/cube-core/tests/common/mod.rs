//! Shared helpers for core integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use cube_core::{FoodItem, FoodList, FoodStorage, StorageError};

/// In-memory storage that keeps a snapshot of every save.
#[derive(Default)]
pub struct RecordingStorage {
    saves: RefCell<Vec<FoodList>>,
    fail_saves: bool,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose saves always fail.
    pub fn failing() -> Self {
        Self {
            saves: RefCell::default(),
            fail_saves: true,
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.borrow().len()
    }

    pub fn last_save(&self) -> Option<FoodList> {
        self.saves.borrow().last().cloned()
    }
}

impl FoodStorage for RecordingStorage {
    fn store_food_list(&self, list: &FoodList) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::Io("read-only file system".to_string()));
        }
        self.saves.borrow_mut().push(list.clone());
        Ok(())
    }

    fn load_food_list(&self) -> Result<FoodList, StorageError> {
        Ok(self.last_save().unwrap_or_default())
    }
}

/// Build a list from (name, type) pairs.
pub fn food_list(entries: &[(&str, &str)]) -> FoodList {
    FoodList::from_items(
        entries
            .iter()
            .map(|(name, food_type)| FoodItem::new(*name, *food_type))
            .collect(),
    )
    .expect("fixture names are unique")
}
