//! List command: show every food.

use super::error::CommandError;
use super::messages::{MESSAGE_EMPTY_LIST, MESSAGE_LISTED};
use super::CommandResult;
use crate::domain::{FoodItem, FoodList, SortOrder};
use crate::ports::FoodStorage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCommand {
    order: SortOrder,
}

impl ListCommand {
    pub const fn new(order: SortOrder) -> Self {
        Self { order }
    }

    /// Parse the sort keyword, failing with `InvalidParameter`.
    pub fn with_order(order: &str) -> Result<Self, CommandError> {
        Ok(Self::new(order.parse()?))
    }

    pub fn execute(
        self,
        list: &FoodList,
        _storage: &dyn FoodStorage,
    ) -> Result<CommandResult, CommandError> {
        if list.is_empty() {
            return Ok(CommandResult::new(MESSAGE_EMPTY_LIST));
        }
        let foods: Vec<FoodItem> = list.sorted(self.order).into_iter().cloned().collect();
        Ok(CommandResult::with_foods(MESSAGE_LISTED, foods))
    }
}
