//! Add command: append a new food to the list.

use tracing::{debug, info};

use super::error::CommandError;
use super::messages::{MESSAGE_ADDED, fill};
use super::{CommandResult, persist};
use crate::domain::{DEFAULT_FOOD_TYPE, FoodItem, FoodList, is_valid_price};
use crate::ports::FoodStorage;

/// Adds one food, keeping names unique.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    food: FoodItem,
}

impl AddCommand {
    pub const fn new(food: FoodItem) -> Self {
        Self { food }
    }

    /// Validate, append, persist and report.
    ///
    /// Surrounding whitespace is trimmed from the name and type; a blank type
    /// becomes [`DEFAULT_FOOD_TYPE`].
    pub fn execute(
        self,
        list: &mut FoodList,
        storage: &dyn FoodStorage,
    ) -> Result<CommandResult, CommandError> {
        let mut food = self.food;
        food.name = food.name.trim().to_string();
        food.food_type = match food.food_type.trim() {
            "" => DEFAULT_FOOD_TYPE.to_string(),
            trimmed => trimmed.to_string(),
        };

        if food.name.is_empty() {
            return Err(CommandError::InvalidParameter(
                "food name cannot be empty".to_string(),
            ));
        }
        check_price(food.price)?;
        if list.exists_name(&food.name) {
            return Err(CommandError::FoodAlreadyExists(food.name));
        }

        debug!(name = %food.name, food_type = %food.food_type, "adding food");
        list.add(food.clone())?;
        persist(list, storage)?;
        info!(total = list.len(), "food list saved after add");

        let feedback = fill(MESSAGE_ADDED, &[("food", &food), ("remaining", &list.len())]);
        Ok(CommandResult::with_foods(feedback, vec![food]))
    }
}

/// Prices must be finite and not negative.
pub(super) fn check_price(price: f64) -> Result<(), CommandError> {
    if is_valid_price(price) {
        Ok(())
    } else {
        Err(CommandError::InvalidParameter(format!(
            "price must be a non-negative number, got {price}"
        )))
    }
}
