//! Edit command: change fields of one food.

use chrono::NaiveDate;
use tracing::{debug, info};

use super::add::check_price;
use super::error::CommandError;
use super::messages::{MESSAGE_UPDATED, fill};
use super::{CommandResult, persist};
use crate::domain::{FoodItem, FoodList};
use crate::ports::FoodStorage;

/// A single field change.
#[derive(Debug, Clone, PartialEq)]
pub enum FoodUpdate {
    Name(String),
    Type(String),
    Price(f64),
    Stock(u32),
    /// `None` clears the expiry date.
    Expiry(Option<NaiveDate>),
}

impl FoodUpdate {
    fn apply(self, food: &mut FoodItem) {
        match self {
            Self::Name(name) => food.name = name.trim().to_string(),
            Self::Type(food_type) => food.food_type = food_type.trim().to_string(),
            Self::Price(price) => food.price = price,
            Self::Stock(stock) => food.stock = stock,
            Self::Expiry(expiry) => food.expiry = expiry,
        }
    }
}

/// Applies one or more updates to the food with the given name.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    name: String,
    updates: Vec<FoodUpdate>,
}

impl EditCommand {
    pub fn new(name: impl Into<String>, updates: Vec<FoodUpdate>) -> Self {
        Self {
            name: name.into(),
            updates,
        }
    }

    /// Validate every update, apply them in order, persist and report.
    ///
    /// Nothing is applied unless all updates are valid.
    pub fn execute(
        self,
        list: &mut FoodList,
        storage: &dyn FoodStorage,
    ) -> Result<CommandResult, CommandError> {
        if self.updates.is_empty() {
            return Err(CommandError::InvalidParameter(
                "nothing to edit, give at least one new value".to_string(),
            ));
        }
        let current_name = list
            .get_by_name(&self.name)
            .map(|food| food.name.clone())
            .ok_or(CommandError::FoodNotExists)?;

        for update in &self.updates {
            validate(list, &current_name, update)?;
        }

        let food = list
            .get_by_name_mut(&current_name)
            .ok_or(CommandError::FoodNotExists)?;
        for update in self.updates {
            update.apply(food);
        }
        let updated = food.clone();
        debug!(from = %current_name, to = %updated.name, "edited food");

        persist(list, storage)?;
        info!(name = %updated.name, "food list saved after edit");

        let feedback = fill(MESSAGE_UPDATED, &[("food", &updated)]);
        Ok(CommandResult::with_foods(feedback, vec![updated]))
    }
}

fn validate(list: &FoodList, current_name: &str, update: &FoodUpdate) -> Result<(), CommandError> {
    match update {
        FoodUpdate::Name(name) => {
            let name = name.trim();
            if name.is_empty() {
                return Err(CommandError::InvalidParameter(
                    "food name cannot be empty".to_string(),
                ));
            }
            if list.name_taken_by_other(current_name, name) {
                return Err(CommandError::FoodAlreadyExists(name.to_string()));
            }
            Ok(())
        }
        FoodUpdate::Type(food_type) if food_type.trim().is_empty() => Err(
            CommandError::InvalidParameter("food type cannot be empty".to_string()),
        ),
        FoodUpdate::Price(price) => check_price(*price),
        FoodUpdate::Type(_) | FoodUpdate::Stock(_) | FoodUpdate::Expiry(_) => Ok(()),
    }
}
