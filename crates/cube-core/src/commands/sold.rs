//! Sold command: record a sale, reducing stock and adding revenue.

use tracing::{debug, info};

use super::error::CommandError;
use super::messages::{MESSAGE_SOLD, fill};
use super::{CommandResult, persist};
use crate::domain::FoodList;
use crate::ports::FoodStorage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoldCommand {
    name: String,
    quantity: u32,
}

impl SoldCommand {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    pub fn execute(
        self,
        list: &mut FoodList,
        storage: &dyn FoodStorage,
    ) -> Result<CommandResult, CommandError> {
        if self.quantity == 0 {
            return Err(CommandError::InvalidParameter(
                "quantity sold must be at least 1".to_string(),
            ));
        }
        let food = list
            .get_by_name_mut(&self.name)
            .ok_or(CommandError::FoodNotExists)?;
        if food.stock < self.quantity {
            return Err(CommandError::InsufficientStock {
                name: food.name.clone(),
                available: food.stock,
                requested: self.quantity,
            });
        }

        food.stock -= self.quantity;
        food.revenue += food.price * f64::from(self.quantity);
        let sold = food.clone();
        debug!(name = %sold.name, quantity = self.quantity, stock = sold.stock, "recorded sale");

        persist(list, storage)?;
        info!(name = %sold.name, "food list saved after sale");

        let revenue = format!("{:.2}", sold.revenue);
        let feedback = fill(
            MESSAGE_SOLD,
            &[
                ("quantity", &self.quantity),
                ("name", &sold.name),
                ("revenue", &revenue),
                ("stock", &sold.stock),
            ],
        );
        Ok(CommandResult::with_foods(feedback, vec![sold]))
    }
}
