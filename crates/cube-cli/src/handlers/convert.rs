//! Turning parsed arguments into core commands.

use cube_core::{
    AddCommand, Command, CommandError, DEFAULT_FOOD_TYPE, DeleteCommand, EditCommand,
    FindCommand, FoodItem, FoodUpdate, ListCommand, SelectBy, Selection, SoldCommand,
};

use crate::commands::{Commands, join_words};

/// Build the core command for parsed arguments.
///
/// Selection modes and sort orders are checked here, so a bad keyword
/// fails with `InvalidParameter` before anything runs.
pub fn to_command(command: Commands) -> Result<Command, CommandError> {
    let command = match command {
        Commands::Add {
            name,
            food_type,
            price,
            stock,
            expiry,
        } => {
            let mut food = FoodItem::new(
                join_words(&name),
                food_type.unwrap_or_else(|| DEFAULT_FOOD_TYPE.to_string()),
            );
            if let Some(price) = price {
                food = food.with_price(price);
            }
            if let Some(stock) = stock {
                food = food.with_stock(stock);
            }
            if let Some(expiry) = expiry {
                food = food.with_expiry(expiry);
            }
            AddCommand::new(food).into()
        }
        Commands::Delete { target, by } => DeleteCommand::new(selection(&target, &by)?).into(),
        Commands::Find { target, by, sort } => FindCommand::new(selection(&target, &by)?)
            .sorted_by(sort.parse()?)
            .into(),
        Commands::List { sort } => ListCommand::with_order(&sort)?.into(),
        Commands::Edit {
            name,
            new_name,
            food_type,
            price,
            stock,
            expiry,
        } => {
            let updates = [
                new_name.map(FoodUpdate::Name),
                food_type.map(FoodUpdate::Type),
                price.map(FoodUpdate::Price),
                stock.map(FoodUpdate::Stock),
                expiry.map(|expiry| FoodUpdate::Expiry(expiry.into_date())),
            ]
            .into_iter()
            .flatten()
            .collect();
            EditCommand::new(join_words(&name), updates).into()
        }
        Commands::Sold { name, quantity } => SoldCommand::new(join_words(&name), quantity).into(),
    };
    Ok(command)
}

fn selection(target: &[String], by: &str) -> Result<Selection, CommandError> {
    let by: SelectBy = by.parse()?;
    let target = join_words(target);
    match by {
        SelectBy::Index => {
            let index = target.trim().parse::<i64>().map_err(|_| {
                CommandError::InvalidParameter(format!("'{target}' is not an index"))
            })?;
            Selection::from_index(index, by)
        }
        SelectBy::Name | SelectBy::Type => Selection::from_description(target, by),
    }
}
