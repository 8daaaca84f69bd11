//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (files, terminals, etc.).
//!
//! # Structure
//!
//! - `food` - A single food entry (`FoodItem`)
//! - `food_list` - The ordered list commands operate on (`FoodList`, `SortOrder`)

mod food;
mod food_list;

pub use food::{DEFAULT_FOOD_TYPE, FoodItem};
pub(crate) use food::is_valid_price;
pub use food_list::{
    DuplicateFoodError, FoodList, InvalidFoodListError, ParseSortOrderError, SortOrder,
};
