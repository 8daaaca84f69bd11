//! Food table rendering.

use std::fmt::Write;

use cube_core::{CommandResult, FoodItem};

use super::tables::{format_optional, separator, truncate_string};

const NAME_WIDTH: usize = 24;
const TYPE_WIDTH: usize = 16;
const TABLE_WIDTH: usize = 4 + 1 + NAME_WIDTH + 1 + TYPE_WIDTH + 1 + 10 + 1 + 6 + 1 + 10;

/// Render foods as a numbered table.
///
/// Row numbers count from 1 in the order given, which for an unsorted
/// list matches the indices `delete` and `find` accept.
pub fn render_foods(foods: &[FoodItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<NAME_WIDTH$} {:<TYPE_WIDTH$} {:>10} {:>6} {:<10}",
        "#", "Name", "Type", "Price", "Stock", "Expiry"
    );
    let _ = writeln!(out, "{}", separator(TABLE_WIDTH));

    for (row, food) in foods.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4} {:<NAME_WIDTH$} {:<TYPE_WIDTH$} {:>10} {:>6} {:<10}",
            row + 1,
            truncate_string(&food.name, NAME_WIDTH),
            truncate_string(&food.food_type, TYPE_WIDTH),
            format!("${:.2}", food.price),
            food.stock,
            format_optional(food.expiry.as_ref(), "-"),
        );
    }
    out
}

/// Feedback text, followed by a table of the returned foods when asked for.
pub fn render_result(result: &CommandResult, with_table: bool) -> String {
    let mut out = result.feedback.clone();
    if with_table && !result.foods.is_empty() {
        out.push('\n');
        out.push_str(render_foods(&result.foods).trim_end());
    }
    out
}
