//! Success message templates.
//!
//! Templates are plain data with named `{slot}` placeholders so they can be
//! checked without running a command. [`fill`] renders them.

use std::fmt::Display;

pub const MESSAGE_ADDED: &str = "Nice! I've added this food:\n{food}\nNow you have {remaining} food in the list.";

pub const MESSAGE_REMOVED_SINGLE: &str =
    "Nice! I've removed this food:\n{food}\nNow you have {remaining} food in the list.";

pub const MESSAGE_REMOVED_TYPE: &str = "Nice! I've removed this type:\n{type}\nThis type contains {count} food items\nNow you have {remaining} food in the list.";

pub const MESSAGE_UPDATED: &str = "Nice! I've updated this food:\n{food}";

pub const MESSAGE_SOLD: &str = "Nice! I've sold {quantity} of {name}.\nRevenue from this food is now ${revenue}.\n{name} has {stock} left in stock.";

pub const MESSAGE_FOUND: &str = "Here are the matching food(s) in your list:";

pub const MESSAGE_LISTED: &str = "Here are the food(s) in your list:";

pub const MESSAGE_EMPTY_LIST: &str = "Your food list is empty.";

/// Render a template, replacing each `{slot}` with its value.
///
/// Placeholders without a matching slot are left as written. Substituted
/// values are never rescanned.
pub fn fill(template: &str, slots: &[(&str, &dyn Display)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let slot = tail.find('}').and_then(|end| {
            let name = &tail[1..end];
            slots
                .iter()
                .find(|(slot, _)| *slot == name)
                .map(|(_, value)| (value, end))
        });

        match slot {
            Some((value, end)) => {
                out.push_str(&value.to_string());
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
