//! Food commands shared by one-shot and interactive mode.

use chrono::NaiveDate;
use clap::Subcommand;

/// Date format accepted for expiry dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Available commands for the food inventory.
///
/// Names and targets may span several words; they are joined with single
/// spaces before reaching the core.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a food to the list
    Add {
        /// Name of the food
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Food type (category)
        #[arg(short = 't', long = "type")]
        food_type: Option<String>,
        /// Unit price
        #[arg(short, long, allow_negative_numbers = true)]
        price: Option<f64>,
        /// Units in stock
        #[arg(short, long)]
        stock: Option<u32>,
        /// Expiry date (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date)]
        expiry: Option<NaiveDate>,
    },

    /// Delete foods by index, name or type
    Delete {
        /// 1-based index, food name or food type
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        target: Vec<String>,
        /// How to interpret the target: index, name or type
        #[arg(short = 'b', long = "by", default_value = "index")]
        by: String,
    },

    /// Find foods by index, name or type
    Find {
        /// 1-based index, food name or food type
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        target: Vec<String>,
        /// How to interpret the target: index, name or type
        #[arg(short = 'b', long = "by", default_value = "index")]
        by: String,
        /// Order of the matches: insertion, name, type, expiry, stock or price
        #[arg(long, default_value = "insertion")]
        sort: String,
    },

    /// List every food
    List {
        /// Order of the list: insertion, name, type, expiry, stock or price
        #[arg(long, default_value = "insertion")]
        sort: String,
    },

    /// Change fields of a food
    Edit {
        /// Current name of the food
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// New name
        #[arg(long)]
        new_name: Option<String>,
        /// New food type
        #[arg(short = 't', long = "type")]
        food_type: Option<String>,
        /// New unit price
        #[arg(short, long, allow_negative_numbers = true)]
        price: Option<f64>,
        /// New stock level
        #[arg(short, long)]
        stock: Option<u32>,
        /// New expiry date (YYYY-MM-DD), or "none" to clear it
        #[arg(short, long, value_parser = parse_expiry)]
        expiry: Option<ExpiryArg>,
    },

    /// Record a sale
    Sold {
        /// Name of the food sold
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Units sold
        #[arg(short, long)]
        quantity: u32,
    },
}

/// Expiry value given to `edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryArg {
    Set(NaiveDate),
    Clear,
}

impl ExpiryArg {
    pub const fn into_date(self) -> Option<NaiveDate> {
        match self {
            Self::Set(date) => Some(date),
            Self::Clear => None,
        }
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| format!("'{value}' is not a date, expected YYYY-MM-DD"))
}

fn parse_expiry(value: &str) -> Result<ExpiryArg, String> {
    if value.trim().eq_ignore_ascii_case("none") {
        Ok(ExpiryArg::Clear)
    } else {
        parse_date(value).map(ExpiryArg::Set)
    }
}

/// Join the words of a multi-word argument.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
