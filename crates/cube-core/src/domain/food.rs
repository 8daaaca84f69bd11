//! Food item domain type.
//!
//! A `FoodItem` is one entry in the managed list. It is identified by its
//! name and classified by its type; both are matched case-insensitively.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Type assigned to foods added without an explicit type.
pub const DEFAULT_FOOD_TYPE: &str = "Uncategorized";

/// One food entry in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Display name, unique within a list (case-insensitive).
    pub name: String,
    /// Category such as "Fruit" or "Grain".
    #[serde(rename = "type")]
    pub food_type: String,
    /// Unit selling price.
    #[serde(default)]
    pub price: f64,
    /// Units currently in stock.
    #[serde(default)]
    pub stock: u32,
    /// Expiry date, if known.
    #[serde(default)]
    pub expiry: Option<NaiveDate>,
    /// Total revenue accumulated from sales of this food.
    #[serde(default)]
    pub revenue: f64,
}

impl FoodItem {
    /// Create a food with the given name and type and empty stock.
    #[must_use]
    pub fn new(name: impl Into<String>, food_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            food_type: food_type.into(),
            price: 0.0,
            stock: 0,
            expiry: None,
            revenue: 0.0,
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    #[must_use]
    pub fn with_expiry(mut self, expiry: NaiveDate) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Whether this food's name matches `name`, ignoring case.
    pub fn has_name(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    /// Whether this food's type matches `food_type`, ignoring case.
    pub fn has_type(&self, food_type: &str) -> bool {
        eq_ignore_case(&self.food_type, food_type)
    }
}

impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Food Name: {}", self.name)?;
        writeln!(f, "Type: {}", self.food_type)?;
        writeln!(f, "Price: ${:.2}", self.price)?;
        writeln!(f, "Stock: {}", self.stock)?;
        match self.expiry {
            Some(date) => write!(f, "Expiry Date: {}", date.format("%Y-%m-%d")),
            None => write!(f, "Expiry Date: not set"),
        }
    }
}

/// Comparison used for every name and type lookup: surrounding whitespace
/// and case are ignored, matching how names and types are stored.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Prices must be finite and not negative.
pub(crate) fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_food_defaults() {
        let food = FoodItem::new("Apple", "Fruit");

        assert_eq!(food.name, "Apple");
        assert_eq!(food.food_type, "Fruit");
        assert_eq!(food.stock, 0);
        assert!(food.expiry.is_none());
        assert!(food.revenue.abs() < f64::EPSILON);
    }

    #[test]
    fn test_name_and_type_match_ignore_case() {
        let food = FoodItem::new("Green Apple", "Fruit");

        assert!(food.has_name("green apple"));
        assert!(food.has_name("GREEN APPLE"));
        assert!(!food.has_name("Green"));
        assert!(food.has_type("fRuIt"));
        assert!(!food.has_type("Grain"));
    }

    #[test]
    fn test_match_ignores_surrounding_whitespace() {
        let food = FoodItem::new("Apple", "Fruit");

        assert!(food.has_name(" apple "));
        assert!(food.has_type("\tFruit "));
        assert!(!food.has_name("app le"));
    }

    #[test]
    fn test_price_validity() {
        assert!(is_valid_price(0.0));
        assert!(is_valid_price(2.5));
        assert!(!is_valid_price(-0.01));
        assert!(!is_valid_price(f64::NAN));
        assert!(!is_valid_price(f64::INFINITY));
    }

    #[test]
    fn test_display_block() {
        let date = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        let food = FoodItem::new("Apple", "Fruit")
            .with_price(1.2)
            .with_stock(10)
            .with_expiry(date);

        assert_eq!(
            food.to_string(),
            "Food Name: Apple\nType: Fruit\nPrice: $1.20\nStock: 10\nExpiry Date: 2026-11-01"
        );
    }

    #[test]
    fn test_display_without_expiry() {
        let food = FoodItem::new("Bread", "Grain");
        assert!(food.to_string().ends_with("Expiry Date: not set"));
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let food: FoodItem = serde_json::from_str(r#"{"name":"Milk","type":"Dairy"}"#).unwrap();

        assert_eq!(food, FoodItem::new("Milk", "Dairy"));
    }
}
