//! The ordered food list shared by every command.
//!
//! Positions are 0-based and only valid for the list state they were read
//! from. Names are unique ignoring case; the list refuses duplicates both on
//! insertion and when rebuilt from stored items.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::food::{FoodItem, eq_ignore_case, is_valid_price};

/// Rejected attempt to hold two foods with the same name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("a food named '{0}' is already in the list")]
pub struct DuplicateFoodError(pub String);

/// Stored items that break a list or item invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidFoodListError {
    #[error(transparent)]
    Duplicate(#[from] DuplicateFoodError),

    #[error("'{name}' has an invalid price {price}")]
    InvalidPrice { name: String, price: f64 },
}

/// Unrecognized sort order keyword.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order '{0}'")]
pub struct ParseSortOrderError(pub String);

/// Ordering applied when presenting foods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep list order.
    #[default]
    Insertion,
    Name,
    Type,
    /// Earliest expiry first, foods without a date last.
    Expiry,
    /// Lowest stock first.
    Stock,
    /// Cheapest first.
    Price,
}

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "insertion" | "index" => Ok(Self::Insertion),
            "name" => Ok(Self::Name),
            "type" => Ok(Self::Type),
            "expiry" => Ok(Self::Expiry),
            "stock" => Ok(Self::Stock),
            "price" => Ok(Self::Price),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Insertion => "insertion",
            Self::Name => "name",
            Self::Type => "type",
            Self::Expiry => "expiry",
            Self::Stock => "stock",
            Self::Price => "price",
        };
        f.write_str(keyword)
    }
}

impl SortOrder {
    fn compare(self, a: &FoodItem, b: &FoodItem) -> Ordering {
        match self {
            Self::Insertion => Ordering::Equal,
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::Type => a.food_type.to_lowercase().cmp(&b.food_type.to_lowercase()),
            Self::Expiry => match (a.expiry, b.expiry) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::Stock => a.stock.cmp(&b.stock),
            Self::Price => a.price.total_cmp(&b.price),
        }
    }
}

/// Ordered collection of foods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FoodItem>", into = "Vec<FoodItem>")]
pub struct FoodList {
    items: Vec<FoodItem>,
}

impl FoodList {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a list from stored items, rejecting duplicate names and
    /// negative or non-finite prices.
    pub fn from_items(items: Vec<FoodItem>) -> Result<Self, InvalidFoodListError> {
        let mut list = Self::new();
        for item in items {
            if !is_valid_price(item.price) {
                return Err(InvalidFoodListError::InvalidPrice {
                    name: item.name,
                    price: item.price,
                });
            }
            list.add(item)?;
        }
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.items.iter()
    }

    /// Food at a 0-based position.
    pub fn get(&self, index: usize) -> Option<&FoodItem> {
        self.items.get(index)
    }

    /// Food whose name matches, ignoring case.
    pub fn get_by_name(&self, name: &str) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.has_name(name))
    }

    pub fn get_by_name_mut(&mut self, name: &str) -> Option<&mut FoodItem> {
        self.items.iter_mut().find(|item| item.has_name(name))
    }

    /// Position of the food whose name matches, ignoring case.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.has_name(name))
    }

    pub fn exists_name(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.has_name(name))
    }

    pub fn exists_type(&self, food_type: &str) -> bool {
        self.items.iter().any(|item| item.has_type(food_type))
    }

    /// Foods of the given type, in list order.
    pub fn of_type<'a>(&'a self, food_type: &'a str) -> impl Iterator<Item = &'a FoodItem> {
        self.items.iter().filter(move |item| item.has_type(food_type))
    }

    /// Append a food, refusing a name that is already present.
    pub fn add(&mut self, item: FoodItem) -> Result<(), DuplicateFoodError> {
        if self.exists_name(&item.name) {
            return Err(DuplicateFoodError(item.name));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove the food at a 0-based position, shifting later entries down.
    pub fn remove_index(&mut self, index: usize) -> Option<FoodItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Remove the food whose name matches.
    pub fn remove_name(&mut self, name: &str) -> Option<FoodItem> {
        let index = self.position_of(name)?;
        Some(self.items.remove(index))
    }

    /// Remove every food of the given type and return how many were removed.
    pub fn remove_type(&mut self, food_type: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.has_type(food_type));
        before - self.items.len()
    }

    /// Foods ordered for display. Ties keep list order.
    pub fn sorted(&self, order: SortOrder) -> Vec<&FoodItem> {
        let mut foods: Vec<&FoodItem> = self.items.iter().collect();
        foods.sort_by(|a, b| order.compare(a, b));
        foods
    }

    /// Whether `name` is held by an entry other than the one named `current`.
    pub(crate) fn name_taken_by_other(&self, current: &str, name: &str) -> bool {
        !eq_ignore_case(current, name) && self.exists_name(name)
    }
}

impl TryFrom<Vec<FoodItem>> for FoodList {
    type Error = InvalidFoodListError;

    fn try_from(items: Vec<FoodItem>) -> Result<Self, Self::Error> {
        Self::from_items(items)
    }
}

impl From<FoodList> for Vec<FoodItem> {
    fn from(list: FoodList) -> Self {
        list.items
    }
}

impl<'a> IntoIterator for &'a FoodList {
    type Item = &'a FoodItem;
    type IntoIter = std::slice::Iter<'a, FoodItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> FoodList {
        FoodList::from_items(vec![
            FoodItem::new("Apple", "Fruit").with_stock(5).with_price(1.0),
            FoodItem::new("Banana", "Fruit").with_stock(2).with_price(0.5),
            FoodItem::new("Bread", "Grain").with_stock(9).with_price(3.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_rejects_duplicate_name_ignoring_case() {
        let mut list = sample();
        let err = list.add(FoodItem::new("APPLE", "Fruit")).unwrap_err();

        assert_eq!(err, DuplicateFoodError("APPLE".to_string()));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_from_items_rejects_duplicates() {
        let result = FoodList::from_items(vec![
            FoodItem::new("Milk", "Dairy"),
            FoodItem::new("milk", "Dairy"),
        ]);
        assert_eq!(
            result.unwrap_err(),
            InvalidFoodListError::Duplicate(DuplicateFoodError("milk".to_string()))
        );
    }

    #[test]
    fn test_from_items_rejects_invalid_price() {
        let result = FoodList::from_items(vec![
            FoodItem::new("Milk", "Dairy"),
            FoodItem::new("Cheese", "Dairy").with_price(-5.0),
        ]);

        assert!(matches!(
            result,
            Err(InvalidFoodListError::InvalidPrice { ref name, .. }) if name == "Cheese"
        ));
    }

    #[test]
    fn test_serde_rejects_negative_price() {
        let stored = r#"[{"name":"Tea","type":"Drink","price":-5.0}]"#;
        assert!(serde_json::from_str::<FoodList>(stored).is_err());
    }

    #[test]
    fn test_lookup_by_name_and_type() {
        let list = sample();

        assert!(list.exists_name("banana"));
        assert!(!list.exists_name("Milk"));
        assert!(list.exists_type("GRAIN"));
        assert!(!list.exists_type("Dairy"));
        assert_eq!(list.get_by_name("bread").unwrap().name, "Bread");
        assert_eq!(list.position_of("Banana"), Some(1));
        assert_eq!(list.of_type("fruit").count(), 2);
    }

    #[test]
    fn test_remove_index_shifts_entries() {
        let mut list = sample();

        let removed = list.remove_index(0).unwrap();
        assert_eq!(removed.name, "Apple");
        assert_eq!(list.get(0).unwrap().name, "Banana");
        assert!(list.remove_index(2).is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_name() {
        let mut list = sample();

        assert_eq!(list.remove_name("bAnAnA").unwrap().name, "Banana");
        assert!(list.remove_name("Banana").is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_type_removes_all_matches() {
        let mut list = sample();

        assert_eq!(list.remove_type("Fruit"), 2);
        assert_eq!(list.len(), 1);
        assert_eq!(list.remove_type("Fruit"), 0);
    }

    #[test]
    fn test_sorted_orders() {
        let list = sample();
        let names = |order| {
            list.sorted(order)
                .into_iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
        };

        assert_eq!(names(SortOrder::Insertion), ["Apple", "Banana", "Bread"]);
        assert_eq!(names(SortOrder::Stock), ["Banana", "Apple", "Bread"]);
        assert_eq!(names(SortOrder::Price), ["Banana", "Apple", "Bread"]);
        assert_eq!(names(SortOrder::Type), ["Apple", "Banana", "Bread"]);
    }

    #[test]
    fn test_sorted_by_expiry_puts_unset_last() {
        let early = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let list = FoodList::from_items(vec![
            FoodItem::new("Rice", "Grain"),
            FoodItem::new("Yogurt", "Dairy").with_expiry(late),
            FoodItem::new("Milk", "Dairy").with_expiry(early),
        ])
        .unwrap();

        let names: Vec<_> = list
            .sorted(SortOrder::Expiry)
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["Milk", "Yogurt", "Rice"]);
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("Expiry".parse::<SortOrder>().unwrap(), SortOrder::Expiry);
        assert_eq!(" stock ".parse::<SortOrder>().unwrap(), SortOrder::Stock);
        assert_eq!(
            "colour".parse::<SortOrder>().unwrap_err(),
            ParseSortOrderError("colour".to_string())
        );
        assert_eq!(SortOrder::Price.to_string(), "price");
    }

    #[test]
    fn test_serde_keeps_order_and_checks_uniqueness() {
        let list = sample();
        let json = serde_json::to_string(&list).unwrap();
        let restored: FoodList = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, list);

        let duplicated = r#"[{"name":"Tea","type":"Drink"},{"name":"TEA","type":"Drink"}]"#;
        assert!(serde_json::from_str::<FoodList>(duplicated).is_err());
    }

    #[test]
    fn test_rename_collision_check() {
        let list = sample();

        assert!(list.name_taken_by_other("Apple", "banana"));
        assert!(!list.name_taken_by_other("Apple", "APPLE"));
        assert!(!list.name_taken_by_other("Apple", "Cherry"));
    }
}
