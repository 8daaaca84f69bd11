//! Find command: look foods up by index, name or type.

use tracing::debug;

use super::error::CommandError;
use super::messages::MESSAGE_FOUND;
use super::selection::{Selection, checked_position};
use super::CommandResult;
use crate::domain::{FoodItem, FoodList, SortOrder};
use crate::ports::FoodStorage;

/// Read-only lookup sharing Delete's selection rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    selection: Selection,
    order: SortOrder,
}

impl FindCommand {
    pub const fn new(selection: Selection) -> Self {
        Self {
            selection,
            order: SortOrder::Insertion,
        }
    }

    /// Find by a 1-based index. `mode` must name the index mode.
    pub fn with_index(index: i64, mode: &str) -> Result<Self, CommandError> {
        Selection::from_index(index, mode.parse()?).map(Self::new)
    }

    /// Find by name or type. `mode` must name the name or type mode.
    pub fn with_description(
        description: impl Into<String>,
        mode: &str,
    ) -> Result<Self, CommandError> {
        Selection::from_description(description, mode.parse()?).map(Self::new)
    }

    /// Order used when several foods match.
    #[must_use]
    pub fn sorted_by(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Collect the matching foods. Never mutates and never persists.
    pub fn execute(
        self,
        list: &FoodList,
        _storage: &dyn FoodStorage,
    ) -> Result<CommandResult, CommandError> {
        let found: Vec<FoodItem> = match &self.selection {
            Selection::Index(index) => {
                let position = checked_position(list, *index)?;
                list.get(position).cloned().into_iter().collect()
            }
            Selection::Name(name) => list
                .get_by_name(name)
                .cloned()
                .into_iter()
                .collect(),
            Selection::Type(food_type) => list
                .sorted(self.order)
                .into_iter()
                .filter(|food| food.has_type(food_type))
                .cloned()
                .collect(),
        };

        if found.is_empty() {
            return Err(CommandError::FoodNotExists);
        }
        debug!(by = %self.selection.by(), matches = found.len(), "find completed");

        Ok(CommandResult::with_foods(MESSAGE_FOUND, found))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_find_by_index() {
        let list = two_foods();
        let storage = untouched_storage();

        let result = FindCommand::with_index(2, "index")
            .unwrap()
            .execute(&list, &storage)
            .unwrap();

        assert_eq!(result.foods.len(), 1);
        assert_eq!(result.foods[0].name, "Bread");
        assert_eq!(result.feedback, "Here are the matching food(s) in your list:");
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let list = two_foods();
        let storage = untouched_storage();

        let result = FindCommand::new(Selection::name("APPLE"))
            .execute(&list, &storage)
            .unwrap();

        assert_eq!(result.foods[0].name, "Apple");
    }

    #[test]
    fn test_find_by_type_uses_requested_order() {
        let list = FoodList::from_items(vec![
            FoodItem::new("Cherry", "Fruit").with_stock(9),
            FoodItem::new("Bread", "Grain"),
            FoodItem::new("Apple", "Fruit").with_stock(1),
        ])
        .unwrap();
        let storage = untouched_storage();

        let result = FindCommand::with_description("fruit", "type")
            .unwrap()
            .sorted_by(SortOrder::Name)
            .execute(&list, &storage)
            .unwrap();

        let names: Vec<_> = result.foods.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Apple", "Cherry"]);
    }

    #[test]
    fn test_find_nothing_matches() {
        let list = two_foods();
        let storage = untouched_storage();

        for selection in [
            Selection::index(3),
            Selection::name("Milk"),
            Selection::food_type("Dairy"),
        ] {
            let err = FindCommand::new(selection)
                .execute(&list, &storage)
                .unwrap_err();
            assert!(matches!(err, CommandError::FoodNotExists));
        }
    }
}
