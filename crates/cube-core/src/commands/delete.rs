//! Delete command: remove one food by index or name, or a whole type.

use tracing::{debug, info};

use super::error::CommandError;
use super::messages::{MESSAGE_REMOVED_SINGLE, MESSAGE_REMOVED_TYPE, fill};
use super::selection::{Selection, checked_position};
use super::{CommandResult, persist};
use crate::domain::{FoodItem, FoodList};
use crate::ports::FoodStorage;

/// Removes foods selected by index, name or type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    selection: Selection,
}

impl DeleteCommand {
    pub const fn new(selection: Selection) -> Self {
        Self { selection }
    }

    /// Delete by a 1-based index. `mode` must name the index mode.
    pub fn with_index(index: i64, mode: &str) -> Result<Self, CommandError> {
        Selection::from_index(index, mode.parse()?).map(Self::new)
    }

    /// Delete by name or type. `mode` must name the name or type mode.
    pub fn with_description(
        description: impl Into<String>,
        mode: &str,
    ) -> Result<Self, CommandError> {
        Selection::from_description(description, mode.parse()?).map(Self::new)
    }

    /// Validate, remove, persist and report.
    ///
    /// # Errors
    ///
    /// - [`CommandError::FoodNotExists`] if nothing matches; the list is untouched
    ///   and storage is not called.
    /// - [`CommandError::Storage`] if the removal happened but saving failed.
    pub fn execute(
        self,
        list: &mut FoodList,
        storage: &dyn FoodStorage,
    ) -> Result<CommandResult, CommandError> {
        match self.selection {
            Selection::Index(index) => {
                let position = checked_position(list, index)?;
                debug!(position, "deleting food by index");
                let removed = list
                    .remove_index(position)
                    .ok_or(CommandError::FoodNotExists)?;
                persist(list, storage)?;
                Ok(removed_single(removed, list))
            }
            Selection::Name(name) => {
                if !list.exists_name(&name) {
                    return Err(CommandError::FoodNotExists);
                }
                debug!(%name, "deleting food by name");
                let removed = list
                    .remove_name(&name)
                    .ok_or(CommandError::FoodNotExists)?;
                persist(list, storage)?;
                Ok(removed_single(removed, list))
            }
            Selection::Type(food_type) => {
                if !list.exists_type(&food_type) {
                    return Err(CommandError::FoodNotExists);
                }
                let removed: Vec<FoodItem> = list.of_type(&food_type).cloned().collect();
                let count = list.remove_type(&food_type);
                debug!(%food_type, count, "deleted foods by type");
                persist(list, storage)?;
                info!(remaining = list.len(), "food list saved after delete");

                let feedback = fill(
                    MESSAGE_REMOVED_TYPE,
                    &[
                        ("type", &food_type),
                        ("count", &count),
                        ("remaining", &list.len()),
                    ],
                );
                Ok(CommandResult::with_foods(feedback, removed))
            }
        }
    }
}

fn removed_single(removed: FoodItem, list: &FoodList) -> CommandResult {
    info!(name = %removed.name, remaining = list.len(), "food list saved after delete");
    let feedback = fill(
        MESSAGE_REMOVED_SINGLE,
        &[("food", &removed), ("remaining", &list.len())],
    );
    CommandResult::with_foods(feedback, vec![removed])
}
