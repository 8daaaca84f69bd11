//! Commands - validated operations on the food list.
//!
//! Every command follows the same protocol:
//! 1. Validate its parameters against the current list
//! 2. Mutate the list (or read it, for queries)
//! 3. Persist the whole list through [`FoodStorage`] after a mutation
//! 4. Return a [`CommandResult`] for display
//!
//! Validation failures leave the list untouched and never reach storage.
//! Commands are consumed by `execute`, so each instance runs at most once.

mod add;
mod delete;
mod edit;
mod error;
mod find;
mod list;
pub mod messages;
mod selection;
mod sold;

use std::fmt;

use tracing::warn;

use crate::domain::{FoodItem, FoodList};
use crate::ports::FoodStorage;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, FoodUpdate};
pub use error::CommandError;
pub use find::FindCommand;
pub use list::ListCommand;
pub use selection::{SelectBy, Selection};
pub use sold::SoldCommand;

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    /// Message for the user.
    pub feedback: String,
    /// Foods the command added, removed, changed or matched.
    pub foods: Vec<FoodItem>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            foods: Vec::new(),
        }
    }

    pub fn with_foods(feedback: impl Into<String>, foods: Vec<FoodItem>) -> Self {
        Self {
            feedback: feedback.into(),
            foods,
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feedback)
    }
}

/// The closed set of commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddCommand),
    Delete(DeleteCommand),
    Edit(EditCommand),
    Find(FindCommand),
    List(ListCommand),
    Sold(SoldCommand),
}

impl Command {
    /// Short keyword for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Delete(_) => "delete",
            Self::Edit(_) => "edit",
            Self::Find(_) => "find",
            Self::List(_) => "list",
            Self::Sold(_) => "sold",
        }
    }

    /// Whether a successful run changes the list and persists it.
    pub const fn is_mutating(&self) -> bool {
        !matches!(self, Self::Find(_) | Self::List(_))
    }

    pub fn execute(
        self,
        list: &mut FoodList,
        storage: &dyn FoodStorage,
    ) -> Result<CommandResult, CommandError> {
        match self {
            Self::Add(command) => command.execute(list, storage),
            Self::Delete(command) => command.execute(list, storage),
            Self::Edit(command) => command.execute(list, storage),
            Self::Find(command) => command.execute(list, storage),
            Self::List(command) => command.execute(list, storage),
            Self::Sold(command) => command.execute(list, storage),
        }
    }
}

macro_rules! impl_from_command {
    ($($variant:ident => $command:ty),* $(,)?) => {
        $(
            impl From<$command> for Command {
                fn from(command: $command) -> Self {
                    Self::$variant(command)
                }
            }
        )*
    };
}

impl_from_command! {
    Add => AddCommand,
    Delete => DeleteCommand,
    Edit => EditCommand,
    Find => FindCommand,
    List => ListCommand,
    Sold => SoldCommand,
}

/// Save the list after a mutation, surfacing failure to the caller.
pub(crate) fn persist(list: &FoodList, storage: &dyn FoodStorage) -> Result<(), CommandError> {
    storage.store_food_list(list).map_err(|err| {
        warn!(error = %err, foods = list.len(), "food list changed but was not saved");
        CommandError::Storage(err)
    })
}
