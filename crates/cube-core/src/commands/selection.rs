//! How Delete and Find locate their target foods.

use std::fmt;
use std::str::FromStr;

use super::error::CommandError;
use crate::domain::FoodList;

/// Selection mode discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectBy {
    Index,
    Name,
    Type,
}

impl FromStr for SelectBy {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "index" => Ok(Self::Index),
            "name" => Ok(Self::Name),
            "type" => Ok(Self::Type),
            _ => Err(CommandError::InvalidParameter(format!(
                "'{s}' is not a selection mode (expected index, name or type)"
            ))),
        }
    }
}

impl fmt::Display for SelectBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Index => "index",
            Self::Name => "name",
            Self::Type => "type",
        })
    }
}

/// A resolved selection target.
///
/// `Index` holds a 0-based position that may be out of range; it is only
/// checked against the list at execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Index(i64),
    Name(String),
    Type(String),
}

impl Selection {
    /// Select by a 1-based, user-facing index.
    pub const fn index(user_index: i64) -> Self {
        Self::Index(user_index.saturating_sub(1))
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn food_type(food_type: impl Into<String>) -> Self {
        Self::Type(food_type.into())
    }

    /// Build from a 1-based index; only valid with [`SelectBy::Index`].
    pub fn from_index(user_index: i64, by: SelectBy) -> Result<Self, CommandError> {
        match by {
            SelectBy::Index => Ok(Self::index(user_index)),
            other => Err(CommandError::InvalidParameter(format!(
                "selecting by {other} needs a description, not an index"
            ))),
        }
    }

    /// Build from a name or type description; not valid with [`SelectBy::Index`].
    pub fn from_description(
        description: impl Into<String>,
        by: SelectBy,
    ) -> Result<Self, CommandError> {
        match by {
            SelectBy::Index => Err(CommandError::InvalidParameter(
                "selecting by index needs a number".to_string(),
            )),
            SelectBy::Name => Ok(Self::Name(description.into())),
            SelectBy::Type => Ok(Self::Type(description.into())),
        }
    }

    pub const fn by(&self) -> SelectBy {
        match self {
            Self::Index(_) => SelectBy::Index,
            Self::Name(_) => SelectBy::Name,
            Self::Type(_) => SelectBy::Type,
        }
    }
}

/// Check a 0-based index against the current list.
pub(crate) fn checked_position(list: &FoodList, index: i64) -> Result<usize, CommandError> {
    usize::try_from(index)
        .ok()
        .filter(|&position| position < list.len())
        .ok_or(CommandError::FoodNotExists)
}
