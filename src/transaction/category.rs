//! The fixed set of categories a transaction can be filed under.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::Error;

/// What a transaction was for, e.g. "Groceries" or "Rent".
///
/// Categories are stored as their display text, so the text returned by
/// [Category::as_str] must never change for an existing variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Food and household supplies.
    Groceries,
    /// Rent or mortgage payments.
    Rent,
    /// Money spent supporting family members.
    FamilyMaintenance,
    /// Fuel for vehicles.
    Fuel,
    /// Anything that does not fit the other categories.
    Miscellaneous,
    /// Money set aside rather than spent.
    Savings,
}

impl Category {
    /// Every category in the order they are offered to the user.
    pub const ALL: [Category; 6] = [
        Category::Groceries,
        Category::Rent,
        Category::FamilyMaintenance,
        Category::Fuel,
        Category::Miscellaneous,
        Category::Savings,
    ];

    /// The text used to display and store the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Rent => "Rent",
            Category::FamilyMaintenance => "Family Maintenance",
            Category::Fuel => "Fuel",
            Category::Miscellaneous => "Miscellaneous",
            Category::Savings => "Savings",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parse a category from its display text.
    ///
    /// # Errors
    /// Returns [Error::InvalidCategory] if `text` does not exactly match one of
    /// the known categories.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == text)
            .ok_or_else(|| Error::InvalidCategory(text.to_owned()))
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: Error| FromSqlError::Other(Box::new(error)))
    }
}
