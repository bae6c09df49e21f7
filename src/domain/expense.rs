//! Domain types for the fixed monthly expense rows.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// One monthly expense row. The ledger seeds exactly one row per
/// [`ExpenseCategory`] at startup; rows are mutated in place and never
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub category: ExpenseCategory,
    pub display_name: String,
    /// Always >= 0; mutations clamp rather than reject.
    pub amount: f64,
}

impl Expense {
    pub fn new(category: ExpenseCategory, display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            display_name: display_name.into(),
            amount: 0.0,
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// The closed set of expense categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    School,
    Rent,
    Household,
    Transport,
    Other,
}

impl ExpenseCategory {
    /// All categories, in the order the ledger seeds them.
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::School,
        ExpenseCategory::Rent,
        ExpenseCategory::Household,
        ExpenseCategory::Transport,
        ExpenseCategory::Other,
    ];

    /// Default row label for each category, matching the seeded app data.
    pub fn default_display_name(self) -> &'static str {
        match self {
            ExpenseCategory::School => "Children's School Fees",
            ExpenseCategory::Rent => "House Rent",
            ExpenseCategory::Household => "Household Expenses",
            ExpenseCategory::Transport => "Transportation or Fuel",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "school" => Some(ExpenseCategory::School),
            "rent" => Some(ExpenseCategory::Rent),
            "household" => Some(ExpenseCategory::Household),
            "transport" => Some(ExpenseCategory::Transport),
            "other" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseCategory::School => "school",
            ExpenseCategory::Rent => "rent",
            ExpenseCategory::Household => "household",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Other => "other",
        };
        f.write_str(label)
    }
}
