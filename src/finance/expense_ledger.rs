//! The fixed set of monthly expense categories and their amounts.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{Expense, ExpenseCategory};

/// Holds one row per [`ExpenseCategory`]. Rows are created once, mutated in
/// place, and never deleted, so totals stay an O(n) fold over five items.
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    /// An empty ledger with no rows at all. Most callers want
    /// [`ExpenseLedger::with_default_categories`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the five fixed category rows, each with amount 0.
    pub fn with_default_categories() -> Self {
        let expenses = ExpenseCategory::ALL
            .into_iter()
            .map(|category| Expense::new(category, category.default_display_name()))
            .collect();
        Self { expenses }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn find(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    /// Finds the row for a category. Seeded ledgers have exactly one row per
    /// category.
    pub fn find_by_category(&self, category: ExpenseCategory) -> Option<&Expense> {
        self.expenses
            .iter()
            .find(|expense| expense.category == category)
    }

    /// Adds `delta` to the row's amount, clamping at zero. There is no upper
    /// bound. An unknown id is a silent no-op, never a failure.
    pub fn adjust(&mut self, id: Uuid, delta: f64) {
        match self.expenses.iter_mut().find(|expense| expense.id == id) {
            Some(expense) => {
                expense.amount = (expense.amount + delta).max(0.0);
                debug!(category = %expense.category, amount = expense.amount, "expense adjusted");
            }
            None => warn!(%id, "adjust ignored: unknown expense id"),
        }
    }

    /// Sets the row's amount to `max(0, value)`. An unknown id is a silent
    /// no-op.
    pub fn set_amount(&mut self, id: Uuid, value: f64) {
        match self.expenses.iter_mut().find(|expense| expense.id == id) {
            Some(expense) => {
                expense.amount = value.max(0.0);
                debug!(category = %expense.category, amount = expense.amount, "expense set");
            }
            None => warn!(%id, "set_amount ignored: unknown expense id"),
        }
    }

    /// Sum of all row amounts.
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }
}
