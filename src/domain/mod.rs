//! Plain data types shared by the finance stores.

pub mod common;
pub mod earning;
pub mod expense;
pub mod goal;

pub use common::Identifiable;
pub use earning::{DailyEarning, MonthKey};
pub use expense::{Expense, ExpenseCategory};
pub use goal::{GoalIcon, GoalStatus, SavingsGoal};
