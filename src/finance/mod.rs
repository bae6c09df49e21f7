//! The finance core: three leaf stores plus a pure summary calculator.

pub mod earnings_log;
pub mod expense_ledger;
pub mod goal_tracker;
pub mod summary;

pub use earnings_log::{DailyEarningsLog, MonthBucket};
pub use expense_ledger::ExpenseLedger;
pub use goal_tracker::SavingsGoalTracker;
pub use summary::{pie_segments, FinanceSnapshot, PieChartData, PieSegment, Sector};
