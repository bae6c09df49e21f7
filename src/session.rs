//! The session aggregate: one owner for all mutable finance state.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::GoalIcon;
use crate::finance::{DailyEarningsLog, ExpenseLedger, FinanceSnapshot, SavingsGoalTracker};

/// Owns the monthly income and the three finance stores exclusively.
///
/// Screens receive a `&FinanceSession` (or `&mut` for handlers); there are
/// no ambient singletons. The summary snapshot is derived on every read and
/// never cached.
#[derive(Debug, Clone)]
pub struct FinanceSession {
    monthly_income: f64,
    pub expenses: ExpenseLedger,
    pub goals: SavingsGoalTracker,
    pub earnings: DailyEarningsLog,
}

impl FinanceSession {
    /// A fresh session: zero income, the five zeroed expense rows, no goals,
    /// no earnings.
    pub fn new() -> Self {
        Self {
            monthly_income: 0.0,
            expenses: ExpenseLedger::with_default_categories(),
            goals: SavingsGoalTracker::new(),
            earnings: DailyEarningsLog::new(),
        }
    }

    /// The demo session the app ships with: income 35 000, four seeded
    /// goals, and six seeded earnings across three months.
    pub fn demo() -> Self {
        let mut session = Self::new();
        session.monthly_income = 35000.0;

        // Prepend-ordering: create oldest first so the newest ends up at the
        // head, matching the shipped list order.
        let seeded_goals: [(&str, f64, f64, &str, GoalIcon); 4] = [
            (
                "Diwali Gifts",
                1200.0,
                4000.0,
                "For family and friends.",
                GoalIcon::Gift,
            ),
            (
                "New Saree for Maa",
                800.0,
                2500.0,
                "A special gift for her birthday.",
                GoalIcon::Saree,
            ),
            (
                "New Phone",
                5000.0,
                15000.0,
                "Save up for the latest smartphone.",
                GoalIcon::Phone,
            ),
            (
                "Bike Service",
                2000.0,
                3000.0,
                "Annual servicing for my bike.",
                GoalIcon::Wrench,
            ),
        ];
        for (name, current, target, description, icon) in seeded_goals {
            let id = session
                .goals
                .create_goal(name, target, Some(description.to_string()), icon)
                .expect("seed goals are valid");
            session.goals.apply_transaction(id, current);
        }

        let seeded_earnings: [(i32, u32, u32, f64); 6] = [
            (2025, 7, 20, 1050.0),
            (2025, 8, 16, 1300.0),
            (2025, 8, 15, 1150.0),
            (2025, 9, 3, 980.0),
            (2025, 9, 2, 1450.0),
            (2025, 9, 1, 1200.0),
        ];
        for (y, m, d, amount) in seeded_earnings {
            let date = NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid");
            session
                .earnings
                .log(date, amount)
                .expect("seed earnings are valid");
        }

        session
    }

    pub fn monthly_income(&self) -> f64 {
        self.monthly_income
    }

    /// Sets the monthly income, clamped at zero.
    pub fn set_monthly_income(&mut self, value: f64) {
        self.monthly_income = value.max(0.0);
        debug!(income = self.monthly_income, "monthly income updated");
    }

    /// Derives the current financial summary from income and the ledger.
    pub fn snapshot(&self) -> FinanceSnapshot {
        FinanceSnapshot::compute(self.monthly_income, self.expenses.total())
    }
}

impl Default for FinanceSession {
    fn default() -> Self {
        Self::new()
    }
}
