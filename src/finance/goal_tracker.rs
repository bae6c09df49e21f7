//! Savings goals with clamped deposit/withdraw progress.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{GoalIcon, SavingsGoal};
use crate::errors::FinanceError;

/// Ordered, most-recent-first list of savings goals.
///
/// `apply_transaction` is the single mutation primitive for progress:
/// deposits and withdrawals both go through one clamped add, which makes the
/// tracker the sole authority on the legal `[0, target]` range. Callers
/// never pre-validate amounts against the remaining room.
#[derive(Debug, Clone, Default)]
pub struct SavingsGoalTracker {
    goals: Vec<SavingsGoal>,
}

impl SavingsGoalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Goals in display order (most recently created first).
    pub fn goals(&self) -> &[SavingsGoal] {
        &self.goals
    }

    pub fn find(&self, id: Uuid) -> Option<&SavingsGoal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// Creates a goal with zero progress at the head of the list.
    ///
    /// Rejected (nothing inserted) when the name is empty or the target is
    /// not strictly positive. Duplicate names are allowed.
    pub fn create_goal(
        &mut self,
        name: impl Into<String>,
        target_amount: f64,
        description: Option<String>,
        icon: GoalIcon,
    ) -> Result<Uuid, FinanceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FinanceError::InvalidGoal("name must not be empty".into()));
        }
        if target_amount <= 0.0 {
            return Err(FinanceError::InvalidGoal(format!(
                "target amount must be positive, got {target_amount}"
            )));
        }

        let goal = SavingsGoal::new(name, target_amount, description, icon);
        let id = goal.id;
        info!(%id, name = %goal.name, target = goal.target_amount, "goal created");
        self.goals.insert(0, goal);
        Ok(id)
    }

    /// Applies a signed amount to a goal's progress, clamped to
    /// `[0, target]`. Positive amounts deposit, negative amounts withdraw.
    /// An unknown id is a silent no-op.
    pub fn apply_transaction(&mut self, goal_id: Uuid, signed_amount: f64) {
        match self.goals.iter_mut().find(|goal| goal.id == goal_id) {
            Some(goal) => {
                goal.current_amount =
                    (goal.current_amount + signed_amount).clamp(0.0, goal.target_amount);
                debug!(
                    id = %goal.id,
                    amount = signed_amount,
                    current = goal.current_amount,
                    "goal transaction applied"
                );
            }
            None => warn!(id = %goal_id, "transaction ignored: unknown goal id"),
        }
    }

    /// Sum of progress across all goals.
    pub fn total_saved(&self) -> f64 {
        self.goals.iter().map(|goal| goal.current_amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GoalStatus;

    #[test]
    fn create_goal_prepends_with_zero_progress() {
        let mut tracker = SavingsGoalTracker::new();
        tracker
            .create_goal("New Phone", 15000.0, None, GoalIcon::Phone)
            .unwrap();
        tracker
            .create_goal("Diwali Gifts", 4000.0, None, GoalIcon::Gift)
            .unwrap();

        let names: Vec<&str> = tracker.goals().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Diwali Gifts", "New Phone"]);
        assert!(tracker.goals().iter().all(|g| g.current_amount == 0.0));
    }

    #[test]
    fn create_goal_rejects_empty_name_and_non_positive_target() {
        let mut tracker = SavingsGoalTracker::new();
        assert!(tracker
            .create_goal("", 100.0, None, GoalIcon::Gift)
            .is_err());
        assert!(tracker
            .create_goal("   ", 100.0, None, GoalIcon::Gift)
            .is_err());
        assert!(tracker
            .create_goal("Bike", 0.0, None, GoalIcon::Bike)
            .is_err());
        assert!(tracker
            .create_goal("Bike", -5.0, None, GoalIcon::Bike)
            .is_err());
        assert!(tracker.goals().is_empty());
    }

    #[test]
    fn over_deposit_lands_exactly_on_target() {
        let mut tracker = SavingsGoalTracker::new();
        let id = tracker
            .create_goal("Bike Service", 3000.0, None, GoalIcon::Wrench)
            .unwrap();
        tracker.apply_transaction(id, 2000.0);
        tracker.apply_transaction(id, 5000.0);
        assert_eq!(tracker.find(id).unwrap().current_amount, 3000.0);
        assert_eq!(tracker.find(id).unwrap().status(), GoalStatus::Complete);
    }

    #[test]
    fn over_withdraw_lands_exactly_on_zero() {
        let mut tracker = SavingsGoalTracker::new();
        let id = tracker
            .create_goal("New Saree for Maa", 2500.0, None, GoalIcon::Saree)
            .unwrap();
        tracker.apply_transaction(id, 800.0);
        tracker.apply_transaction(id, -2000.0);
        assert_eq!(tracker.find(id).unwrap().current_amount, 0.0);
        assert_eq!(tracker.find(id).unwrap().status(), GoalStatus::Empty);
    }

    #[test]
    fn clamp_invariant_holds_under_mixed_transactions() {
        let mut tracker = SavingsGoalTracker::new();
        let id = tracker
            .create_goal("Stress", 1000.0, None, GoalIcon::Gift)
            .unwrap();
        for amount in [300.0, -50.0, 900.0, -5000.0, 250.0, 249.0, 1.5, -0.5] {
            tracker.apply_transaction(id, amount);
            let goal = tracker.find(id).unwrap();
            assert!(goal.current_amount >= 0.0);
            assert!(goal.current_amount <= goal.target_amount);
        }
    }

    #[test]
    fn complete_goal_still_accepts_withdrawals() {
        let mut tracker = SavingsGoalTracker::new();
        let id = tracker
            .create_goal("Phone", 1000.0, None, GoalIcon::Phone)
            .unwrap();
        tracker.apply_transaction(id, 1000.0);
        assert_eq!(tracker.find(id).unwrap().status(), GoalStatus::Complete);
        // deposit beyond target is a no-op
        tracker.apply_transaction(id, 10.0);
        assert_eq!(tracker.find(id).unwrap().current_amount, 1000.0);
        tracker.apply_transaction(id, -400.0);
        assert_eq!(tracker.find(id).unwrap().status(), GoalStatus::Partial);
    }

    #[test]
    fn unknown_goal_id_is_a_no_op() {
        let mut tracker = SavingsGoalTracker::new();
        tracker
            .create_goal("Only", 500.0, None, GoalIcon::Gift)
            .unwrap();
        tracker.apply_transaction(Uuid::new_v4(), 100.0);
        assert_eq!(tracker.total_saved(), 0.0);
    }

    #[test]
    fn total_saved_sums_across_goals() {
        let mut tracker = SavingsGoalTracker::new();
        let a = tracker
            .create_goal("A", 1000.0, None, GoalIcon::Gift)
            .unwrap();
        let b = tracker
            .create_goal("B", 2000.0, None, GoalIcon::Bike)
            .unwrap();
        tracker.apply_transaction(a, 400.0);
        tracker.apply_transaction(b, 1500.0);
        assert_eq!(tracker.total_saved(), 1900.0);
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let mut tracker = SavingsGoalTracker::new();
        tracker
            .create_goal("Phone", 1000.0, None, GoalIcon::Phone)
            .unwrap();
        tracker
            .create_goal("Phone", 2000.0, None, GoalIcon::Phone)
            .unwrap();
        assert_eq!(tracker.goals().len(), 2);
    }
}
