//! Domain types for savings goals.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// A named savings target with a clamped progress amount.
///
/// Invariant: `0 <= current_amount <= target_amount`. The tracker's
/// clamped-add transaction primitive is the only mutation path, so the
/// invariant never needs re-validation here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target_amount: f64,
    pub current_amount: f64,
    pub icon: GoalIcon,
}

impl SavingsGoal {
    /// Builds a goal with no progress. Validation of name/target lives in
    /// the tracker, which is the only insertion point.
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        description: Option<String>,
        icon: GoalIcon,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            target_amount,
            current_amount: 0.0,
            icon,
        }
    }

    /// Progress toward the target in percent, for rendering.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount > 0.0 {
            (self.current_amount / self.target_amount) * 100.0
        } else {
            0.0
        }
    }

    /// Derived classification over `(current, target)`; never stored.
    pub fn status(&self) -> GoalStatus {
        if self.current_amount <= 0.0 {
            GoalStatus::Empty
        } else if self.current_amount >= self.target_amount {
            GoalStatus::Complete
        } else {
            GoalStatus::Partial
        }
    }
}

impl Identifiable for SavingsGoal {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Where a goal sits between empty and funded. Purely derived; a complete
/// goal still accepts withdrawals and moves back to partial or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    Empty,
    Partial,
    Complete,
}

/// The closed set of goal icon tags. Rendering the tag is a presentation
/// concern; the core only carries it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalIcon {
    Bike,
    Phone,
    Gift,
    Wrench,
    Saree,
}

impl GoalIcon {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "bike" => Some(GoalIcon::Bike),
            "phone" => Some(GoalIcon::Phone),
            "gift" => Some(GoalIcon::Gift),
            "wrench" => Some(GoalIcon::Wrench),
            "saree" => Some(GoalIcon::Saree),
            _ => None,
        }
    }
}

impl fmt::Display for GoalIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalIcon::Bike => "bike",
            GoalIcon::Phone => "phone",
            GoalIcon::Gift => "gift",
            GoalIcon::Wrench => "wrench",
            GoalIcon::Saree => "saree",
        };
        f.write_str(label)
    }
}
