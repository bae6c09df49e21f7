//! Domain types for the daily income log.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// One dated income record. Immutable once created; the log never edits or
/// deletes entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyEarning {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
}

impl DailyEarning {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
        }
    }

    /// The sortable month bucket this entry belongs to.
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

impl Identifiable for DailyEarning {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Sortable `(year, month)` bucket key for grouping earnings.
///
/// Grouping and ordering operate on this key; the human-readable label
/// ("September 2025") is only produced at the display boundary. Sorting the
/// labels themselves would order "September" before "August" within a year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Full English month name, matching the app's month headers.
    pub fn month_name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        NAMES[(self.month as usize).saturating_sub(1).min(11)]
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}
