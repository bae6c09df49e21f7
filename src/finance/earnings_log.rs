//! Daily income log with month-bucketed aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{DailyEarning, MonthKey};
use crate::errors::FinanceError;

/// One month's worth of earnings: the entries in storage order plus their
/// running total. Buckets keep insertion order; sorting by date is a
/// display-side concern via [`MonthBucket::entries_by_date_desc`].
#[derive(Debug, Clone, Default)]
pub struct MonthBucket {
    pub entries: Vec<DailyEarning>,
    pub total: f64,
}

impl MonthBucket {
    /// Entries sorted most-recent-date-first for rendering.
    pub fn entries_by_date_desc(&self) -> Vec<&DailyEarning> {
        let mut sorted: Vec<&DailyEarning> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}

/// Most-recent-first list of immutable dated income records.
#[derive(Debug, Clone, Default)]
pub struct DailyEarningsLog {
    entries: Vec<DailyEarning>,
}

impl DailyEarningsLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat entries in storage order (most recently logged first),
    /// independent of any month grouping.
    pub fn entries(&self) -> &[DailyEarning] {
        &self.entries
    }

    /// Prepends a new entry. Rejected (nothing inserted) unless the amount
    /// is strictly positive.
    pub fn log(&mut self, date: NaiveDate, amount: f64) -> Result<Uuid, FinanceError> {
        if amount <= 0.0 {
            return Err(FinanceError::InvalidEarning(format!(
                "amount must be positive, got {amount}"
            )));
        }
        let entry = DailyEarning::new(date, amount);
        let id = entry.id;
        debug!(%id, %date, amount, "earning logged");
        self.entries.insert(0, entry);
        Ok(id)
    }

    /// Partitions all entries into `(year, month)` buckets.
    ///
    /// The key is the sortable [`MonthKey`] pair, never a formatted label,
    /// so ordering and grouping cannot disagree with each other. Entries
    /// inside a bucket are not sorted here.
    pub fn group_by_month(&self) -> BTreeMap<MonthKey, MonthBucket> {
        let mut groups: BTreeMap<MonthKey, MonthBucket> = BTreeMap::new();
        for entry in &self.entries {
            let bucket = groups.entry(entry.month_key()).or_default();
            bucket.entries.push(entry.clone());
            bucket.total += entry.amount;
        }
        groups
    }

    /// Month keys ordered most-recent-first. `(year, month)` pairs are
    /// unique keys, so no tie-break is needed.
    pub fn month_order(&self) -> Vec<MonthKey> {
        self.group_by_month().keys().rev().copied().collect()
    }

    /// The largest month total, for proportional bar rendering. Zero when
    /// the log is empty.
    pub fn max_month_total(&self) -> f64 {
        self.group_by_month()
            .values()
            .map(|bucket| bucket.total)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_log() -> DailyEarningsLog {
        let mut log = DailyEarningsLog::new();
        log.log(date(2025, 9, 1), 1200.0).unwrap();
        log.log(date(2025, 9, 2), 1450.0).unwrap();
        log.log(date(2025, 8, 15), 1150.0).unwrap();
        log
    }

    #[test]
    fn log_rejects_non_positive_amounts() {
        let mut log = DailyEarningsLog::new();
        assert!(log.log(date(2025, 9, 1), 0.0).is_err());
        assert!(log.log(date(2025, 9, 1), -10.0).is_err());
        assert!(log.entries().is_empty());
    }

    #[test]
    fn entries_are_stored_most_recent_first() {
        let log = sample_log();
        let dates: Vec<NaiveDate> = log.entries().iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            [date(2025, 8, 15), date(2025, 9, 2), date(2025, 9, 1)]
        );
    }

    #[test]
    fn groups_into_months_with_totals() {
        let log = sample_log();
        let groups = log.group_by_month();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&MonthKey::new(2025, 9)].total, 2650.0);
        assert_eq!(groups[&MonthKey::new(2025, 8)].total, 1150.0);
    }

    #[test]
    fn month_order_is_most_recent_first() {
        let log = sample_log();
        let labels: Vec<String> = log.month_order().iter().map(MonthKey::to_string).collect();
        assert_eq!(labels, ["September 2025", "August 2025"]);
    }

    #[test]
    fn bucket_display_sort_is_descending_by_date() {
        let log = sample_log();
        let groups = log.group_by_month();
        let september = &groups[&MonthKey::new(2025, 9)];
        let dates: Vec<NaiveDate> = september
            .entries_by_date_desc()
            .iter()
            .map(|e| e.date)
            .collect();
        assert_eq!(dates, [date(2025, 9, 2), date(2025, 9, 1)]);
    }

    #[test]
    fn max_month_total_tracks_the_largest_bucket() {
        let log = sample_log();
        assert_eq!(log.max_month_total(), 2650.0);
        assert_eq!(DailyEarningsLog::new().max_month_total(), 0.0);
    }
}
