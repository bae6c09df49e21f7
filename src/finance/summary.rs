//! Pure derivation of the financial summary and pie-chart geometry.
//!
//! Nothing here mutates or draws; consumers take the snapshot and sector
//! descriptors and render them however they like.

use serde::{Deserialize, Serialize};

/// Share of positive savings suggested for investment.
const INVESTMENT_SHARE: f64 = 0.3;
/// Days assumed per month when deriving the daily saving target.
const DAYS_PER_MONTH: f64 = 30.0;

/// Center of the pie in the 100x100 viewbox the renderer uses.
pub const PIE_CENTER: (f64, f64) = (50.0, 50.0);
pub const PIE_RADIUS: f64 = 45.0;

/// Derived income/expense/savings figures. Recomputed on every read, never
/// stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FinanceSnapshot {
    pub monthly_income: f64,
    pub total_expenses: f64,
    /// May be negative; overspending is reported, not clamped.
    pub savings: f64,
    pub suggested_investment: f64,
    pub daily_saving_goal: f64,
}

impl FinanceSnapshot {
    /// Computes the snapshot from income and the ledger total.
    ///
    /// All branches are total: negative savings yield zero for both the
    /// suggested investment and the daily goal.
    pub fn compute(monthly_income: f64, total_expenses: f64) -> Self {
        let savings = monthly_income - total_expenses;
        let suggested_investment = if savings > 0.0 {
            savings * INVESTMENT_SHARE
        } else {
            0.0
        };
        let daily_saving_goal = if savings > 0.0 {
            (savings - suggested_investment) / DAYS_PER_MONTH
        } else {
            0.0
        };
        Self {
            monthly_income,
            total_expenses,
            savings,
            suggested_investment,
            daily_saving_goal,
        }
    }

    /// The expenses-vs-savings breakdown for this snapshot.
    pub fn pie_chart(&self) -> PieChartData {
        pie_segments(self.total_expenses, self.savings)
    }
}

/// A circular-sector descriptor: everything a renderer needs to draw one
/// slice, with angles in degrees measured clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Sector {
    pub center: (f64, f64),
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// One labeled pie slice with its share of the whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PieSegment {
    pub label: String,
    pub value: f64,
    pub sector: Sector,
}

/// Either real slices or the no-data sentinel (both inputs zero). The
/// sentinel carries no arc geometry at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PieChartData {
    NoData,
    Segments(Vec<PieSegment>),
}

/// Computes the two-slice expenses/savings pie.
///
/// Savings are floored at zero for display purposes. Angular spans are
/// `value / total * 360` accumulated in order, so the spans of all slices
/// always sum to exactly 360 degrees.
pub fn pie_segments(total_expenses: f64, savings: f64) -> PieChartData {
    let values = [
        ("expenses", total_expenses),
        ("savings", savings.max(0.0)),
    ];
    let total: f64 = values.iter().map(|(_, value)| value).sum();
    if total == 0.0 {
        return PieChartData::NoData;
    }

    let mut segments = Vec::with_capacity(values.len());
    let mut cumulative = 0.0;
    for (label, value) in values {
        let span = value / total * 360.0;
        let start_angle = cumulative;
        cumulative += span;
        segments.push(PieSegment {
            label: label.to_string(),
            value,
            sector: Sector {
                center: PIE_CENTER,
                radius: PIE_RADIUS,
                start_angle,
                end_angle: cumulative,
            },
        });
    }
    PieChartData::Segments(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_matches_reference_figures() {
        let snapshot = FinanceSnapshot::compute(35000.0, 20000.0);
        assert_eq!(snapshot.savings, 15000.0);
        assert_eq!(snapshot.suggested_investment, 4500.0);
        assert_eq!(snapshot.daily_saving_goal, 350.0);
    }

    #[test]
    fn negative_savings_zero_the_derived_targets() {
        let snapshot = FinanceSnapshot::compute(10000.0, 15000.0);
        assert_eq!(snapshot.savings, -5000.0);
        assert_eq!(snapshot.suggested_investment, 0.0);
        assert_eq!(snapshot.daily_saving_goal, 0.0);
    }

    #[test]
    fn zero_inputs_produce_the_no_data_sentinel() {
        assert_eq!(pie_segments(0.0, 0.0), PieChartData::NoData);
        // Negative savings alone still mean no drawable value.
        assert_eq!(pie_segments(0.0, -500.0), PieChartData::NoData);
    }

    #[test]
    fn segment_spans_sum_to_a_full_circle() {
        let PieChartData::Segments(segments) = pie_segments(300.0, 700.0) else {
            panic!("expected segments");
        };
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].label, "expenses");
        assert_eq!(segments[1].label, "savings");

        let total_span: f64 = segments
            .iter()
            .map(|s| s.sector.end_angle - s.sector.start_angle)
            .sum();
        assert_eq!(total_span, 360.0);
        // Contiguous: each slice starts where the previous one ended.
        assert_eq!(segments[0].sector.start_angle, 0.0);
        assert_eq!(segments[0].sector.end_angle, segments[1].sector.start_angle);
        assert_eq!(segments[1].sector.end_angle, 360.0);
        // 300/1000 of the circle.
        assert_eq!(segments[0].sector.end_angle, 108.0);
    }

    #[test]
    fn sectors_carry_the_renderer_coordinate_space() {
        let PieChartData::Segments(segments) = pie_segments(100.0, 0.0) else {
            panic!("expected segments");
        };
        assert_eq!(segments[0].sector.center, PIE_CENTER);
        assert_eq!(segments[0].sector.radius, PIE_RADIUS);
        // A single non-zero value owns the whole circle.
        assert_eq!(segments[0].sector.start_angle, 0.0);
        assert_eq!(segments[0].sector.end_angle, 360.0);
        assert_eq!(segments[1].sector.start_angle, 360.0);
        assert_eq!(segments[1].sector.end_angle, 360.0);
    }
}
