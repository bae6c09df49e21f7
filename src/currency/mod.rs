//! Currency display formatting.
//!
//! Amounts render as a symbol prefix plus grouped integer units. The app's
//! reference locale is `en-IN`, whose lakh/crore grouping is 2-2-3 from the
//! right (`₹1,00,000`), not the Western 3-3-3.

use serde::{Deserialize, Serialize};

/// Digit-grouping style for integer amounts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    /// 2-2-3 grouping from the right: 1,00,000.
    #[default]
    Indian,
    /// 3-3-3 grouping: 100,000.
    Western,
}

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter {
    fn format_amount(&self, amount: f64) -> String;
}

/// Symbol-prefix formatter with configurable grouping.
#[derive(Debug, Clone)]
pub struct SymbolFormatter {
    pub symbol: String,
    pub grouping: DigitGrouping,
}

impl SymbolFormatter {
    pub fn new(symbol: impl Into<String>, grouping: DigitGrouping) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
        }
    }

    /// The app's default: rupee symbol, Indian grouping.
    pub fn rupees() -> Self {
        Self::new("₹", DigitGrouping::Indian)
    }
}

impl CurrencyFormatter for SymbolFormatter {
    fn format_amount(&self, amount: f64) -> String {
        let rounded = amount.round();
        let negative = rounded < 0.0;
        let grouped = group_digits(rounded.abs() as u64, self.grouping);
        if negative {
            format!("-{}{}", self.symbol, grouped)
        } else {
            format!("{}{}", self.symbol, grouped)
        }
    }
}

/// Groups an integer's digits per the given style.
fn group_digits(value: u64, grouping: DigitGrouping) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    // Split off the last three digits, then group the head.
    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_group = match grouping {
        DigitGrouping::Indian => 2,
        DigitGrouping::Western => 3,
    };

    let head_bytes = head.as_bytes();
    let mut parts: Vec<&str> = Vec::new();
    let mut end = head_bytes.len();
    while end > head_group {
        let start = end - head_group;
        parts.push(&head[start..end]);
        end = start;
    }
    parts.push(&head[..end]);
    parts.reverse();

    format!("{},{}", parts.join(","), tail)
}
