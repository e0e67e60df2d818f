use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::LineItem;
use crate::types::Money;
use crate::{RatioEngineError, RatioEngineResult};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodType {
    #[default]
    Annual,
    Quarterly,
    TrailingTwelveMonths,
}

/// One reporting period of normalized fundamentals.
///
/// A line item that is missing from `line_items`, or present as `None`
/// (JSON `null`), is absent. Absent is never read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalPeriod {
    /// Fiscal-year label, e.g. "2021". Must be non-empty and unique per call.
    #[serde(default)]
    pub fiscal_year: String,
    #[serde(default)]
    pub period_type: PeriodType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<NaiveDate>,
    #[serde(default)]
    pub line_items: BTreeMap<LineItem, Option<Money>>,
}

impl FundamentalPeriod {
    pub fn new(fiscal_year: impl Into<String>, period_type: PeriodType) -> Self {
        Self {
            fiscal_year: fiscal_year.into(),
            period_type,
            period_end: None,
            line_items: BTreeMap::new(),
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, item: LineItem, value: Money) -> Self {
        self.set(item, value);
        self
    }

    pub fn with_period_end(mut self, period_end: NaiveDate) -> Self {
        self.period_end = Some(period_end);
        self
    }

    pub fn set(&mut self, item: LineItem, value: Money) {
        self.line_items.insert(item, Some(value));
    }

    /// Mark a line item absent.
    pub fn clear(&mut self, item: LineItem) {
        self.line_items.remove(&item);
    }

    pub fn get(&self, item: LineItem) -> Option<Money> {
        self.line_items.get(&item).copied().flatten()
    }

    pub fn is_present(&self, item: LineItem) -> bool {
        self.get(item).is_some()
    }
}

// ---------------------------------------------------------------------------
// Sequence validation
// ---------------------------------------------------------------------------

/// Reject sequences with a blank fiscal-year label or a repeated one.
pub fn validate_periods(periods: &[FundamentalPeriod]) -> RatioEngineResult<()> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(periods.len());

    for (index, period) in periods.iter().enumerate() {
        let label = period.fiscal_year.trim();
        if label.is_empty() {
            return Err(RatioEngineError::StructuralInput {
                period: format!("period #{index}"),
                reason: "Fiscal-year identifier is missing.".into(),
            });
        }
        if let Some(first) = seen.insert(label, index) {
            return Err(RatioEngineError::StructuralInput {
                period: label.to_string(),
                reason: format!(
                    "Duplicate fiscal-year identifier (positions {first} and {index})."
                ),
            });
        }
    }
    Ok(())
}

/// True when fiscal years appear in ascending order.
///
/// Uses period end dates when both neighbours carry one, numeric labels when
/// both parse as integers, and plain string order otherwise.
pub fn fiscal_years_ascending(periods: &[FundamentalPeriod]) -> bool {
    periods.windows(2).all(|pair| {
        let (a, b) = (&pair[0], &pair[1]);
        if let (Some(da), Some(db)) = (a.period_end, b.period_end) {
            return da < db;
        }
        let (la, lb) = (a.fiscal_year.trim(), b.fiscal_year.trim());
        match (la.parse::<i64>(), lb.parse::<i64>()) {
            (Ok(ya), Ok(yb)) => ya < yb,
            _ => la < lb,
        }
    })
}
