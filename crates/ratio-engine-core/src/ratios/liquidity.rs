use rust_decimal::Decimal;

use super::helpers::{checked_sub, required, safe_divide};
use super::result::Computed;
use crate::config::RatioEngineConfig;
use crate::fundamentals::{FundamentalPeriod, LineItem};

/// Current assets / current liabilities.
pub fn current_ratio(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(
        required(p, LineItem::CurrentAssets)?,
        required(p, LineItem::CurrentLiabilities)?,
        "current_liabilities",
    )
}

/// (Current assets − inventory) / current liabilities.
///
/// Inventory is only a deduction here: a period that reports no inventory has
/// nothing to exclude, so the ratio stays defined.
pub fn quick_ratio(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    let inventory = p.get(LineItem::Inventory).unwrap_or(Decimal::ZERO);
    let quick_assets = checked_sub(required(p, LineItem::CurrentAssets)?, inventory, "quick_assets")?;
    safe_divide(
        quick_assets,
        required(p, LineItem::CurrentLiabilities)?,
        "current_liabilities",
    )
}

/// Cash and equivalents / current liabilities.
pub fn cash_ratio(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(
        required(p, LineItem::CashAndEquivalents)?,
        required(p, LineItem::CurrentLiabilities)?,
        "current_liabilities",
    )
}
