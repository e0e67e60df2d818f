use super::helpers::{checked_sub, required, safe_divide};
use super::result::Computed;
use crate::config::RatioEngineConfig;
use crate::fundamentals::{FundamentalPeriod, LineItem};

pub fn return_on_assets(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(
        required(p, LineItem::NetIncome)?,
        required(p, LineItem::TotalAssets)?,
        "total_assets",
    )
}

/// Net income / total equity. Negative equity gives a sign-flipped result.
pub fn return_on_equity(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(
        required(p, LineItem::NetIncome)?,
        required(p, LineItem::TotalEquity)?,
        "total_equity",
    )
}

/// EBIT / (total assets − current liabilities).
pub fn return_on_capital_employed(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    let ebit = required(p, LineItem::Ebit)?;
    let capital_employed = checked_sub(
        required(p, LineItem::TotalAssets)?,
        required(p, LineItem::CurrentLiabilities)?,
        "capital_employed",
    )?;
    safe_divide(ebit, capital_employed, "capital_employed")
}
