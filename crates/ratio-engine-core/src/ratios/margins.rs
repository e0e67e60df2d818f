use super::helpers::{required, safe_divide};
use super::inputs::{gross_profit, income_taxes, operating_income};
use super::result::Computed;
use crate::config::RatioEngineConfig;
use crate::fundamentals::{FundamentalPeriod, LineItem};

fn over_revenue(p: &FundamentalPeriod, numerator: Computed) -> Computed {
    let numerator = numerator?;
    safe_divide(numerator, required(p, LineItem::Revenue)?, "revenue")
}

pub fn gross_profit_margin(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    over_revenue(p, gross_profit(p))
}

pub fn operating_profit_margin(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    over_revenue(p, operating_income(p))
}

pub fn pretax_profit_margin(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    over_revenue(p, required(p, LineItem::IncomeBeforeTax))
}

pub fn net_profit_margin(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    over_revenue(p, required(p, LineItem::NetIncome))
}

/// Income taxes / pre-tax income.
pub fn effective_tax_rate(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(
        income_taxes(p)?,
        required(p, LineItem::IncomeBeforeTax)?,
        "income_before_tax",
    )
}

// ---------------------------------------------------------------------------
// DuPont decomposition: NI/EBT × EBT/EBIT × EBIT/revenue = net margin
// ---------------------------------------------------------------------------

pub fn net_income_per_ebt(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(
        required(p, LineItem::NetIncome)?,
        required(p, LineItem::IncomeBeforeTax)?,
        "income_before_tax",
    )
}

pub fn ebt_per_ebit(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(
        required(p, LineItem::IncomeBeforeTax)?,
        required(p, LineItem::Ebit)?,
        "ebit",
    )
}

pub fn ebit_per_revenue(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    over_revenue(p, required(p, LineItem::Ebit))
}
