//! Per-share and price-based ratios. Market cap is share price × shares
//! outstanding as reported on the period.

use super::helpers::{required, safe_divide};
use super::inputs::{ebitda, enterprise_value, free_cash_flow, market_cap};
use super::result::Computed;
use crate::config::RatioEngineConfig;
use crate::fundamentals::{FundamentalPeriod, LineItem};

fn per_share(p: &FundamentalPeriod, amount: Computed) -> Computed {
    let amount = amount?;
    safe_divide(
        amount,
        required(p, LineItem::SharesOutstanding)?,
        "shares_outstanding",
    )
}

pub fn operating_cash_flow_per_share(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    per_share(p, required(p, LineItem::OperatingCashFlow))
}

pub fn free_cash_flow_per_share(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    per_share(p, free_cash_flow(p))
}

pub fn cash_per_share(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    per_share(p, required(p, LineItem::CashAndEquivalents))
}

fn price_to(p: &FundamentalPeriod, base: Computed, context: &str) -> Computed {
    let cap = market_cap(p)?;
    safe_divide(cap, base?, context)
}

pub fn price_to_book(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    price_to(p, required(p, LineItem::TotalEquity), "total_equity")
}

pub fn price_to_sales(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    price_to(p, required(p, LineItem::Revenue), "revenue")
}

pub fn price_to_earnings(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    price_to(p, required(p, LineItem::NetIncome), "net_income")
}

pub fn price_to_free_cash_flow(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    price_to(p, free_cash_flow(p), "free_cash_flow")
}

pub fn price_to_operating_cash_flow(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    price_to(p, required(p, LineItem::OperatingCashFlow), "operating_cash_flow")
}

/// Dividends paid / market cap.
pub fn dividend_yield(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(required(p, LineItem::DividendsPaid)?, market_cap(p)?, "market_cap")
}

/// EV / EBITDA
pub fn enterprise_value_multiple(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(enterprise_value(p)?, ebitda(p)?, "ebitda")
}
