use super::helpers::{checked_add, required, safe_divide};
use super::inputs::{free_cash_flow, total_debt};
use super::result::Computed;
use crate::config::RatioEngineConfig;
use crate::fundamentals::{FundamentalPeriod, LineItem};

fn operating_cash_flow(p: &FundamentalPeriod) -> Computed {
    required(p, LineItem::OperatingCashFlow)
}

pub fn operating_cash_flow_to_sales(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(operating_cash_flow(p)?, required(p, LineItem::Revenue)?, "revenue")
}

pub fn free_cash_flow_to_operating_cash_flow(
    p: &FundamentalPeriod,
    _config: &RatioEngineConfig,
) -> Computed {
    safe_divide(free_cash_flow(p)?, operating_cash_flow(p)?, "operating_cash_flow")
}

pub fn cash_flow_to_debt(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(operating_cash_flow(p)?, total_debt(p)?, "total_debt")
}

pub fn short_term_coverage(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(
        operating_cash_flow(p)?,
        required(p, LineItem::ShortTermDebt)?,
        "short_term_debt",
    )
}

pub fn capex_coverage(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(
        operating_cash_flow(p)?,
        required(p, LineItem::CapitalExpenditure)?,
        "capital_expenditure",
    )
}

/// OCF / (capex + dividends paid)
pub fn dividend_paid_and_capex_coverage(
    p: &FundamentalPeriod,
    _config: &RatioEngineConfig,
) -> Computed {
    let ocf = operating_cash_flow(p)?;
    let outflows = checked_add(
        required(p, LineItem::CapitalExpenditure)?,
        required(p, LineItem::DividendsPaid)?,
        "capex_and_dividends",
    )?;
    safe_divide(ocf, outflows, "capex_and_dividends")
}

pub fn dividend_payout_ratio(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(
        required(p, LineItem::DividendsPaid)?,
        required(p, LineItem::NetIncome)?,
        "net_income",
    )
}
