//! Day-count metrics. All use the configured day basis (365 by default) and
//! ending balances.

use super::helpers::{checked_add, checked_mul, checked_sub, required, safe_divide};
use super::result::Computed;
use crate::config::RatioEngineConfig;
use crate::fundamentals::{FundamentalPeriod, LineItem};

/// days × balance / flow
fn days_of(
    p: &FundamentalPeriod,
    config: &RatioEngineConfig,
    balance: LineItem,
    flow: LineItem,
) -> Computed {
    let scaled = checked_mul(config.days_in_year, required(p, balance)?, balance.as_str())?;
    safe_divide(scaled, required(p, flow)?, flow.as_str())
}

pub fn days_sales_outstanding(p: &FundamentalPeriod, config: &RatioEngineConfig) -> Computed {
    days_of(p, config, LineItem::Receivables, LineItem::Revenue)
}

pub fn days_inventory_outstanding(p: &FundamentalPeriod, config: &RatioEngineConfig) -> Computed {
    days_of(p, config, LineItem::Inventory, LineItem::CostOfRevenue)
}

pub fn days_payables_outstanding(p: &FundamentalPeriod, config: &RatioEngineConfig) -> Computed {
    days_of(p, config, LineItem::Payables, LineItem::CostOfRevenue)
}

/// DSO + DIO
pub fn operating_cycle(p: &FundamentalPeriod, config: &RatioEngineConfig) -> Computed {
    checked_add(
        days_sales_outstanding(p, config)?,
        days_inventory_outstanding(p, config)?,
        "operating_cycle",
    )
}

/// Operating cycle − DPO
pub fn cash_conversion_cycle(p: &FundamentalPeriod, config: &RatioEngineConfig) -> Computed {
    checked_sub(
        operating_cycle(p, config)?,
        days_payables_outstanding(p, config)?,
        "cash_conversion_cycle",
    )
}
