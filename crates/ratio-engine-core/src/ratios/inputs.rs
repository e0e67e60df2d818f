//! Line items a formula may need that a period does not always report
//! directly. The reported line wins; otherwise it is derived from the same
//! period's components.

use super::helpers::{checked_add, checked_mul, checked_sub, required};
use super::result::Computed;
use crate::fundamentals::{FundamentalPeriod, LineItem};

fn reported_or(
    period: &FundamentalPeriod,
    item: LineItem,
    derive: impl FnOnce() -> Computed,
) -> Computed {
    match period.get(item) {
        Some(v) => Ok(v),
        None => derive(),
    }
}

/// Revenue − cost of revenue.
pub(crate) fn gross_profit(p: &FundamentalPeriod) -> Computed {
    reported_or(p, LineItem::GrossProfit, || {
        checked_sub(
            required(p, LineItem::Revenue)?,
            required(p, LineItem::CostOfRevenue)?,
            "gross_profit",
        )
    })
}

/// Falls back to EBIT.
pub(crate) fn operating_income(p: &FundamentalPeriod) -> Computed {
    reported_or(p, LineItem::OperatingIncome, || required(p, LineItem::Ebit))
}

/// EBIT + D&A.
pub(crate) fn ebitda(p: &FundamentalPeriod) -> Computed {
    reported_or(p, LineItem::Ebitda, || {
        checked_add(
            required(p, LineItem::Ebit)?,
            required(p, LineItem::DepreciationAndAmortization)?,
            "ebitda",
        )
    })
}

/// Pre-tax income − net income.
pub(crate) fn income_taxes(p: &FundamentalPeriod) -> Computed {
    reported_or(p, LineItem::IncomeTaxExpense, || {
        checked_sub(
            required(p, LineItem::IncomeBeforeTax)?,
            required(p, LineItem::NetIncome)?,
            "income_taxes",
        )
    })
}

/// Short-term + long-term debt.
pub(crate) fn total_debt(p: &FundamentalPeriod) -> Computed {
    reported_or(p, LineItem::TotalDebt, || {
        checked_add(
            required(p, LineItem::ShortTermDebt)?,
            required(p, LineItem::LongTermDebt)?,
            "total_debt",
        )
    })
}

pub(crate) fn free_cash_flow(p: &FundamentalPeriod) -> Computed {
    checked_sub(
        required(p, LineItem::OperatingCashFlow)?,
        required(p, LineItem::CapitalExpenditure)?,
        "free_cash_flow",
    )
}

pub(crate) fn market_cap(p: &FundamentalPeriod) -> Computed {
    checked_mul(
        required(p, LineItem::SharePrice)?,
        required(p, LineItem::SharesOutstanding)?,
        "market_cap",
    )
}

/// Market cap + total debt − cash.
pub(crate) fn enterprise_value(p: &FundamentalPeriod) -> Computed {
    let with_debt = checked_add(market_cap(p)?, total_debt(p)?, "enterprise_value")?;
    checked_sub(
        with_debt,
        required(p, LineItem::CashAndEquivalents)?,
        "enterprise_value",
    )
}
