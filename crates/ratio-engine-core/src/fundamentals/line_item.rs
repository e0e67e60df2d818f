use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::RatioEngineError;

/// Fixed vocabulary of normalized statement lines a period can carry.
///
/// Outflows (`CapitalExpenditure`, `DividendsPaid`) are positive magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItem {
    // Income statement
    Revenue,
    CostOfRevenue,
    GrossProfit,
    OperatingIncome,
    Ebit,
    Ebitda,
    DepreciationAndAmortization,
    InterestExpense,
    IncomeBeforeTax,
    IncomeTaxExpense,
    NetIncome,
    // Balance sheet
    CashAndEquivalents,
    ShortTermInvestments,
    Receivables,
    Inventory,
    CurrentAssets,
    NetPpe,
    TotalAssets,
    Payables,
    CurrentLiabilities,
    ShortTermDebt,
    LongTermDebt,
    TotalDebt,
    TotalEquity,
    // Cash-flow statement
    OperatingCashFlow,
    CapitalExpenditure,
    DividendsPaid,
    // Market data
    SharesOutstanding,
    SharePrice,
}

impl LineItem {
    pub const ALL: [LineItem; 29] = [
        Self::Revenue,
        Self::CostOfRevenue,
        Self::GrossProfit,
        Self::OperatingIncome,
        Self::Ebit,
        Self::Ebitda,
        Self::DepreciationAndAmortization,
        Self::InterestExpense,
        Self::IncomeBeforeTax,
        Self::IncomeTaxExpense,
        Self::NetIncome,
        Self::CashAndEquivalents,
        Self::ShortTermInvestments,
        Self::Receivables,
        Self::Inventory,
        Self::CurrentAssets,
        Self::NetPpe,
        Self::TotalAssets,
        Self::Payables,
        Self::CurrentLiabilities,
        Self::ShortTermDebt,
        Self::LongTermDebt,
        Self::TotalDebt,
        Self::TotalEquity,
        Self::OperatingCashFlow,
        Self::CapitalExpenditure,
        Self::DividendsPaid,
        Self::SharesOutstanding,
        Self::SharePrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::CostOfRevenue => "cost_of_revenue",
            Self::GrossProfit => "gross_profit",
            Self::OperatingIncome => "operating_income",
            Self::Ebit => "ebit",
            Self::Ebitda => "ebitda",
            Self::DepreciationAndAmortization => "depreciation_and_amortization",
            Self::InterestExpense => "interest_expense",
            Self::IncomeBeforeTax => "income_before_tax",
            Self::IncomeTaxExpense => "income_tax_expense",
            Self::NetIncome => "net_income",
            Self::CashAndEquivalents => "cash_and_equivalents",
            Self::ShortTermInvestments => "short_term_investments",
            Self::Receivables => "receivables",
            Self::Inventory => "inventory",
            Self::CurrentAssets => "current_assets",
            Self::NetPpe => "net_ppe",
            Self::TotalAssets => "total_assets",
            Self::Payables => "payables",
            Self::CurrentLiabilities => "current_liabilities",
            Self::ShortTermDebt => "short_term_debt",
            Self::LongTermDebt => "long_term_debt",
            Self::TotalDebt => "total_debt",
            Self::TotalEquity => "total_equity",
            Self::OperatingCashFlow => "operating_cash_flow",
            Self::CapitalExpenditure => "capital_expenditure",
            Self::DividendsPaid => "dividends_paid",
            Self::SharesOutstanding => "shares_outstanding",
            Self::SharePrice => "share_price",
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineItem {
    type Err = RatioEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|item| item.as_str() == s)
            .ok_or_else(|| RatioEngineError::InvalidInput {
                field: "line_item".into(),
                reason: format!("Unknown line item '{s}'."),
            })
    }
}
