use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::result::{Computed, RatioResult};
use super::{cash_flow, efficiency, leverage, liquidity, margins, returns, turnover, valuation};
use crate::config::RatioEngineConfig;
use crate::fundamentals::FundamentalPeriod;
use crate::RatioEngineError;

/// A pure function of one period's line items.
pub type Formula = fn(&FundamentalPeriod, &RatioEngineConfig) -> Computed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioCategory {
    Liquidity,
    Efficiency,
    Profitability,
    Returns,
    Leverage,
    Turnover,
    CashFlow,
    PerShare,
    Valuation,
}

/// Every ratio the engine knows. Variant order is registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioName {
    // Liquidity
    CurrentRatio,
    QuickRatio,
    CashRatio,

    // Efficiency
    DaysSalesOutstanding,
    DaysInventoryOutstanding,
    OperatingCycle,
    DaysPayablesOutstanding,
    CashConversionCycle,

    // Profitability
    GrossProfitMargin,
    OperatingProfitMargin,
    PretaxProfitMargin,
    NetProfitMargin,
    EffectiveTaxRate,
    NetIncomePerEbt,
    EbtPerEbit,
    EbitPerRevenue,

    // Returns
    ReturnOnAssets,
    ReturnOnEquity,
    ReturnOnCapitalEmployed,

    // Leverage
    DebtRatio,
    DebtEquityRatio,
    LongTermDebtToCapitalization,
    TotalDebtToCapitalization,
    InterestCoverage,
    EquityMultiplier,

    // Turnover
    ReceivablesTurnover,
    PayablesTurnover,
    InventoryTurnover,
    FixedAssetTurnover,
    AssetTurnover,

    // CashFlow
    OperatingCashFlowToSales,
    FreeCashFlowToOperatingCashFlow,
    CashFlowToDebt,
    ShortTermCoverage,
    CapexCoverage,
    DividendPaidAndCapexCoverage,
    DividendPayoutRatio,

    // PerShare
    OperatingCashFlowPerShare,
    FreeCashFlowPerShare,
    CashPerShare,

    // Valuation
    PriceToBook,
    PriceToSales,
    PriceToEarnings,
    PriceToFreeCashFlow,
    PriceToOperatingCashFlow,
    DividendYield,
    EnterpriseValueMultiple,
}

#[derive(Clone, Copy)]
pub struct RatioDefinition {
    pub name: RatioName,
    pub key: &'static str,
    pub category: RatioCategory,
    pub description: &'static str,
    pub formula: Formula,
}

/// The formula registry. Adding a ratio means adding a `RatioName` variant
/// and an entry here at the same position.
pub static REGISTRY: &[RatioDefinition] = &[
    RatioDefinition {
        name: RatioName::CurrentRatio,
        key: "current_ratio",
        category: RatioCategory::Liquidity,
        description: "Current assets / current liabilities",
        formula: liquidity::current_ratio,
    },
    RatioDefinition {
        name: RatioName::QuickRatio,
        key: "quick_ratio",
        category: RatioCategory::Liquidity,
        description: "(Current assets - inventory) / current liabilities",
        formula: liquidity::quick_ratio,
    },
    RatioDefinition {
        name: RatioName::CashRatio,
        key: "cash_ratio",
        category: RatioCategory::Liquidity,
        description: "Cash and equivalents / current liabilities",
        formula: liquidity::cash_ratio,
    },
    RatioDefinition {
        name: RatioName::DaysSalesOutstanding,
        key: "days_sales_outstanding",
        category: RatioCategory::Efficiency,
        description: "Days x receivables / revenue",
        formula: efficiency::days_sales_outstanding,
    },
    RatioDefinition {
        name: RatioName::DaysInventoryOutstanding,
        key: "days_inventory_outstanding",
        category: RatioCategory::Efficiency,
        description: "Days x inventory / cost of revenue",
        formula: efficiency::days_inventory_outstanding,
    },
    RatioDefinition {
        name: RatioName::OperatingCycle,
        key: "operating_cycle",
        category: RatioCategory::Efficiency,
        description: "DSO + DIO",
        formula: efficiency::operating_cycle,
    },
    RatioDefinition {
        name: RatioName::DaysPayablesOutstanding,
        key: "days_payables_outstanding",
        category: RatioCategory::Efficiency,
        description: "Days x payables / cost of revenue",
        formula: efficiency::days_payables_outstanding,
    },
    RatioDefinition {
        name: RatioName::CashConversionCycle,
        key: "cash_conversion_cycle",
        category: RatioCategory::Efficiency,
        description: "Operating cycle - DPO",
        formula: efficiency::cash_conversion_cycle,
    },
    RatioDefinition {
        name: RatioName::GrossProfitMargin,
        key: "gross_profit_margin",
        category: RatioCategory::Profitability,
        description: "Gross profit / revenue",
        formula: margins::gross_profit_margin,
    },
    RatioDefinition {
        name: RatioName::OperatingProfitMargin,
        key: "operating_profit_margin",
        category: RatioCategory::Profitability,
        description: "Operating income / revenue",
        formula: margins::operating_profit_margin,
    },
    RatioDefinition {
        name: RatioName::PretaxProfitMargin,
        key: "pretax_profit_margin",
        category: RatioCategory::Profitability,
        description: "Income before tax / revenue",
        formula: margins::pretax_profit_margin,
    },
    RatioDefinition {
        name: RatioName::NetProfitMargin,
        key: "net_profit_margin",
        category: RatioCategory::Profitability,
        description: "Net income / revenue",
        formula: margins::net_profit_margin,
    },
    RatioDefinition {
        name: RatioName::EffectiveTaxRate,
        key: "effective_tax_rate",
        category: RatioCategory::Profitability,
        description: "Income taxes / income before tax",
        formula: margins::effective_tax_rate,
    },
    RatioDefinition {
        name: RatioName::NetIncomePerEbt,
        key: "net_income_per_ebt",
        category: RatioCategory::Profitability,
        description: "Net income / income before tax",
        formula: margins::net_income_per_ebt,
    },
    RatioDefinition {
        name: RatioName::EbtPerEbit,
        key: "ebt_per_ebit",
        category: RatioCategory::Profitability,
        description: "Income before tax / EBIT",
        formula: margins::ebt_per_ebit,
    },
    RatioDefinition {
        name: RatioName::EbitPerRevenue,
        key: "ebit_per_revenue",
        category: RatioCategory::Profitability,
        description: "EBIT / revenue",
        formula: margins::ebit_per_revenue,
    },
    RatioDefinition {
        name: RatioName::ReturnOnAssets,
        key: "return_on_assets",
        category: RatioCategory::Returns,
        description: "Net income / total assets",
        formula: returns::return_on_assets,
    },
    RatioDefinition {
        name: RatioName::ReturnOnEquity,
        key: "return_on_equity",
        category: RatioCategory::Returns,
        description: "Net income / total equity",
        formula: returns::return_on_equity,
    },
    RatioDefinition {
        name: RatioName::ReturnOnCapitalEmployed,
        key: "return_on_capital_employed",
        category: RatioCategory::Returns,
        description: "EBIT / (total assets - current liabilities)",
        formula: returns::return_on_capital_employed,
    },
    RatioDefinition {
        name: RatioName::DebtRatio,
        key: "debt_ratio",
        category: RatioCategory::Leverage,
        description: "Total debt / total assets",
        formula: leverage::debt_ratio,
    },
    RatioDefinition {
        name: RatioName::DebtEquityRatio,
        key: "debt_equity_ratio",
        category: RatioCategory::Leverage,
        description: "Total debt / total equity",
        formula: leverage::debt_equity_ratio,
    },
    RatioDefinition {
        name: RatioName::LongTermDebtToCapitalization,
        key: "long_term_debt_to_capitalization",
        category: RatioCategory::Leverage,
        description: "Long-term debt / (long-term debt + equity)",
        formula: leverage::long_term_debt_to_capitalization,
    },
    RatioDefinition {
        name: RatioName::TotalDebtToCapitalization,
        key: "total_debt_to_capitalization",
        category: RatioCategory::Leverage,
        description: "Total debt / (total debt + equity)",
        formula: leverage::total_debt_to_capitalization,
    },
    RatioDefinition {
        name: RatioName::InterestCoverage,
        key: "interest_coverage",
        category: RatioCategory::Leverage,
        description: "EBIT / interest expense",
        formula: leverage::interest_coverage,
    },
    RatioDefinition {
        name: RatioName::EquityMultiplier,
        key: "equity_multiplier",
        category: RatioCategory::Leverage,
        description: "Total assets / total equity",
        formula: leverage::equity_multiplier,
    },
    RatioDefinition {
        name: RatioName::ReceivablesTurnover,
        key: "receivables_turnover",
        category: RatioCategory::Turnover,
        description: "Revenue / ending receivables",
        formula: turnover::receivables_turnover,
    },
    RatioDefinition {
        name: RatioName::PayablesTurnover,
        key: "payables_turnover",
        category: RatioCategory::Turnover,
        description: "Cost of revenue / ending payables",
        formula: turnover::payables_turnover,
    },
    RatioDefinition {
        name: RatioName::InventoryTurnover,
        key: "inventory_turnover",
        category: RatioCategory::Turnover,
        description: "Cost of revenue / ending inventory",
        formula: turnover::inventory_turnover,
    },
    RatioDefinition {
        name: RatioName::FixedAssetTurnover,
        key: "fixed_asset_turnover",
        category: RatioCategory::Turnover,
        description: "Revenue / ending net PP&E",
        formula: turnover::fixed_asset_turnover,
    },
    RatioDefinition {
        name: RatioName::AssetTurnover,
        key: "asset_turnover",
        category: RatioCategory::Turnover,
        description: "Revenue / ending total assets",
        formula: turnover::asset_turnover,
    },
    RatioDefinition {
        name: RatioName::OperatingCashFlowToSales,
        key: "operating_cash_flow_to_sales",
        category: RatioCategory::CashFlow,
        description: "Operating cash flow / revenue",
        formula: cash_flow::operating_cash_flow_to_sales,
    },
    RatioDefinition {
        name: RatioName::FreeCashFlowToOperatingCashFlow,
        key: "free_cash_flow_to_operating_cash_flow",
        category: RatioCategory::CashFlow,
        description: "Free cash flow / operating cash flow",
        formula: cash_flow::free_cash_flow_to_operating_cash_flow,
    },
    RatioDefinition {
        name: RatioName::CashFlowToDebt,
        key: "cash_flow_to_debt",
        category: RatioCategory::CashFlow,
        description: "Operating cash flow / total debt",
        formula: cash_flow::cash_flow_to_debt,
    },
    RatioDefinition {
        name: RatioName::ShortTermCoverage,
        key: "short_term_coverage",
        category: RatioCategory::CashFlow,
        description: "Operating cash flow / short-term debt",
        formula: cash_flow::short_term_coverage,
    },
    RatioDefinition {
        name: RatioName::CapexCoverage,
        key: "capex_coverage",
        category: RatioCategory::CashFlow,
        description: "Operating cash flow / capital expenditure",
        formula: cash_flow::capex_coverage,
    },
    RatioDefinition {
        name: RatioName::DividendPaidAndCapexCoverage,
        key: "dividend_paid_and_capex_coverage",
        category: RatioCategory::CashFlow,
        description: "Operating cash flow / (capital expenditure + dividends paid)",
        formula: cash_flow::dividend_paid_and_capex_coverage,
    },
    RatioDefinition {
        name: RatioName::DividendPayoutRatio,
        key: "dividend_payout_ratio",
        category: RatioCategory::CashFlow,
        description: "Dividends paid / net income",
        formula: cash_flow::dividend_payout_ratio,
    },
    RatioDefinition {
        name: RatioName::OperatingCashFlowPerShare,
        key: "operating_cash_flow_per_share",
        category: RatioCategory::PerShare,
        description: "Operating cash flow / shares outstanding",
        formula: valuation::operating_cash_flow_per_share,
    },
    RatioDefinition {
        name: RatioName::FreeCashFlowPerShare,
        key: "free_cash_flow_per_share",
        category: RatioCategory::PerShare,
        description: "Free cash flow / shares outstanding",
        formula: valuation::free_cash_flow_per_share,
    },
    RatioDefinition {
        name: RatioName::CashPerShare,
        key: "cash_per_share",
        category: RatioCategory::PerShare,
        description: "Cash and equivalents / shares outstanding",
        formula: valuation::cash_per_share,
    },
    RatioDefinition {
        name: RatioName::PriceToBook,
        key: "price_to_book",
        category: RatioCategory::Valuation,
        description: "Market cap / total equity",
        formula: valuation::price_to_book,
    },
    RatioDefinition {
        name: RatioName::PriceToSales,
        key: "price_to_sales",
        category: RatioCategory::Valuation,
        description: "Market cap / revenue",
        formula: valuation::price_to_sales,
    },
    RatioDefinition {
        name: RatioName::PriceToEarnings,
        key: "price_to_earnings",
        category: RatioCategory::Valuation,
        description: "Market cap / net income",
        formula: valuation::price_to_earnings,
    },
    RatioDefinition {
        name: RatioName::PriceToFreeCashFlow,
        key: "price_to_free_cash_flow",
        category: RatioCategory::Valuation,
        description: "Market cap / free cash flow",
        formula: valuation::price_to_free_cash_flow,
    },
    RatioDefinition {
        name: RatioName::PriceToOperatingCashFlow,
        key: "price_to_operating_cash_flow",
        category: RatioCategory::Valuation,
        description: "Market cap / operating cash flow",
        formula: valuation::price_to_operating_cash_flow,
    },
    RatioDefinition {
        name: RatioName::DividendYield,
        key: "dividend_yield",
        category: RatioCategory::Valuation,
        description: "Dividends paid / market cap",
        formula: valuation::dividend_yield,
    },
    RatioDefinition {
        name: RatioName::EnterpriseValueMultiple,
        key: "enterprise_value_multiple",
        category: RatioCategory::Valuation,
        description: "Enterprise value / EBITDA",
        formula: valuation::enterprise_value_multiple,
    },
];

impl RatioName {
    pub fn definition(self) -> &'static RatioDefinition {
        &REGISTRY[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.definition().key
    }

    pub fn category(self) -> RatioCategory {
        self.definition().category
    }

    /// All ratios in registry order.
    pub fn all() -> impl Iterator<Item = RatioName> {
        REGISTRY.iter().map(|d| d.name)
    }
}

impl fmt::Display for RatioName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatioName {
    type Err = RatioEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .find(|d| d.key == s)
            .map(|d| d.name)
            .ok_or_else(|| RatioEngineError::InvalidInput {
                field: "ratio".into(),
                reason: format!("Unknown ratio '{s}'."),
            })
    }
}

/// Compute one ratio for one period.
pub fn compute_ratio(
    name: RatioName,
    period: &FundamentalPeriod,
    config: &RatioEngineConfig,
) -> RatioResult {
    (name.definition().formula)(period, config).into()
}
