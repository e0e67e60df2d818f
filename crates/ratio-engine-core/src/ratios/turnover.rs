//! Turnover ratios divide a period flow by the period's ending balance.

use super::helpers::{required, safe_divide};
use super::result::Computed;
use crate::config::RatioEngineConfig;
use crate::fundamentals::{FundamentalPeriod, LineItem};

fn turnover(p: &FundamentalPeriod, flow: LineItem, balance: LineItem) -> Computed {
    safe_divide(required(p, flow)?, required(p, balance)?, balance.as_str())
}

pub fn receivables_turnover(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    turnover(p, LineItem::Revenue, LineItem::Receivables)
}

pub fn payables_turnover(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    turnover(p, LineItem::CostOfRevenue, LineItem::Payables)
}

pub fn inventory_turnover(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    turnover(p, LineItem::CostOfRevenue, LineItem::Inventory)
}

pub fn fixed_asset_turnover(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    turnover(p, LineItem::Revenue, LineItem::NetPpe)
}

pub fn asset_turnover(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    turnover(p, LineItem::Revenue, LineItem::TotalAssets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fundamentals::PeriodType;
    use crate::ratios::UndefinedReason;
    use rust_decimal_macros::dec;

    fn sample() -> FundamentalPeriod {
        FundamentalPeriod::new("2021", PeriodType::Annual)
            .with(LineItem::Revenue, dec!(1000))
            .with(LineItem::CostOfRevenue, dec!(600))
            .with(LineItem::Receivables, dec!(125))
            .with(LineItem::Payables, dec!(75))
            .with(LineItem::Inventory, dec!(200))
            .with(LineItem::NetPpe, dec!(400))
            .with(LineItem::TotalAssets, dec!(2000))
    }

    #[test]
    fn test_turnover_ratios() {
        let p = sample();
        let c = RatioEngineConfig::default();
        assert_eq!(receivables_turnover(&p, &c), Ok(dec!(8)));
        assert_eq!(payables_turnover(&p, &c), Ok(dec!(8)));
        assert_eq!(inventory_turnover(&p, &c), Ok(dec!(3)));
        assert_eq!(fixed_asset_turnover(&p, &c), Ok(dec!(2.5)));
        assert_eq!(asset_turnover(&p, &c), Ok(dec!(0.5)));
    }

    #[test]
    fn test_missing_inventory() {
        let mut p = sample();
        p.clear(LineItem::Inventory);
        assert_eq!(
            inventory_turnover(&p, &RatioEngineConfig::default()),
            Err(UndefinedReason::MissingInput {
                item: LineItem::Inventory
            })
        );
    }
}
