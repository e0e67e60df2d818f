use super::helpers::{checked_add, required, safe_divide};
use super::inputs::total_debt;
use super::result::Computed;
use crate::config::RatioEngineConfig;
use crate::fundamentals::{FundamentalPeriod, LineItem};

pub fn debt_ratio(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(total_debt(p)?, required(p, LineItem::TotalAssets)?, "total_assets")
}

pub fn debt_equity_ratio(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(total_debt(p)?, required(p, LineItem::TotalEquity)?, "total_equity")
}

pub fn equity_multiplier(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(
        required(p, LineItem::TotalAssets)?,
        required(p, LineItem::TotalEquity)?,
        "total_equity",
    )
}

/// EBIT / interest expense. No cap when interest is zero: the cell is undefined.
pub fn interest_coverage(p: &FundamentalPeriod, _config: &RatioEngineConfig) -> Computed {
    safe_divide(
        required(p, LineItem::Ebit)?,
        required(p, LineItem::InterestExpense)?,
        "interest_expense",
    )
}

/// LTD / (LTD + equity)
pub fn long_term_debt_to_capitalization(
    p: &FundamentalPeriod,
    _config: &RatioEngineConfig,
) -> Computed {
    let long_term_debt = required(p, LineItem::LongTermDebt)?;
    let capitalization = checked_add(
        long_term_debt,
        required(p, LineItem::TotalEquity)?,
        "long_term_capitalization",
    )?;
    safe_divide(long_term_debt, capitalization, "long_term_capitalization")
}

/// TD / (TD + equity)
pub fn total_debt_to_capitalization(
    p: &FundamentalPeriod,
    _config: &RatioEngineConfig,
) -> Computed {
    let debt = total_debt(p)?;
    let capitalization = checked_add(
        debt,
        required(p, LineItem::TotalEquity)?,
        "total_capitalization",
    )?;
    safe_divide(debt, capitalization, "total_capitalization")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fundamentals::PeriodType;
    use crate::ratios::UndefinedReason;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn sample() -> FundamentalPeriod {
        FundamentalPeriod::new("2021", PeriodType::Annual)
            .with(LineItem::TotalAssets, dec!(8_000_000))
            .with(LineItem::TotalEquity, dec!(3_000_000))
            .with(LineItem::ShortTermDebt, dec!(500_000))
            .with(LineItem::LongTermDebt, dec!(2_500_000))
            .with(LineItem::Ebit, dec!(800_000))
            .with(LineItem::InterestExpense, dec!(200_000))
    }

    #[test]
    fn test_leverage_ratios() {
        let p = sample();
        let c = RatioEngineConfig::default();
        // Total debt derived: 500k + 2.5M = 3M
        assert_eq!(debt_ratio(&p, &c), Ok(dec!(0.375)));
        assert_eq!(debt_equity_ratio(&p, &c), Ok(dec!(1)));
        let em = equity_multiplier(&p, &c).unwrap();
        assert_eq!(em, dec!(8_000_000) / dec!(3_000_000));
        assert_eq!(interest_coverage(&p, &c), Ok(dec!(4)));
        // 2.5M / 5.5M
        assert_eq!(
            long_term_debt_to_capitalization(&p, &c),
            Ok(dec!(2_500_000) / dec!(5_500_000))
        );
        assert_eq!(total_debt_to_capitalization(&p, &c), Ok(dec!(0.5)));
    }

    #[test]
    fn test_zero_interest_is_undefined_not_capped() {
        let p = FundamentalPeriod::new("2021", PeriodType::Annual)
            .with(LineItem::Ebit, dec!(100))
            .with(LineItem::InterestExpense, Decimal::ZERO);
        assert_eq!(
            interest_coverage(&p, &RatioEngineConfig::default()),
            Err(UndefinedReason::ZeroDenominator {
                denominator: "interest_expense".into()
            })
        );
    }

    #[test]
    fn test_negative_equity_debt_equity() {
        let p = sample().with(LineItem::TotalEquity, dec!(-1_500_000));
        assert_eq!(
            debt_equity_ratio(&p, &RatioEngineConfig::default()),
            Ok(dec!(-2))
        );
    }
}
