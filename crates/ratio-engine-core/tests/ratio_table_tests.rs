use pretty_assertions::assert_eq;
use ratio_engine_core::{
    compute_period_ratios, compute_ratio, derive_ratio_table, FundamentalPeriod, LineItem,
    PeriodType, RatioCategory, RatioEngineConfig, RatioEngineError, RatioName, RatioResult,
    RatioTableInput, UndefinedReason,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Fixtures
// ===========================================================================

/// A retailer with shrinking equity that turns negative from FY2020 on
/// (buybacks funded with debt), all figures in thousands.
fn retailer_year(fiscal_year: &str, scale: Decimal, equity: Decimal) -> FundamentalPeriod {
    let s = |v: Decimal| v * scale;
    FundamentalPeriod::new(fiscal_year, PeriodType::Annual)
        .with(LineItem::Revenue, s(dec!(10_000)))
        .with(LineItem::CostOfRevenue, s(dec!(6_500)))
        .with(LineItem::OperatingIncome, s(dec!(1_200)))
        .with(LineItem::Ebit, s(dec!(1_150)))
        .with(LineItem::DepreciationAndAmortization, s(dec!(350)))
        .with(LineItem::InterestExpense, s(dec!(150)))
        .with(LineItem::IncomeBeforeTax, s(dec!(1_000)))
        .with(LineItem::IncomeTaxExpense, s(dec!(230)))
        .with(LineItem::NetIncome, s(dec!(770)))
        .with(LineItem::CashAndEquivalents, s(dec!(900)))
        .with(LineItem::ShortTermInvestments, s(dec!(100)))
        .with(LineItem::Receivables, s(dec!(400)))
        .with(LineItem::Inventory, s(dec!(1_600)))
        .with(LineItem::CurrentAssets, s(dec!(3_200)))
        .with(LineItem::NetPpe, s(dec!(4_000)))
        .with(LineItem::TotalAssets, s(dec!(9_000)))
        .with(LineItem::Payables, s(dec!(1_300)))
        .with(LineItem::CurrentLiabilities, s(dec!(2_600)))
        .with(LineItem::ShortTermDebt, s(dec!(500)))
        .with(LineItem::LongTermDebt, s(dec!(4_500)))
        .with(LineItem::TotalDebt, s(dec!(5_000)))
        .with(LineItem::TotalEquity, equity)
        .with(LineItem::OperatingCashFlow, s(dec!(1_400)))
        .with(LineItem::CapitalExpenditure, s(dec!(450)))
        .with(LineItem::DividendsPaid, s(dec!(300)))
        .with(LineItem::SharesOutstanding, dec!(1_000))
        .with(LineItem::SharePrice, s(dec!(12)))
}

fn five_years() -> Vec<FundamentalPeriod> {
    vec![
        retailer_year("2017", dec!(1.00), dec!(1_200)),
        retailer_year("2018", dec!(1.04), dec!(600)),
        retailer_year("2019", dec!(1.09), dec!(150)),
        retailer_year("2020", dec!(1.15), dec!(-250)),
        retailer_year("2021", dec!(1.22), dec!(-480)),
    ]
}

fn liquidity_ratios() -> [RatioName; 3] {
    [
        RatioName::CurrentRatio,
        RatioName::QuickRatio,
        RatioName::CashRatio,
    ]
}

// ===========================================================================
// Table shape
// ===========================================================================

#[test]
fn test_five_year_table_shape() {
    let output = derive_ratio_table(&RatioTableInput::new(five_years())).unwrap();
    let table = &output.result;

    assert_eq!(
        table.fiscal_years,
        vec!["2017", "2018", "2019", "2020", "2021"]
    );
    assert_eq!(table.rows.len(), RatioName::all().count());
    for row in &table.rows {
        assert_eq!(row.values.len(), 5, "{} has a ragged row", row.ratio);
        assert_eq!(row.category, row.ratio.category());
    }
}

#[test]
fn test_complete_fundamentals_define_every_ratio() {
    let output = derive_ratio_table(&RatioTableInput::new(five_years())).unwrap();
    for fy in output.result.fiscal_years() {
        assert_eq!(output.result.undefined_count(fy), 0, "FY {fy}");
    }
    assert!(output.warnings.is_empty());
}

#[test]
fn test_inputs_not_mutated() {
    let periods = five_years();
    let input = RatioTableInput::new(periods.clone());
    derive_ratio_table(&input).unwrap();
    assert_eq!(input.periods, periods);
}

// ===========================================================================
// Edge-case policy
// ===========================================================================

#[test]
fn test_zero_current_liabilities_isolated_to_liquidity() {
    let mut periods = five_years();
    periods[2].set(LineItem::CurrentLiabilities, Decimal::ZERO);

    let output = derive_ratio_table(&RatioTableInput::new(periods)).unwrap();
    let table = &output.result;

    for ratio in liquidity_ratios() {
        assert_eq!(
            table.get(ratio, "2019"),
            Some(&RatioResult::Undefined(UndefinedReason::ZeroDenominator {
                denominator: "current_liabilities".into()
            }))
        );
        // Neighbouring years untouched
        assert!(!table.get(ratio, "2018").unwrap().is_undefined());
    }
    assert_eq!(table.undefined_count("2019"), 3);
    assert!(output
        .warnings
        .iter()
        .any(|w| w.contains("FY 2019: 3 of")));
}

#[test]
fn test_negative_equity_ratios_keep_sign() {
    let output = derive_ratio_table(&RatioTableInput::new(five_years())).unwrap();
    let table = &output.result;

    for ratio in [
        RatioName::ReturnOnEquity,
        RatioName::DebtEquityRatio,
        RatioName::EquityMultiplier,
        RatioName::PriceToBook,
    ] {
        let positive = table.get(ratio, "2019").unwrap().value().unwrap();
        let negative = table.get(ratio, "2021").unwrap().value().unwrap();
        assert!(positive > Decimal::ZERO, "{ratio} FY2019");
        assert!(negative < Decimal::ZERO, "{ratio} FY2021");
    }
}

#[test]
fn test_roe_with_negative_equity_scenario() {
    let p = FundamentalPeriod::new("2021", PeriodType::Annual)
        .with(LineItem::TotalEquity, dec!(-50))
        .with(LineItem::NetIncome, dec!(20));
    let roe = compute_ratio(RatioName::ReturnOnEquity, &p, &RatioEngineConfig::default());
    assert_eq!(roe, RatioResult::Value(dec!(-0.4)));
    assert_eq!(roe.rounded(3), RatioResult::Value(dec!(-0.400)));
}

#[test]
fn test_zero_interest_expense_scenario() {
    let p = FundamentalPeriod::new("2021", PeriodType::Annual)
        .with(LineItem::InterestExpense, Decimal::ZERO)
        .with(LineItem::Ebit, dec!(100));
    let coverage = compute_ratio(
        RatioName::InterestCoverage,
        &p,
        &RatioEngineConfig::default(),
    );
    assert!(coverage.is_undefined());
    assert_eq!(coverage.value_or_zero(), Decimal::ZERO);
}

#[test]
fn test_days_scenario() {
    let p = FundamentalPeriod::new("2021", PeriodType::Annual)
        .with(LineItem::Revenue, dec!(1000))
        .with(LineItem::CostOfRevenue, dec!(600))
        .with(LineItem::Receivables, dec!(120))
        .with(LineItem::Inventory, dec!(500));
    let input = RatioTableInput::new(vec![p]).with_ratios(vec![
        RatioName::DaysSalesOutstanding,
        RatioName::DaysInventoryOutstanding,
    ]);
    let table = derive_ratio_table(&input).unwrap().result.rounded(3);

    assert_eq!(
        table.get(RatioName::DaysSalesOutstanding, "2021"),
        Some(&RatioResult::Value(dec!(43.800)))
    );
    assert_eq!(
        table.get(RatioName::DaysInventoryOutstanding, "2021"),
        Some(&RatioResult::Value(dec!(304.167)))
    );
}

#[test]
fn test_missing_inventory_scenario() {
    let mut periods = five_years();
    periods[4].clear(LineItem::Inventory);

    let table = derive_ratio_table(&RatioTableInput::new(periods))
        .unwrap()
        .result;

    let quick = table.get(RatioName::QuickRatio, "2021").unwrap();
    let current = table.get(RatioName::CurrentRatio, "2021").unwrap();
    assert_eq!(quick, current);

    let missing = RatioResult::Undefined(UndefinedReason::MissingInput {
        item: LineItem::Inventory,
    });
    for ratio in [
        RatioName::InventoryTurnover,
        RatioName::DaysInventoryOutstanding,
        RatioName::OperatingCycle,
        RatioName::CashConversionCycle,
    ] {
        assert_eq!(table.get(ratio, "2021"), Some(&missing), "{ratio}");
    }
    assert!(!table
        .get(RatioName::DaysSalesOutstanding, "2021")
        .unwrap()
        .is_undefined());
    assert_eq!(table.undefined_count("2020"), 0);
}

#[test]
fn test_absent_market_data_only_affects_valuation() {
    let mut periods = five_years();
    periods[0].clear(LineItem::SharePrice);

    let table = derive_ratio_table(&RatioTableInput::new(periods))
        .unwrap()
        .result;
    for row in &table.rows {
        let cell = &row.values[0];
        match row.category {
            RatioCategory::Valuation => assert!(cell.is_undefined(), "{}", row.ratio),
            _ => assert!(!cell.is_undefined(), "{}", row.ratio),
        }
    }
}

// ===========================================================================
// Identities
// ===========================================================================

#[test]
fn test_cycle_identities_every_year() {
    let table = derive_ratio_table(&RatioTableInput::new(five_years()))
        .unwrap()
        .result;
    let tolerance = dec!(0.000000001);

    for fy in table.fiscal_years() {
        let get = |r| table.get(r, fy).unwrap().value().unwrap();
        let dso = get(RatioName::DaysSalesOutstanding);
        let dio = get(RatioName::DaysInventoryOutstanding);
        let dpo = get(RatioName::DaysPayablesOutstanding);
        let oc = get(RatioName::OperatingCycle);
        let ccc = get(RatioName::CashConversionCycle);

        assert_eq!(oc, dso + dio, "FY {fy}");
        assert!((ccc - (oc - dpo)).abs() <= tolerance, "FY {fy}");
    }
}

// ===========================================================================
// Determinism
// ===========================================================================

#[test]
fn test_idempotent() {
    let input = RatioTableInput::new(five_years());
    let first = derive_ratio_table(&input).unwrap();
    let second = derive_ratio_table(&input).unwrap();
    assert_eq!(first.result, second.result);
    assert_eq!(
        serde_json::to_string(&first.result).unwrap(),
        serde_json::to_string(&second.result).unwrap()
    );
}

#[test]
fn test_request_order_does_not_change_values() {
    let forward: Vec<RatioName> = RatioName::all().collect();
    let mut backward = forward.clone();
    backward.reverse();

    let a = derive_ratio_table(&RatioTableInput::new(five_years()).with_ratios(forward.clone()))
        .unwrap()
        .result;
    let b = derive_ratio_table(&RatioTableInput::new(five_years()).with_ratios(backward))
        .unwrap()
        .result;

    for ratio in forward {
        assert_eq!(a.row(ratio).unwrap().values, b.row(ratio).unwrap().values);
    }
}

#[test]
fn test_period_alone_matches_period_in_sequence() {
    let periods = five_years();
    let config = RatioEngineConfig::default();
    let ratios: Vec<RatioName> = RatioName::all().collect();
    let table = derive_ratio_table(&RatioTableInput::new(periods.clone()))
        .unwrap()
        .result;

    for period in &periods {
        for (ratio, alone) in compute_period_ratios(period, &ratios, &config) {
            assert_eq!(table.get(ratio, &period.fiscal_year), Some(&alone));
        }
    }
}

// ===========================================================================
// Structural failures
// ===========================================================================

#[test]
fn test_duplicate_fiscal_year_fails_whole_call() {
    let mut periods = five_years();
    periods.push(retailer_year("2019", dec!(1), dec!(100)));

    match derive_ratio_table(&RatioTableInput::new(periods)).unwrap_err() {
        RatioEngineError::StructuralInput { period, reason } => {
            assert_eq!(period, "2019");
            assert!(reason.contains("Duplicate"));
        }
        other => panic!("Expected StructuralInput, got {other:?}"),
    }
}

#[test]
fn test_missing_fiscal_year_fails_whole_call() {
    let mut periods = five_years();
    periods[3].fiscal_year = String::new();

    match derive_ratio_table(&RatioTableInput::new(periods)).unwrap_err() {
        RatioEngineError::StructuralInput { period, .. } => assert_eq!(period, "period #3"),
        other => panic!("Expected StructuralInput, got {other:?}"),
    }
}

#[test]
fn test_missing_fiscal_year_from_json() {
    let json = r#"{ "periods": [ { "line_items": { "revenue": "10" } } ] }"#;
    let input: RatioTableInput = serde_json::from_str(json).unwrap();
    assert!(matches!(
        derive_ratio_table(&input),
        Err(RatioEngineError::StructuralInput { .. })
    ));
}

// ===========================================================================
// Serialization
// ===========================================================================

#[test]
fn test_table_json_round_trip() {
    let mut periods = five_years();
    periods[1].clear(LineItem::Payables);
    let table = derive_ratio_table(&RatioTableInput::new(periods))
        .unwrap()
        .result;

    let json = serde_json::to_string(&table).unwrap();
    let back: ratio_engine_core::RatioTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);
}

#[test]
fn test_bad_json_maps_to_serialization_error() {
    let err: RatioEngineError = serde_json::from_str::<RatioTableInput>("{ \"periods\": 3 }")
        .unwrap_err()
        .into();
    assert!(matches!(err, RatioEngineError::SerializationError(_)));
}
