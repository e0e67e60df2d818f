pub mod table;

pub use table::{RatioRow, RatioTable};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, instrument, warn};

use crate::config::RatioEngineConfig;
use crate::fundamentals::{fiscal_years_ascending, validate_periods, FundamentalPeriod};
use crate::ratios::{compute_ratio, RatioName, RatioResult};
use crate::types::{with_metadata, ComputationOutput};
use crate::RatioEngineResult;

// ---------------------------------------------------------------------------
// Input type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioTableInput {
    /// Periods in the order the table columns should appear
    pub periods: Vec<FundamentalPeriod>,
    /// Ratios to compute; every registered ratio when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratios: Option<Vec<RatioName>>,
    #[serde(default)]
    pub config: RatioEngineConfig,
}

impl RatioTableInput {
    pub fn new(periods: Vec<FundamentalPeriod>) -> Self {
        Self {
            periods,
            ratios: None,
            config: RatioEngineConfig::default(),
        }
    }

    pub fn with_ratios(mut self, ratios: Vec<RatioName>) -> Self {
        self.ratios = Some(ratios);
        self
    }

    pub fn with_config(mut self, config: RatioEngineConfig) -> Self {
        self.config = config;
        self
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the ratio table for a sequence of periods.
///
/// Fails only on structurally invalid input (blank or duplicate fiscal-year
/// labels, a non-positive day basis); nothing is returned in that case.
/// Arithmetic edge cases become `RatioResult::Undefined` cells.
#[instrument(skip_all, fields(periods = input.periods.len()))]
pub fn derive_ratio_table(
    input: &RatioTableInput,
) -> RatioEngineResult<ComputationOutput<RatioTable>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // -- Validation ----------------------------------------------------------
    input.config.validate()?;
    if let Err(e) = validate_periods(&input.periods) {
        warn!(error = %e, "rejecting period sequence");
        return Err(e);
    }

    if input.periods.is_empty() {
        warnings.push("No periods supplied; the ratio table is empty.".into());
    } else if !fiscal_years_ascending(&input.periods) {
        warnings.push("Fiscal years are not in ascending order; columns follow input order.".into());
    }

    let ratios = resolve_ratios(input.ratios.as_deref(), &mut warnings);

    // -- Computation ---------------------------------------------------------
    let columns = compute_columns(&input.periods, &ratios, &input.config);

    for (period, column) in input.periods.iter().zip(&columns) {
        let undefined = column.iter().filter(|r| r.is_undefined()).count();
        debug!(fiscal_year = %period.fiscal_year, undefined, "computed period");
        if undefined > 0 {
            warnings.push(format!(
                "FY {}: {undefined} of {} ratios undefined.",
                period.fiscal_year,
                ratios.len()
            ));
        }
    }

    let fiscal_years = input
        .periods
        .iter()
        .map(|p| p.fiscal_year.trim().to_string())
        .collect();
    let table = RatioTable::from_columns(fiscal_years, &ratios, columns);

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "days_in_year": input.config.days_in_year.to_string(),
        "balance_convention": input.config.balance_convention,
        "outflow_sign": "capital_expenditure and dividends_paid are positive magnitudes",
        "undefined_policy": "zero denominator, missing input or overflow yields an undefined cell",
    });

    Ok(with_metadata(
        "Per-period financial ratio derivation (ending balances)",
        &assumptions,
        warnings,
        elapsed,
        table,
    ))
}

/// Every requested ratio for one period, in request order.
///
/// This is the only path the table builder uses, so a period gives the same
/// values whether computed alone or inside a longer sequence.
pub fn compute_period_ratios(
    period: &FundamentalPeriod,
    ratios: &[RatioName],
    config: &RatioEngineConfig,
) -> Vec<(RatioName, RatioResult)> {
    ratios
        .iter()
        .map(|&name| (name, compute_ratio(name, period, config)))
        .collect()
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Requested names with duplicates dropped (first occurrence wins), or the
/// full registry.
fn resolve_ratios(requested: Option<&[RatioName]>, warnings: &mut Vec<String>) -> Vec<RatioName> {
    let Some(requested) = requested else {
        return RatioName::all().collect();
    };

    let mut seen = HashSet::with_capacity(requested.len());
    let mut resolved = Vec::with_capacity(requested.len());
    for &name in requested {
        if seen.insert(name) {
            resolved.push(name);
        } else {
            warnings.push(format!("Ratio '{name}' requested more than once; computed once."));
        }
    }
    resolved
}

fn compute_column(
    period: &FundamentalPeriod,
    ratios: &[RatioName],
    config: &RatioEngineConfig,
) -> Vec<RatioResult> {
    compute_period_ratios(period, ratios, config)
        .into_iter()
        .map(|(_, result)| result)
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn compute_columns(
    periods: &[FundamentalPeriod],
    ratios: &[RatioName],
    config: &RatioEngineConfig,
) -> Vec<Vec<RatioResult>> {
    periods
        .iter()
        .map(|p| compute_column(p, ratios, config))
        .collect()
}

#[cfg(feature = "parallel")]
fn compute_columns(
    periods: &[FundamentalPeriod],
    ratios: &[RatioName],
    config: &RatioEngineConfig,
) -> Vec<Vec<RatioResult>> {
    use rayon::prelude::*;

    periods
        .par_iter()
        .map(|p| compute_column(p, ratios, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fundamentals::{LineItem, PeriodType};
    use crate::RatioEngineError;
    use rust_decimal_macros::dec;

    fn period(label: &str) -> FundamentalPeriod {
        FundamentalPeriod::new(label, PeriodType::Annual)
            .with(LineItem::CurrentAssets, dec!(300))
            .with(LineItem::CurrentLiabilities, dec!(150))
            .with(LineItem::NetIncome, dec!(20))
            .with(LineItem::TotalEquity, dec!(200))
    }

    #[test]
    fn test_full_registry_by_default() {
        let input = RatioTableInput::new(vec![period("2020"), period("2021")]);
        let output = derive_ratio_table(&input).unwrap();
        assert_eq!(output.result.rows.len(), RatioName::all().count());
        assert_eq!(output.result.fiscal_years, vec!["2020", "2021"]);
        assert_eq!(
            output.result.get(RatioName::CurrentRatio, "2021"),
            Some(&RatioResult::Value(dec!(2)))
        );
        assert_eq!(output.metadata.precision, "rust_decimal_128bit");
    }

    #[test]
    fn test_duplicate_requests_collapse() {
        let input = RatioTableInput::new(vec![period("2020")]).with_ratios(vec![
            RatioName::ReturnOnEquity,
            RatioName::CurrentRatio,
            RatioName::ReturnOnEquity,
        ]);
        let output = derive_ratio_table(&input).unwrap();
        let names: Vec<RatioName> = output.result.rows.iter().map(|r| r.ratio).collect();
        assert_eq!(names, vec![RatioName::ReturnOnEquity, RatioName::CurrentRatio]);
        assert!(output.warnings.iter().any(|w| w.contains("more than once")));
    }

    #[test]
    fn test_empty_input_gives_empty_table() {
        let output = derive_ratio_table(&RatioTableInput::new(vec![])).unwrap();
        assert!(output.result.is_empty());
        assert!(output.warnings.iter().any(|w| w.contains("No periods")));
    }

    #[test]
    fn test_descending_years_warn_but_keep_order() {
        let input = RatioTableInput::new(vec![period("2021"), period("2020")])
            .with_ratios(vec![RatioName::CurrentRatio]);
        let output = derive_ratio_table(&input).unwrap();
        assert_eq!(output.result.fiscal_years, vec!["2021", "2020"]);
        assert!(output.warnings.iter().any(|w| w.contains("ascending")));
    }

    #[test]
    fn test_undefined_cells_reported_in_warnings() {
        let input = RatioTableInput::new(vec![period("2020")])
            .with_ratios(vec![RatioName::CurrentRatio, RatioName::InterestCoverage]);
        let output = derive_ratio_table(&input).unwrap();
        assert!(output
            .warnings
            .iter()
            .any(|w| w.contains("FY 2020: 1 of 2 ratios undefined")));
    }

    #[test]
    fn test_invalid_day_basis_rejected() {
        let input = RatioTableInput::new(vec![period("2020")]).with_config(RatioEngineConfig {
            days_in_year: dec!(-365),
            ..Default::default()
        });
        assert!(matches!(
            derive_ratio_table(&input),
            Err(RatioEngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_input_from_json_defaults() {
        let json = r#"{
            "periods": [
                { "fiscal_year": "2021", "line_items": { "current_assets": 300, "current_liabilities": 150 } }
            ],
            "ratios": ["current_ratio"]
        }"#;
        let input: RatioTableInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.config, RatioEngineConfig::default());
        let output = derive_ratio_table(&input).unwrap();
        assert_eq!(
            output.result.get(RatioName::CurrentRatio, "2021"),
            Some(&RatioResult::Value(dec!(2)))
        );
    }
}
