use serde::{Deserialize, Serialize};

use crate::ratios::{RatioCategory, RatioName, RatioResult};

/// One ratio across every period, aligned with `RatioTable::fiscal_years`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioRow {
    pub ratio: RatioName,
    pub category: RatioCategory,
    pub values: Vec<RatioResult>,
}

/// Rows are ratios, columns are fiscal years in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioTable {
    pub fiscal_years: Vec<String>,
    pub rows: Vec<RatioRow>,
}

impl RatioTable {
    /// Transpose per-period columns into rows. Each column holds one result
    /// per entry of `ratios`, in the same order.
    pub(crate) fn from_columns(
        fiscal_years: Vec<String>,
        ratios: &[RatioName],
        columns: Vec<Vec<RatioResult>>,
    ) -> Self {
        let mut rows: Vec<RatioRow> = ratios
            .iter()
            .map(|&ratio| RatioRow {
                ratio,
                category: ratio.category(),
                values: Vec::with_capacity(columns.len()),
            })
            .collect();

        for column in columns {
            for (row, value) in rows.iter_mut().zip(column) {
                row.values.push(value);
            }
        }

        Self { fiscal_years, rows }
    }

    pub fn fiscal_years(&self) -> &[String] {
        &self.fiscal_years
    }

    pub fn row(&self, ratio: RatioName) -> Option<&RatioRow> {
        self.rows.iter().find(|r| r.ratio == ratio)
    }

    pub fn get(&self, ratio: RatioName, fiscal_year: &str) -> Option<&RatioResult> {
        let index = self.column_index(fiscal_year)?;
        self.row(ratio)?.values.get(index)
    }

    /// Every ratio for one fiscal year, in row order.
    pub fn column(&self, fiscal_year: &str) -> Option<Vec<(RatioName, &RatioResult)>> {
        let index = self.column_index(fiscal_year)?;
        Some(
            self.rows
                .iter()
                .filter_map(|row| row.values.get(index).map(|v| (row.ratio, v)))
                .collect(),
        )
    }

    pub fn undefined_count(&self, fiscal_year: &str) -> usize {
        self.column(fiscal_year)
            .map(|cells| cells.iter().filter(|(_, v)| v.is_undefined()).count())
            .unwrap_or(0)
    }

    /// Copy with every value rounded half away from zero.
    pub fn rounded(&self, dp: u32) -> Self {
        Self {
            fiscal_years: self.fiscal_years.clone(),
            rows: self
                .rows
                .iter()
                .map(|row| RatioRow {
                    ratio: row.ratio,
                    category: row.category,
                    values: row.values.iter().map(|v| v.rounded(dp)).collect(),
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fiscal_years.is_empty()
    }

    fn column_index(&self, fiscal_year: &str) -> Option<usize> {
        self.fiscal_years.iter().position(|fy| fy == fiscal_year)
    }
}
