use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Days;
use crate::{RatioEngineError, RatioEngineResult};

/// Day-count basis for DSO / DIO / DPO.
pub const DEFAULT_DAYS_IN_YEAR: Days = dec!(365);

/// Which balance a turnover ratio divides by.
///
/// Only ending balances are supported: an average would need the prior
/// period, and every ratio is computed from a single period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceConvention {
    #[default]
    Ending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioEngineConfig {
    #[serde(default = "default_days_in_year")]
    pub days_in_year: Days,
    #[serde(default)]
    pub balance_convention: BalanceConvention,
}

fn default_days_in_year() -> Days {
    DEFAULT_DAYS_IN_YEAR
}

impl Default for RatioEngineConfig {
    fn default() -> Self {
        Self {
            days_in_year: DEFAULT_DAYS_IN_YEAR,
            balance_convention: BalanceConvention::default(),
        }
    }
}

impl RatioEngineConfig {
    pub fn validate(&self) -> RatioEngineResult<()> {
        if self.days_in_year <= Decimal::ZERO {
            return Err(RatioEngineError::InvalidInput {
                field: "days_in_year".into(),
                reason: "Day-count basis must be positive.".into(),
            });
        }
        Ok(())
    }
}
