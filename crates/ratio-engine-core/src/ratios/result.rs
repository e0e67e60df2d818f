use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fundamentals::LineItem;

/// Why a ratio could not be computed for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UndefinedReason {
    MissingInput { item: LineItem },
    ZeroDenominator { denominator: String },
    Overflow { context: String },
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput { item } => write!(f, "missing input: {item}"),
            Self::ZeroDenominator { denominator } => write!(f, "zero denominator: {denominator}"),
            Self::Overflow { context } => write!(f, "arithmetic overflow in {context}"),
        }
    }
}

/// Intermediate form every formula returns, so formulas can use `?`.
pub type Computed = Result<Decimal, UndefinedReason>;

/// One cell of the ratio table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioResult {
    Value(Decimal),
    Undefined(UndefinedReason),
}

impl RatioResult {
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Undefined(_) => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined(_))
    }

    pub fn reason(&self) -> Option<&UndefinedReason> {
        match self {
            Self::Value(_) => None,
            Self::Undefined(reason) => Some(reason),
        }
    }

    /// Undefined rendered as zero, for consumers whose tables use a `0`
    /// placeholder.
    pub fn value_or_zero(&self) -> Decimal {
        self.value().unwrap_or(Decimal::ZERO)
    }

    /// Round half away from zero; undefined cells pass through.
    pub fn rounded(&self, dp: u32) -> Self {
        match self {
            Self::Value(v) => {
                Self::Value(v.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
            }
            Self::Undefined(reason) => Self::Undefined(reason.clone()),
        }
    }
}

impl From<Computed> for RatioResult {
    fn from(computed: Computed) -> Self {
        match computed {
            Ok(v) => Self::Value(v),
            Err(reason) => Self::Undefined(reason),
        }
    }
}

impl fmt::Display for RatioResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Undefined(_) => f.write_str("undefined"),
        }
    }
}
