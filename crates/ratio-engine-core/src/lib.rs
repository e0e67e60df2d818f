pub mod config;
pub mod engine;
pub mod error;
pub mod fundamentals;
pub mod ratios;
pub mod types;

pub use config::{BalanceConvention, RatioEngineConfig};
pub use engine::{
    compute_period_ratios, derive_ratio_table, RatioRow, RatioTable, RatioTableInput,
};
pub use error::RatioEngineError;
pub use fundamentals::{FundamentalPeriod, LineItem, PeriodType};
pub use ratios::{compute_ratio, RatioCategory, RatioName, RatioResult, UndefinedReason};
pub use types::*;

/// Standard result type for all ratio-engine operations
pub type RatioEngineResult<T> = Result<T, RatioEngineError>;
