//! Ratio formulas, grouped by category, and the registry that names them.

pub mod cash_flow;
pub mod efficiency;
mod helpers;
mod inputs;
pub mod leverage;
pub mod liquidity;
pub mod margins;
pub mod registry;
pub mod result;
pub mod returns;
pub mod turnover;
pub mod valuation;

pub use registry::{compute_ratio, Formula, RatioCategory, RatioDefinition, RatioName, REGISTRY};
pub use result::{Computed, RatioResult, UndefinedReason};
