//! Safe arithmetic over one period's line items.
//!
//! Every operation that can fail returns `Computed`, so a zero denominator or
//! decimal overflow becomes an undefined cell rather than a panic.

use rust_decimal::Decimal;

use super::result::{Computed, UndefinedReason};
use crate::fundamentals::{FundamentalPeriod, LineItem};

pub(crate) fn required(period: &FundamentalPeriod, item: LineItem) -> Computed {
    period
        .get(item)
        .ok_or(UndefinedReason::MissingInput { item })
}

/// Divide, naming the denominator when it is zero. Sign is never touched.
pub(crate) fn safe_divide(numerator: Decimal, denominator: Decimal, context: &str) -> Computed {
    if denominator.is_zero() {
        return Err(UndefinedReason::ZeroDenominator {
            denominator: context.to_string(),
        });
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| overflow(context))
}

pub(crate) fn checked_add(a: Decimal, b: Decimal, context: &str) -> Computed {
    a.checked_add(b).ok_or_else(|| overflow(context))
}

pub(crate) fn checked_sub(a: Decimal, b: Decimal, context: &str) -> Computed {
    a.checked_sub(b).ok_or_else(|| overflow(context))
}

pub(crate) fn checked_mul(a: Decimal, b: Decimal, context: &str) -> Computed {
    a.checked_mul(b).ok_or_else(|| overflow(context))
}

fn overflow(context: &str) -> UndefinedReason {
    UndefinedReason::Overflow {
        context: context.to_string(),
    }
}
