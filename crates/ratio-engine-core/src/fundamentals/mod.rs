pub mod line_item;
pub mod period;

pub use line_item::LineItem;
pub use period::{fiscal_years_ascending, validate_periods, FundamentalPeriod, PeriodType};
