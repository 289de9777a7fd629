//! Money math: bill totals, inspection tariffs, currency display.

mod currency;
mod tariff;
mod total;

pub use currency::format_currency;
pub use tariff::{inspection_fee, VehicleCategory};
pub use total::{calculate_total, coerce_money, round2};
