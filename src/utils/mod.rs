/// 表示用ユーティリティ
pub mod constants;
pub mod formatters;

pub use constants::{
    DEFAULT_INTERNATIONAL_CURRENCY, DOMESTIC_CURRENCY, EXPENSE_TYPES, PAYMENT_METHODS,
};
pub use formatters::{calculate_days_between, format_currency, format_date, format_date_range};
