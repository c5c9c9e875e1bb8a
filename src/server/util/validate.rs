//! Field validation for user supplied values.
//!
//! Text columns have fixed maximum lengths and currency columns are
//! `NUMERIC(10, 2)`; values are checked here so an oversized value is reported
//! as [`StoreError::InvalidInput`] on every backend instead of being truncated
//! or rejected with a driver specific error.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::server::error::store::StoreError;

/// Integer digits available in a `NUMERIC(10, 2)` column.
const CURRENCY_INTEGER_DIGITS: u32 = 8;

/// Requires `value` to contain a non-whitespace character and be at most
/// `max_len` characters. The value is returned as typed.
pub fn required_text(field: &str, value: &str, max_len: usize) -> Result<String, StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::InvalidInput(format!("{} is required", field)));
    }

    bounded_text(field, value, max_len)
}

/// Requires `value` to be at most `max_len` characters, empty values are allowed.
pub fn bounded_text(field: &str, value: &str, max_len: usize) -> Result<String, StoreError> {
    if value.chars().count() > max_len {
        return Err(StoreError::InvalidInput(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }

    Ok(value.to_string())
}

/// Rounds a currency value to two fractional digits and checks it fits the column.
pub fn currency(field: &str, value: Decimal) -> Result<Decimal, StoreError> {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let limit = Decimal::from(10_i64.pow(CURRENCY_INTEGER_DIGITS));

    if rounded.abs() >= limit {
        return Err(StoreError::InvalidInput(format!(
            "{} must be less than 100000000",
            field
        )));
    }

    Ok(rounded)
}
