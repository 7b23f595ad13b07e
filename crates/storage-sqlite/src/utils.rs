//! Helpers for mapping TEXT-backed columns to domain types.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a stored decimal string, tolerating scientific notation.
/// Unparseable stored values degrade to zero rather than poisoning reads.
pub(crate) fn parse_decimal_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match Decimal::from_scientific(value_str) {
            Ok(d) => d,
            Err(e_scientific) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as scientific (err: {}). Falling back to ZERO.",
                    field_name, value_str, e_decimal, e_scientific
                );
                Decimal::ZERO
            }
        },
    }
}

/// Same as [`parse_decimal_tolerant`] but for nullable columns.
pub(crate) fn parse_optional_decimal(value: Option<&str>, field_name: &str) -> Option<Decimal> {
    value.map(|v| parse_decimal_tolerant(v, field_name))
}

pub(crate) fn decimal_to_string(value: &Decimal) -> String {
    value.to_string()
}

pub(crate) fn optional_decimal_to_string(value: &Option<Decimal>) -> Option<String> {
    value.as_ref().map(decimal_to_string)
}
