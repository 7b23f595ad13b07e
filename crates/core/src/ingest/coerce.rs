//! Row coercion: turn raw cells into typed values, degrading per field.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

use super::columns::ColumnMap;

/// Spreadsheet tools render missing cells as this literal placeholder.
const MISSING_NAME_PLACEHOLDER: &str = "nan";

/// Date spellings accepted from spreadsheet cells, tried in order.
/// Day-first variants come first: the uploads are Latin-American data.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%Y/%m/%d",
    "%d.%m.%Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Best-effort decimal parse for a spreadsheet cell.
///
/// Tries plain decimal notation first, then scientific notation. Returns
/// `None` on anything unparseable; a bad cell never fails the row.
pub fn parse_cell_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .ok()
        .or_else(|| Decimal::from_scientific(trimmed).ok())
}

/// Best-effort date parse for a spreadsheet cell.
pub fn parse_cell_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }
    None
}

/// One surviving row after coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct CoercedRow {
    pub name: String,
    pub amount: Option<Decimal>,
    pub factor: Option<Decimal>,
    pub record_date: Option<NaiveDate>,
}

/// Coerces one raw row against the detected column map.
///
/// Returns `None` when the name cell is empty or the missing-value
/// placeholder: the row is excluded entirely, which is a skip, not an error.
pub fn coerce_row(row: &[String], map: &ColumnMap) -> Option<CoercedRow> {
    let name = row.get(map.name).map(|s| s.trim()).unwrap_or_default();
    if name.is_empty() || name.eq_ignore_ascii_case(MISSING_NAME_PLACEHOLDER) {
        return None;
    }

    let cell = |index: Option<usize>| index.and_then(|i| row.get(i)).map(String::as_str);

    Some(CoercedRow {
        name: name.to_string(),
        amount: cell(map.amount).and_then(parse_cell_decimal),
        factor: cell(map.factor).and_then(parse_cell_decimal),
        record_date: cell(map.date).and_then(parse_cell_date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn map() -> ColumnMap {
        ColumnMap {
            name: 0,
            amount: Some(1),
            factor: Some(2),
            date: Some(3),
        }
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_all_fields() {
        let coerced = coerce_row(&row(&["A", "100.50", "1.05", "2024-01-15"]), &map()).unwrap();
        assert_eq!(coerced.name, "A");
        assert_eq!(coerced.amount, Some(dec!(100.50)));
        assert_eq!(coerced.factor, Some(dec!(1.05)));
        assert_eq!(
            coerced.record_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
    }

    #[test]
    fn empty_name_skips_row() {
        assert!(coerce_row(&row(&["", "10", "1", "2024-01-01"]), &map()).is_none());
        assert!(coerce_row(&row(&["   ", "10", "1", "2024-01-01"]), &map()).is_none());
    }

    #[test]
    fn nan_placeholder_skips_row_case_insensitive() {
        assert!(coerce_row(&row(&["nan", "10", "1", ""]), &map()).is_none());
        assert!(coerce_row(&row(&["NaN", "10", "1", ""]), &map()).is_none());
    }

    #[test]
    fn bad_cells_degrade_per_field() {
        let coerced = coerce_row(&row(&["B", "bad", "2.0", "2024-02-01"]), &map()).unwrap();
        assert_eq!(coerced.amount, None);
        assert_eq!(coerced.factor, Some(dec!(2.0)));
        assert_eq!(
            coerced.record_date,
            Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
        );
    }

    #[test]
    fn missing_optional_columns_leave_fields_unset() {
        let name_only = ColumnMap {
            name: 0,
            amount: None,
            factor: None,
            date: None,
        };
        let coerced = coerce_row(&row(&["C"]), &name_only).unwrap();
        assert_eq!(coerced.amount, None);
        assert_eq!(coerced.factor, None);
        assert_eq!(coerced.record_date, None);
    }

    #[test]
    fn short_rows_are_tolerated() {
        let coerced = coerce_row(&row(&["D", "5"]), &map()).unwrap();
        assert_eq!(coerced.amount, Some(dec!(5)));
        assert_eq!(coerced.factor, None);
    }

    #[test]
    fn decimal_parsing_accepts_scientific_notation() {
        assert_eq!(parse_cell_decimal("1.5e3"), Some(dec!(1500)));
        assert_eq!(parse_cell_decimal("not a number"), None);
        assert_eq!(parse_cell_decimal(""), None);
    }

    #[test]
    fn date_parsing_accepts_common_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(parse_cell_date("2024-03-10"), Some(expected));
        assert_eq!(parse_cell_date("10/03/2024"), Some(expected));
        assert_eq!(parse_cell_date("10-03-2024"), Some(expected));
        assert_eq!(parse_cell_date("2024-03-10 14:30:00"), Some(expected));
        assert_eq!(parse_cell_date("yesterday"), None);
    }
}
