//! Reconciliation: decide insert-vs-overwrite for each surviving row.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::coerce::CoercedRow;
use crate::tax_data::{NewTaxData, TaxData, TaxDataUpdate};

/// Ingestion policy, selected once for the whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    /// Every surviving row becomes a new record; duplicates permitted.
    Create,
    /// Rows matching an existing (classification, name) overwrite it;
    /// the rest insert.
    Update,
}

impl ImportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportMode::Create => "create",
            ImportMode::Update => "update",
        }
    }
}

impl FromStr for ImportMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "create" => Ok(ImportMode::Create),
            "update" => Ok(ImportMode::Update),
            _ => Err(format!("Unknown import mode: {}", s)),
        }
    }
}

/// Terminal report of one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
    /// Rows dropped for an empty or placeholder name cell.
    pub skipped: usize,
    /// Rows whose write failed; logged, never aborts the batch.
    pub failed: usize,
    pub total_rows: usize,
}

/// The write the reconciliation engine decided on for one row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowAction {
    Insert(NewTaxData),
    Overwrite(TaxDataUpdate),
}

/// Plans the write for one surviving row.
///
/// In update mode a matched record keeps its stored value for every field
/// the row did not supply; incoming absence never clears existing data.
pub fn plan_row(
    mode: ImportMode,
    classification_id: &str,
    row: &CoercedRow,
    existing: Option<&TaxData>,
) -> RowAction {
    match (mode, existing) {
        (ImportMode::Update, Some(current)) => RowAction::Overwrite(TaxDataUpdate {
            id: current.id.clone(),
            amount: row.amount.or(current.amount),
            factor: row.factor.or(current.factor),
            record_date: row.record_date.or(current.record_date),
        }),
        _ => RowAction::Insert(NewTaxData {
            classification_id: classification_id.to_string(),
            name: row.name.clone(),
            amount: row.amount,
            factor: row.factor,
            record_date: row.record_date,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn coerced(name: &str) -> CoercedRow {
        CoercedRow {
            name: name.to_string(),
            amount: Some(dec!(100.50)),
            factor: None,
            record_date: None,
        }
    }

    fn stored(id: &str, name: &str) -> TaxData {
        TaxData {
            id: id.to_string(),
            classification_id: "c1".to_string(),
            name: name.to_string(),
            amount: Some(dec!(1)),
            factor: Some(dec!(1.05)),
            record_date: Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn create_mode_always_inserts() {
        let existing = stored("d1", "A");
        let action = plan_row(ImportMode::Create, "c1", &coerced("A"), Some(&existing));
        assert!(matches!(action, RowAction::Insert(_)));
    }

    #[test]
    fn update_mode_inserts_on_miss() {
        let action = plan_row(ImportMode::Update, "c1", &coerced("A"), None);
        match action {
            RowAction::Insert(new_data) => {
                assert_eq!(new_data.classification_id, "c1");
                assert_eq!(new_data.name, "A");
                assert_eq!(new_data.amount, Some(dec!(100.50)));
            }
            other => panic!("Expected insert, got {:?}", other),
        }
    }

    #[test]
    fn update_mode_overwrites_on_hit() {
        let existing = stored("d1", "A");
        let action = plan_row(ImportMode::Update, "c1", &coerced("A"), Some(&existing));
        match action {
            RowAction::Overwrite(update) => {
                assert_eq!(update.id, "d1");
                assert_eq!(update.amount, Some(dec!(100.50)));
            }
            other => panic!("Expected overwrite, got {:?}", other),
        }
    }

    #[test]
    fn update_mode_preserves_fields_the_row_did_not_supply() {
        let existing = stored("d1", "A");
        let row = CoercedRow {
            name: "A".to_string(),
            amount: Some(dec!(200)),
            factor: None,
            record_date: None,
        };
        let action = plan_row(ImportMode::Update, "c1", &row, Some(&existing));
        match action {
            RowAction::Overwrite(update) => {
                assert_eq!(update.amount, Some(dec!(200)));
                assert_eq!(update.factor, Some(dec!(1.05)));
                assert_eq!(
                    update.record_date,
                    Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
                );
            }
            other => panic!("Expected overwrite, got {:?}", other),
        }
    }

    #[test]
    fn import_mode_round_trips() {
        assert_eq!("create".parse::<ImportMode>().unwrap(), ImportMode::Create);
        assert_eq!("update".parse::<ImportMode>().unwrap(), ImportMode::Update);
        assert!("merge".parse::<ImportMode>().is_err());
    }
}
