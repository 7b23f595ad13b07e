//! Database model for tax-data records.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{optional_decimal_to_string, parse_optional_decimal};
use tributo_core::tax_data::{NewTaxData, TaxData};

/// Database model for tax-data records. Decimal columns are stored as TEXT
/// and re-parsed on load.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::tax_data)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaxDataDB {
    pub id: String,
    pub classification_id: String,
    pub name: String,
    pub amount: Option<String>,
    pub factor: Option<String>,
    pub record_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

impl From<TaxDataDB> for TaxData {
    fn from(db: TaxDataDB) -> Self {
        Self {
            id: db.id,
            classification_id: db.classification_id,
            name: db.name,
            amount: parse_optional_decimal(db.amount.as_deref(), "amount"),
            factor: parse_optional_decimal(db.factor.as_deref(), "factor"),
            record_date: db.record_date,
            created_at: db.created_at,
        }
    }
}

impl From<NewTaxData> for TaxDataDB {
    fn from(domain: NewTaxData) -> Self {
        Self {
            id: String::new(),
            classification_id: domain.classification_id,
            name: domain.name,
            amount: optional_decimal_to_string(&domain.amount),
            factor: optional_decimal_to_string(&domain.factor),
            record_date: domain.record_date,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
