use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::tax_data::TaxDataError;

/// Domain model representing a single tax-data record.
///
/// `amount`, `factor` and `record_date` are optional by design: the bulk
/// ingestion pipeline degrades per field, so any subset may be populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxData {
    pub id: String,
    pub classification_id: String,
    pub name: String,
    pub amount: Option<Decimal>,
    pub factor: Option<Decimal>,
    pub record_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new tax-data record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaxData {
    pub classification_id: String,
    pub name: String,
    pub amount: Option<Decimal>,
    pub factor: Option<Decimal>,
    pub record_date: Option<NaiveDate>,
}

impl NewTaxData {
    /// Validates the new tax-data record.
    pub fn validate(&self) -> Result<()> {
        if self.classification_id.trim().is_empty() {
            return Err(TaxDataError::InvalidData(
                "Classification ID cannot be empty".to_string(),
            )
            .into());
        }
        if self.name.trim().is_empty() {
            return Err(TaxDataError::InvalidData("Name cannot be empty".to_string()).into());
        }
        Ok(())
    }
}

/// Input model for overwriting the mutable fields of an existing record.
///
/// Name and classification are the reconciliation key and stay immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxDataUpdate {
    pub id: String,
    pub amount: Option<Decimal>,
    pub factor: Option<Decimal>,
    pub record_date: Option<NaiveDate>,
}

/// Model for tax-data search response metadata.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxDataSearchResponseMeta {
    pub total_row_count: i64,
}

/// Model for tax-data search response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxDataSearchResponse {
    pub data: Vec<TaxData>,
    pub meta: TaxDataSearchResponseMeta,
}

/// Aggregate figures for the reporting screens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxDataSummary {
    pub total_records: i64,
    pub records_with_amount: i64,
    pub total_amount: Decimal,
    pub average_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub min_amount: Option<Decimal>,
    pub average_factor: Option<Decimal>,
}
