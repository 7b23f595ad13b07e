use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::classifications::ClassificationError;
use crate::errors::Result;

/// Domain model representing a classification (e.g. "Renta Fija").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClassification {
    pub name: String,
}

impl NewClassification {
    /// Validates the new classification data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ClassificationError::InvalidData(
                "Classification name cannot be empty".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Input model for renaming an existing classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationUpdate {
    pub id: String,
    pub name: String,
}

impl ClassificationUpdate {
    /// Validates the classification update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ClassificationError::InvalidData(
                "Classification ID is required for updates".to_string(),
            )
            .into());
        }
        if self.name.trim().is_empty() {
            return Err(ClassificationError::InvalidData(
                "Classification name cannot be empty".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Listing row for the management screen: classification plus how many
/// tax-data records it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationSummary {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub data_count: i64,
}
