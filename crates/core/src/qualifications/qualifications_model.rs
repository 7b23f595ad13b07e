use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::auth::Role;
use crate::errors::Result;
use crate::qualifications::qualifications_constants::*;
use crate::qualifications::QualificationError;

/// Market segment of the qualified instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Market {
    Ac,
    Acciones,
    Bonos,
    Futuros,
}

impl Market {
    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Ac => MARKET_AC,
            Market::Acciones => MARKET_ACCIONES,
            Market::Bonos => MARKET_BONOS,
            Market::Futuros => MARKET_FUTUROS,
        }
    }
}

impl FromStr for Market {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            MARKET_AC => Ok(Market::Ac),
            MARKET_ACCIONES => Ok(Market::Acciones),
            MARKET_BONOS => Ok(Market::Bonos),
            MARKET_FUTUROS => Ok(Market::Futuros),
            _ => Err(format!("Unknown market: {}", s)),
        }
    }
}

/// Provenance tag on a qualification, derived from the creator's role at
/// creation time. Never user-supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Origin {
    Broker,
    TaxSpecialist,
    Admin,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Broker => ORIGIN_BROKER,
            Origin::TaxSpecialist => ORIGIN_TAX_SPECIALIST,
            Origin::Admin => ORIGIN_ADMIN,
        }
    }

    pub fn from_role(role: Role) -> Self {
        match role {
            Role::Broker => Origin::Broker,
            Role::TaxSpecialist => Origin::TaxSpecialist,
            Role::Admin => Origin::Admin,
        }
    }
}

impl FromStr for Origin {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            ORIGIN_BROKER => Ok(Origin::Broker),
            ORIGIN_TAX_SPECIALIST => Ok(Origin::TaxSpecialist),
            ORIGIN_ADMIN => Ok(Origin::Admin),
            _ => Err(format!("Unknown origin: {}", s)),
        }
    }
}

/// The 31 parallel credit-factor columns.
///
/// Always fully present: a missing column defaults to zero, never null.
/// The statutory label for each field lives in [`FACTOR_DESCRIPTIONS`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactorSet {
    pub factor_08: Decimal,
    pub factor_09: Decimal,
    pub factor_10: Decimal,
    pub factor_11: Decimal,
    pub factor_12: Decimal,
    pub factor_13: Decimal,
    pub factor_14: Decimal,
    pub factor_15: Decimal,
    pub factor_16: Decimal,
    pub factor_17: Decimal,
    pub factor_18: Decimal,
    pub factor_19: Decimal,
    pub factor_20: Decimal,
    pub factor_21: Decimal,
    pub factor_22: Decimal,
    pub factor_23: Decimal,
    pub factor_24: Decimal,
    pub factor_25: Decimal,
    pub factor_26: Decimal,
    pub factor_27: Decimal,
    pub factor_28: Decimal,
    pub factor_29: Decimal,
    pub factor_30: Decimal,
    pub factor_31: Decimal,
    pub factor_32: Decimal,
    pub factor_33: Decimal,
    pub factor_34: Decimal,
    pub factor_35: Decimal,
    pub factor_36: Decimal,
    pub factor_37: Decimal,
    pub factor_198: Decimal,
}

/// Domain model for a tax qualification record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxQualification {
    pub id: String,
    pub market: Market,
    pub instrument: String,
    pub description: String,
    pub payment_date: NaiveDate,
    /// Natural external identity; unique across the whole table, copies
    /// included.
    pub event_sequence: String,
    pub dividend: Decimal,
    pub historical_value: Decimal,
    pub update_factor: Decimal,
    pub year: i32,
    pub is_fut: bool,
    pub origin: Origin,
    pub pending_flag: bool,
    pub commercial_period: Option<i32>,
    pub capital_event: Decimal,
    #[serde(flatten)]
    pub factors: FactorSet,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new qualification.
///
/// `origin` and `created_by` are intentionally absent: the service derives
/// both from the authorization context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaxQualification {
    pub market: Market,
    pub instrument: String,
    pub description: String,
    pub payment_date: NaiveDate,
    pub event_sequence: String,
    pub dividend: Decimal,
    pub historical_value: Decimal,
    pub update_factor: Decimal,
    pub year: i32,
    pub is_fut: bool,
    pub pending_flag: bool,
    pub commercial_period: Option<i32>,
    pub capital_event: Decimal,
    #[serde(flatten)]
    pub factors: FactorSet,
}

impl NewTaxQualification {
    /// Validates the new qualification data.
    pub fn validate(&self) -> Result<()> {
        if self.instrument.trim().is_empty() {
            return Err(
                QualificationError::InvalidData("Instrument cannot be empty".to_string()).into(),
            );
        }
        if self.event_sequence.trim().is_empty() {
            return Err(QualificationError::InvalidData(
                "Event sequence cannot be empty".to_string(),
            )
            .into());
        }
        if !(1900..=2100).contains(&self.year) {
            return Err(QualificationError::InvalidData(format!(
                "Year {} is out of range",
                self.year
            ))
            .into());
        }
        Ok(())
    }
}

/// Input model for modifying an existing qualification, all factors
/// included. Creator and timestamps stay immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxQualificationUpdate {
    pub id: String,
    pub market: Market,
    pub instrument: String,
    pub description: String,
    pub payment_date: NaiveDate,
    pub event_sequence: String,
    pub dividend: Decimal,
    pub historical_value: Decimal,
    pub update_factor: Decimal,
    pub year: i32,
    pub is_fut: bool,
    pub pending_flag: bool,
    pub commercial_period: Option<i32>,
    pub capital_event: Decimal,
    #[serde(flatten)]
    pub factors: FactorSet,
}

impl TaxQualificationUpdate {
    /// Validates the qualification update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(QualificationError::InvalidData(
                "Qualification ID is required for updates".to_string(),
            )
            .into());
        }
        if self.instrument.trim().is_empty() {
            return Err(
                QualificationError::InvalidData("Instrument cannot be empty".to_string()).into(),
            );
        }
        if self.event_sequence.trim().is_empty() {
            return Err(QualificationError::InvalidData(
                "Event sequence cannot be empty".to_string(),
            )
            .into());
        }
        if !(1900..=2100).contains(&self.year) {
            return Err(QualificationError::InvalidData(format!(
                "Year {} is out of range",
                self.year
            ))
            .into());
        }
        Ok(())
    }
}

/// Filters for the qualification listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationFilters {
    pub market: Option<Market>,
    pub origin: Option<Origin>,
    pub pending: Option<bool>,
    pub year: Option<i32>,
    /// Free text matched against instrument, description and event sequence.
    pub query: Option<String>,
}

/// Model for qualification search response metadata.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationSearchResponseMeta {
    pub total_row_count: i64,
}

/// Model for qualification search response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationSearchResponse {
    pub data: Vec<TaxQualification>,
    pub meta: QualificationSearchResponseMeta,
}

/// One bucket of a grouped count (market or origin breakdowns).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountBucket {
    pub key: String,
    pub count: i64,
}

/// One year of a per-year breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearCount {
    pub year: i32,
    pub count: i64,
}

/// Personal figures for the role dashboards: what one user has created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorStats {
    pub total: i64,
    pub pending: i64,
    pub by_market: Vec<CountBucket>,
    pub by_origin: Vec<CountBucket>,
    pub by_year: Vec<YearCount>,
}
