//! Database model for tax qualifications.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::{decimal_to_string, parse_decimal_tolerant};
use tributo_core::qualifications::{
    FactorSet, Market, NewTaxQualification, Origin, TaxQualification, TaxQualificationUpdate,
};

/// Database model for tax qualifications. All decimal columns, the 31
/// credit factors included, are stored as TEXT and re-parsed on load.
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
#[diesel(table_name = crate::schema::tax_qualifications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaxQualificationDB {
    pub id: String,
    pub market: String,
    pub instrument: String,
    pub description: String,
    pub payment_date: NaiveDate,
    pub event_sequence: String,
    pub dividend: String,
    pub historical_value: String,
    pub update_factor: String,
    pub year: i32,
    pub is_fut: bool,
    pub origin: String,
    pub pending_flag: bool,
    pub commercial_period: Option<i32>,
    pub capital_event: String,
    pub factor_08: String,
    pub factor_09: String,
    pub factor_10: String,
    pub factor_11: String,
    pub factor_12: String,
    pub factor_13: String,
    pub factor_14: String,
    pub factor_15: String,
    pub factor_16: String,
    pub factor_17: String,
    pub factor_18: String,
    pub factor_19: String,
    pub factor_20: String,
    pub factor_21: String,
    pub factor_22: String,
    pub factor_23: String,
    pub factor_24: String,
    pub factor_25: String,
    pub factor_26: String,
    pub factor_27: String,
    pub factor_28: String,
    pub factor_29: String,
    pub factor_30: String,
    pub factor_31: String,
    pub factor_32: String,
    pub factor_33: String,
    pub factor_34: String,
    pub factor_35: String,
    pub factor_36: String,
    pub factor_37: String,
    pub factor_198: String,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn factors_to_columns(factors: &FactorSet) -> [String; 31] {
    [
        decimal_to_string(&factors.factor_08),
        decimal_to_string(&factors.factor_09),
        decimal_to_string(&factors.factor_10),
        decimal_to_string(&factors.factor_11),
        decimal_to_string(&factors.factor_12),
        decimal_to_string(&factors.factor_13),
        decimal_to_string(&factors.factor_14),
        decimal_to_string(&factors.factor_15),
        decimal_to_string(&factors.factor_16),
        decimal_to_string(&factors.factor_17),
        decimal_to_string(&factors.factor_18),
        decimal_to_string(&factors.factor_19),
        decimal_to_string(&factors.factor_20),
        decimal_to_string(&factors.factor_21),
        decimal_to_string(&factors.factor_22),
        decimal_to_string(&factors.factor_23),
        decimal_to_string(&factors.factor_24),
        decimal_to_string(&factors.factor_25),
        decimal_to_string(&factors.factor_26),
        decimal_to_string(&factors.factor_27),
        decimal_to_string(&factors.factor_28),
        decimal_to_string(&factors.factor_29),
        decimal_to_string(&factors.factor_30),
        decimal_to_string(&factors.factor_31),
        decimal_to_string(&factors.factor_32),
        decimal_to_string(&factors.factor_33),
        decimal_to_string(&factors.factor_34),
        decimal_to_string(&factors.factor_35),
        decimal_to_string(&factors.factor_36),
        decimal_to_string(&factors.factor_37),
        decimal_to_string(&factors.factor_198),
    ]
}

impl TaxQualificationDB {
    /// Builds an insertable row with the provenance the service derived.
    /// Identity and timestamps are stamped here.
    pub fn from_new(
        domain: NewTaxQualification,
        origin: Origin,
        created_by: Option<String>,
    ) -> Self {
        let now = chrono::Utc::now().naive_utc();
        let [factor_08, factor_09, factor_10, factor_11, factor_12, factor_13, factor_14, factor_15, factor_16, factor_17, factor_18, factor_19, factor_20, factor_21, factor_22, factor_23, factor_24, factor_25, factor_26, factor_27, factor_28, factor_29, factor_30, factor_31, factor_32, factor_33, factor_34, factor_35, factor_36, factor_37, factor_198] =
            factors_to_columns(&domain.factors);

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            market: domain.market.as_str().to_string(),
            instrument: domain.instrument,
            description: domain.description,
            payment_date: domain.payment_date,
            event_sequence: domain.event_sequence,
            dividend: decimal_to_string(&domain.dividend),
            historical_value: decimal_to_string(&domain.historical_value),
            update_factor: decimal_to_string(&domain.update_factor),
            year: domain.year,
            is_fut: domain.is_fut,
            origin: origin.as_str().to_string(),
            pending_flag: domain.pending_flag,
            commercial_period: domain.commercial_period,
            capital_event: decimal_to_string(&domain.capital_event),
            factor_08,
            factor_09,
            factor_10,
            factor_11,
            factor_12,
            factor_13,
            factor_14,
            factor_15,
            factor_16,
            factor_17,
            factor_18,
            factor_19,
            factor_20,
            factor_21,
            factor_22,
            factor_23,
            factor_24,
            factor_25,
            factor_26,
            factor_27,
            factor_28,
            factor_29,
            factor_30,
            factor_31,
            factor_32,
            factor_33,
            factor_34,
            factor_35,
            factor_36,
            factor_37,
            factor_198,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the mutable fields from an update request. Identity,
    /// provenance and creation audit stay untouched; `updated_at` refreshes.
    pub fn apply_update(&mut self, update: TaxQualificationUpdate) {
        let [factor_08, factor_09, factor_10, factor_11, factor_12, factor_13, factor_14, factor_15, factor_16, factor_17, factor_18, factor_19, factor_20, factor_21, factor_22, factor_23, factor_24, factor_25, factor_26, factor_27, factor_28, factor_29, factor_30, factor_31, factor_32, factor_33, factor_34, factor_35, factor_36, factor_37, factor_198] =
            factors_to_columns(&update.factors);

        self.market = update.market.as_str().to_string();
        self.instrument = update.instrument;
        self.description = update.description;
        self.payment_date = update.payment_date;
        self.event_sequence = update.event_sequence;
        self.dividend = decimal_to_string(&update.dividend);
        self.historical_value = decimal_to_string(&update.historical_value);
        self.update_factor = decimal_to_string(&update.update_factor);
        self.year = update.year;
        self.is_fut = update.is_fut;
        self.pending_flag = update.pending_flag;
        self.commercial_period = update.commercial_period;
        self.capital_event = decimal_to_string(&update.capital_event);
        self.factor_08 = factor_08;
        self.factor_09 = factor_09;
        self.factor_10 = factor_10;
        self.factor_11 = factor_11;
        self.factor_12 = factor_12;
        self.factor_13 = factor_13;
        self.factor_14 = factor_14;
        self.factor_15 = factor_15;
        self.factor_16 = factor_16;
        self.factor_17 = factor_17;
        self.factor_18 = factor_18;
        self.factor_19 = factor_19;
        self.factor_20 = factor_20;
        self.factor_21 = factor_21;
        self.factor_22 = factor_22;
        self.factor_23 = factor_23;
        self.factor_24 = factor_24;
        self.factor_25 = factor_25;
        self.factor_26 = factor_26;
        self.factor_27 = factor_27;
        self.factor_28 = factor_28;
        self.factor_29 = factor_29;
        self.factor_30 = factor_30;
        self.factor_31 = factor_31;
        self.factor_32 = factor_32;
        self.factor_33 = factor_33;
        self.factor_34 = factor_34;
        self.factor_35 = factor_35;
        self.factor_36 = factor_36;
        self.factor_37 = factor_37;
        self.factor_198 = factor_198;
        self.updated_at = chrono::Utc::now().naive_utc();
    }
}

impl From<TaxQualificationDB> for TaxQualification {
    fn from(db: TaxQualificationDB) -> Self {
        let market = Market::from_str(&db.market).unwrap_or_else(|e| {
            error!("Stored market is invalid ({}), falling back to AC", e);
            Market::Ac
        });
        let origin = Origin::from_str(&db.origin).unwrap_or_else(|e| {
            error!("Stored origin is invalid ({}), falling back to broker", e);
            Origin::Broker
        });

        let factors = FactorSet {
            factor_08: parse_decimal_tolerant(&db.factor_08, "factor_08"),
            factor_09: parse_decimal_tolerant(&db.factor_09, "factor_09"),
            factor_10: parse_decimal_tolerant(&db.factor_10, "factor_10"),
            factor_11: parse_decimal_tolerant(&db.factor_11, "factor_11"),
            factor_12: parse_decimal_tolerant(&db.factor_12, "factor_12"),
            factor_13: parse_decimal_tolerant(&db.factor_13, "factor_13"),
            factor_14: parse_decimal_tolerant(&db.factor_14, "factor_14"),
            factor_15: parse_decimal_tolerant(&db.factor_15, "factor_15"),
            factor_16: parse_decimal_tolerant(&db.factor_16, "factor_16"),
            factor_17: parse_decimal_tolerant(&db.factor_17, "factor_17"),
            factor_18: parse_decimal_tolerant(&db.factor_18, "factor_18"),
            factor_19: parse_decimal_tolerant(&db.factor_19, "factor_19"),
            factor_20: parse_decimal_tolerant(&db.factor_20, "factor_20"),
            factor_21: parse_decimal_tolerant(&db.factor_21, "factor_21"),
            factor_22: parse_decimal_tolerant(&db.factor_22, "factor_22"),
            factor_23: parse_decimal_tolerant(&db.factor_23, "factor_23"),
            factor_24: parse_decimal_tolerant(&db.factor_24, "factor_24"),
            factor_25: parse_decimal_tolerant(&db.factor_25, "factor_25"),
            factor_26: parse_decimal_tolerant(&db.factor_26, "factor_26"),
            factor_27: parse_decimal_tolerant(&db.factor_27, "factor_27"),
            factor_28: parse_decimal_tolerant(&db.factor_28, "factor_28"),
            factor_29: parse_decimal_tolerant(&db.factor_29, "factor_29"),
            factor_30: parse_decimal_tolerant(&db.factor_30, "factor_30"),
            factor_31: parse_decimal_tolerant(&db.factor_31, "factor_31"),
            factor_32: parse_decimal_tolerant(&db.factor_32, "factor_32"),
            factor_33: parse_decimal_tolerant(&db.factor_33, "factor_33"),
            factor_34: parse_decimal_tolerant(&db.factor_34, "factor_34"),
            factor_35: parse_decimal_tolerant(&db.factor_35, "factor_35"),
            factor_36: parse_decimal_tolerant(&db.factor_36, "factor_36"),
            factor_37: parse_decimal_tolerant(&db.factor_37, "factor_37"),
            factor_198: parse_decimal_tolerant(&db.factor_198, "factor_198"),
        };

        Self {
            id: db.id,
            market,
            instrument: db.instrument,
            description: db.description,
            payment_date: db.payment_date,
            event_sequence: db.event_sequence,
            dividend: parse_decimal_tolerant(&db.dividend, "dividend"),
            historical_value: parse_decimal_tolerant(&db.historical_value, "historical_value"),
            update_factor: parse_decimal_tolerant(&db.update_factor, "update_factor"),
            year: db.year,
            is_fut: db.is_fut,
            origin,
            pending_flag: db.pending_flag,
            commercial_period: db.commercial_period,
            capital_event: parse_decimal_tolerant(&db.capital_event, "capital_event"),
            factors,
            created_by: db.created_by,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
