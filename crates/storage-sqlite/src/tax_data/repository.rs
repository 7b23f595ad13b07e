use async_trait::async_trait;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::tax_data;
use crate::utils::{optional_decimal_to_string, parse_optional_decimal};

use super::model::TaxDataDB;
use tributo_core::errors::Result;
use tributo_core::tax_data::{
    NewTaxData, TaxData, TaxDataRepositoryTrait, TaxDataSearchResponse, TaxDataSearchResponseMeta,
    TaxDataSummary, TaxDataUpdate,
};

/// Repository for managing tax-data records in the database.
pub struct TaxDataRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TaxDataRepository {
    /// Creates a new TaxDataRepository instance.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl TaxDataRepositoryTrait for TaxDataRepository {
    async fn create(&self, new_data: NewTaxData) -> Result<TaxData> {
        new_data.validate()?;

        self.writer
            .exec(move |conn| {
                let mut tax_data_db: TaxDataDB = new_data.into();
                tax_data_db.id = uuid::Uuid::new_v4().to_string();

                diesel::insert_into(tax_data::table)
                    .values(&tax_data_db)
                    .execute(conn)
                    .into_core()?;

                Ok(tax_data_db.into())
            })
            .await
    }

    async fn update(&self, update: TaxDataUpdate) -> Result<TaxData> {
        self.writer
            .exec(move |conn| {
                diesel::update(tax_data::table.find(&update.id))
                    .set((
                        tax_data::amount.eq(optional_decimal_to_string(&update.amount)),
                        tax_data::factor.eq(optional_decimal_to_string(&update.factor)),
                        tax_data::record_date.eq(update.record_date),
                    ))
                    .execute(conn)
                    .into_core()?;

                let record = tax_data::table
                    .select(TaxDataDB::as_select())
                    .find(&update.id)
                    .first::<TaxDataDB>(conn)
                    .into_core()?;

                Ok(record.into())
            })
            .await
    }

    async fn delete(&self, tax_data_id: &str) -> Result<usize> {
        let id_owned = tax_data_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::delete(tax_data::table.find(id_owned))
                    .execute(conn)
                    .into_core()?;
                Ok(affected)
            })
            .await
    }

    fn get_by_id(&self, tax_data_id: &str) -> Result<TaxData> {
        let mut conn = get_connection(&self.pool)?;

        let record = tax_data::table
            .select(TaxDataDB::as_select())
            .find(tax_data_id)
            .first::<TaxDataDB>(&mut conn)
            .into_core()?;

        Ok(record.into())
    }

    fn find_by_classification_and_name(
        &self,
        classification_id: &str,
        name: &str,
    ) -> Result<Option<TaxData>> {
        let mut conn = get_connection(&self.pool)?;

        // Duplicates are possible after create-mode imports; the newest
        // record wins the soft-key lookup.
        let record = tax_data::table
            .select(TaxDataDB::as_select())
            .filter(tax_data::classification_id.eq(classification_id))
            .filter(tax_data::name.eq(name))
            .order(tax_data::created_at.desc())
            .first::<TaxDataDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(record.map(TaxData::from))
    }

    fn search(
        &self,
        page: i64,
        page_size: i64,
        query: Option<String>,
        classification_id: Option<String>,
    ) -> Result<TaxDataSearchResponse> {
        let mut conn = get_connection(&self.pool)?;

        let build_query = || {
            let mut q = tax_data::table.into_boxed();
            if let Some(ref text) = query {
                q = q.filter(tax_data::name.like(format!("%{}%", text)));
            }
            if let Some(ref classification) = classification_id {
                q = q.filter(tax_data::classification_id.eq(classification.clone()));
            }
            q
        };

        let total_row_count = build_query()
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()?;

        let offset = (page.max(1) - 1) * page_size;
        let results = build_query()
            .select(TaxDataDB::as_select())
            .order(tax_data::created_at.desc())
            .limit(page_size)
            .offset(offset)
            .load::<TaxDataDB>(&mut conn)
            .into_core()?;

        Ok(TaxDataSearchResponse {
            data: results.into_iter().map(TaxData::from).collect(),
            meta: TaxDataSearchResponseMeta { total_row_count },
        })
    }

    fn summary(&self) -> Result<TaxDataSummary> {
        let mut conn = get_connection(&self.pool)?;

        // Amounts are TEXT-backed decimals, so the aggregation happens here
        // rather than in SQL, keeping full precision.
        let rows = tax_data::table
            .select((tax_data::amount, tax_data::factor))
            .load::<(Option<String>, Option<String>)>(&mut conn)
            .into_core()?;

        let mut summary = TaxDataSummary {
            total_records: rows.len() as i64,
            ..Default::default()
        };

        let mut factor_sum = Decimal::ZERO;
        let mut factor_count = 0i64;

        for (amount, factor) in &rows {
            if let Some(amount) = parse_optional_decimal(amount.as_deref(), "amount") {
                summary.records_with_amount += 1;
                summary.total_amount += amount;
                summary.max_amount = Some(summary.max_amount.map_or(amount, |m| m.max(amount)));
                summary.min_amount = Some(summary.min_amount.map_or(amount, |m| m.min(amount)));
            }
            if let Some(factor) = parse_optional_decimal(factor.as_deref(), "factor") {
                factor_sum += factor;
                factor_count += 1;
            }
        }

        if summary.records_with_amount > 0 {
            summary.average_amount =
                Some(summary.total_amount / Decimal::from(summary.records_with_amount));
        }
        if factor_count > 0 {
            summary.average_factor = Some(factor_sum / Decimal::from(factor_count));
        }

        Ok(summary)
    }
}
