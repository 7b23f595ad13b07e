use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::tax_qualifications;

use super::model::TaxQualificationDB;
use tributo_core::errors::Result;
use tributo_core::qualifications::{
    CountBucket, CreatorStats, NewTaxQualification, Origin, QualificationFilters,
    QualificationRepositoryTrait, QualificationSearchResponse, QualificationSearchResponseMeta,
    TaxQualification, TaxQualificationUpdate, YearCount,
};

/// Repository for managing tax qualification data in the database.
pub struct QualificationRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl QualificationRepository {
    /// Creates a new QualificationRepository instance.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[derive(QueryableByName, Debug)]
struct TotalsRow {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    total: i64,
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pending: i64,
}

#[derive(QueryableByName, Debug)]
struct BucketRow {
    #[diesel(sql_type = diesel::sql_types::Text)]
    key: String,
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

#[derive(QueryableByName, Debug)]
struct YearRow {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    year: i32,
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

#[async_trait]
impl QualificationRepositoryTrait for QualificationRepository {
    async fn create(
        &self,
        new_qualification: NewTaxQualification,
        origin: Origin,
        created_by: Option<String>,
    ) -> Result<TaxQualification> {
        new_qualification.validate()?;

        self.writer
            .exec(move |conn| {
                let qualification_db =
                    TaxQualificationDB::from_new(new_qualification, origin, created_by);

                diesel::insert_into(tax_qualifications::table)
                    .values(&qualification_db)
                    .execute(conn)
                    .into_core()?;

                Ok(qualification_db.into())
            })
            .await
    }

    async fn update(&self, update: TaxQualificationUpdate) -> Result<TaxQualification> {
        update.validate()?;

        self.writer
            .exec(move |conn| {
                let mut qualification_db = tax_qualifications::table
                    .select(TaxQualificationDB::as_select())
                    .find(&update.id)
                    .first::<TaxQualificationDB>(conn)
                    .into_core()?;

                qualification_db.apply_update(update);

                diesel::update(tax_qualifications::table.find(&qualification_db.id))
                    .set(&qualification_db)
                    .execute(conn)
                    .into_core()?;

                Ok(qualification_db.into())
            })
            .await
    }

    async fn delete(&self, qualification_id: &str) -> Result<usize> {
        let id_owned = qualification_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::delete(tax_qualifications::table.find(id_owned))
                    .execute(conn)
                    .into_core()?;
                Ok(affected)
            })
            .await
    }

    fn get_by_id(&self, qualification_id: &str) -> Result<TaxQualification> {
        let mut conn = get_connection(&self.pool)?;

        let qualification = tax_qualifications::table
            .select(TaxQualificationDB::as_select())
            .find(qualification_id)
            .first::<TaxQualificationDB>(&mut conn)
            .into_core()?;

        Ok(qualification.into())
    }

    fn find_by_event_sequence(&self, event_sequence: &str) -> Result<Option<TaxQualification>> {
        let mut conn = get_connection(&self.pool)?;

        let qualification = tax_qualifications::table
            .select(TaxQualificationDB::as_select())
            .filter(tax_qualifications::event_sequence.eq(event_sequence))
            .first::<TaxQualificationDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(qualification.map(TaxQualification::from))
    }

    fn search(
        &self,
        page: i64,
        page_size: i64,
        filters: QualificationFilters,
    ) -> Result<QualificationSearchResponse> {
        let mut conn = get_connection(&self.pool)?;

        let build_query = || {
            let mut q = tax_qualifications::table.into_boxed();
            if let Some(market) = filters.market {
                q = q.filter(tax_qualifications::market.eq(market.as_str()));
            }
            if let Some(origin) = filters.origin {
                q = q.filter(tax_qualifications::origin.eq(origin.as_str()));
            }
            if let Some(pending) = filters.pending {
                q = q.filter(tax_qualifications::pending_flag.eq(pending));
            }
            if let Some(year) = filters.year {
                q = q.filter(tax_qualifications::year.eq(year));
            }
            if let Some(ref text) = filters.query {
                let pattern = format!("%{}%", text);
                q = q.filter(
                    tax_qualifications::instrument
                        .like(pattern.clone())
                        .or(tax_qualifications::description.like(pattern.clone()))
                        .or(tax_qualifications::event_sequence.like(pattern)),
                );
            }
            q
        };

        let total_row_count = build_query()
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()?;

        let offset = (page.max(1) - 1) * page_size;
        let results = build_query()
            .select(TaxQualificationDB::as_select())
            .order((
                tax_qualifications::year.desc(),
                tax_qualifications::payment_date.desc(),
                tax_qualifications::instrument.asc(),
            ))
            .limit(page_size)
            .offset(offset)
            .load::<TaxQualificationDB>(&mut conn)
            .into_core()?;

        Ok(QualificationSearchResponse {
            data: results.into_iter().map(TaxQualification::from).collect(),
            meta: QualificationSearchResponseMeta { total_row_count },
        })
    }

    fn creator_stats(&self, user_id: &str) -> Result<CreatorStats> {
        let mut conn = get_connection(&self.pool)?;

        let totals: TotalsRow = diesel::sql_query(
            r#"
            SELECT COUNT(*) AS total,
                   COALESCE(SUM(CASE WHEN pending_flag THEN 1 ELSE 0 END), 0) AS pending
            FROM tax_qualifications
            WHERE created_by = ?
            "#,
        )
        .bind::<diesel::sql_types::Text, _>(user_id)
        .get_result(&mut conn)
        .into_core()?;

        let by_market: Vec<BucketRow> = diesel::sql_query(
            r#"
            SELECT market AS key, COUNT(*) AS count
            FROM tax_qualifications
            WHERE created_by = ?
            GROUP BY market
            ORDER BY count DESC
            "#,
        )
        .bind::<diesel::sql_types::Text, _>(user_id)
        .load(&mut conn)
        .into_core()?;

        let by_origin: Vec<BucketRow> = diesel::sql_query(
            r#"
            SELECT origin AS key, COUNT(*) AS count
            FROM tax_qualifications
            WHERE created_by = ?
            GROUP BY origin
            ORDER BY count DESC
            "#,
        )
        .bind::<diesel::sql_types::Text, _>(user_id)
        .load(&mut conn)
        .into_core()?;

        let by_year: Vec<YearRow> = diesel::sql_query(
            r#"
            SELECT year, COUNT(*) AS count
            FROM tax_qualifications
            WHERE created_by = ?
            GROUP BY year
            ORDER BY year DESC
            "#,
        )
        .bind::<diesel::sql_types::Text, _>(user_id)
        .load(&mut conn)
        .into_core()?;

        Ok(CreatorStats {
            total: totals.total,
            pending: totals.pending,
            by_market: by_market
                .into_iter()
                .map(|row| CountBucket {
                    key: row.key,
                    count: row.count,
                })
                .collect(),
            by_origin: by_origin
                .into_iter()
                .map(|row| CountBucket {
                    key: row.key,
                    count: row.count,
                })
                .collect(),
            by_year: by_year
                .into_iter()
                .map(|row| YearCount {
                    year: row.year,
                    count: row.count,
                })
                .collect(),
        })
    }
}
