use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::classifications;

use super::model::ClassificationDB;
use tributo_core::classifications::{
    Classification, ClassificationRepositoryTrait, ClassificationSummary, ClassificationUpdate,
    NewClassification,
};
use tributo_core::errors::Result;

/// Repository for managing classification data in the database.
pub struct ClassificationRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ClassificationRepository {
    /// Creates a new ClassificationRepository instance.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[derive(QueryableByName, Debug)]
struct ClassificationCountRow {
    #[diesel(sql_type = diesel::sql_types::Text)]
    id: String,
    #[diesel(sql_type = diesel::sql_types::Text)]
    name: String,
    #[diesel(sql_type = diesel::sql_types::Timestamp)]
    created_at: NaiveDateTime,
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    data_count: i64,
}

#[async_trait]
impl ClassificationRepositoryTrait for ClassificationRepository {
    async fn create(&self, new_classification: NewClassification) -> Result<Classification> {
        self.writer
            .exec(move |conn| {
                let mut classification_db: ClassificationDB = new_classification.into();
                classification_db.id = uuid::Uuid::new_v4().to_string();

                diesel::insert_into(classifications::table)
                    .values(&classification_db)
                    .execute(conn)
                    .into_core()?;

                Ok(classification_db.into())
            })
            .await
    }

    async fn update(&self, update: ClassificationUpdate) -> Result<Classification> {
        self.writer
            .exec(move |conn| {
                diesel::update(classifications::table.find(&update.id))
                    .set(classifications::name.eq(&update.name))
                    .execute(conn)
                    .into_core()?;

                let classification = classifications::table
                    .select(ClassificationDB::as_select())
                    .find(&update.id)
                    .first::<ClassificationDB>(conn)
                    .into_core()?;

                Ok(classification.into())
            })
            .await
    }

    async fn delete(&self, classification_id: &str) -> Result<usize> {
        let id_owned = classification_id.to_string();
        self.writer
            .exec(move |conn| {
                // Owned tax_data rows fall with the FK cascade.
                let affected = diesel::delete(classifications::table.find(id_owned))
                    .execute(conn)
                    .into_core()?;
                Ok(affected)
            })
            .await
    }

    fn get_by_id(&self, classification_id: &str) -> Result<Classification> {
        let mut conn = get_connection(&self.pool)?;

        let classification = classifications::table
            .select(ClassificationDB::as_select())
            .find(classification_id)
            .first::<ClassificationDB>(&mut conn)
            .into_core()?;

        Ok(classification.into())
    }

    fn find_by_name(&self, name_param: &str) -> Result<Option<Classification>> {
        let mut conn = get_connection(&self.pool)?;

        let classification = classifications::table
            .select(ClassificationDB::as_select())
            .filter(classifications::name.eq(name_param))
            .first::<ClassificationDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(classification.map(Classification::from))
    }

    fn list(&self) -> Result<Vec<Classification>> {
        let mut conn = get_connection(&self.pool)?;

        let results = classifications::table
            .select(ClassificationDB::as_select())
            .order(classifications::name.asc())
            .load::<ClassificationDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Classification::from).collect())
    }

    fn list_with_counts(&self) -> Result<Vec<ClassificationSummary>> {
        let mut conn = get_connection(&self.pool)?;

        let rows: Vec<ClassificationCountRow> = diesel::sql_query(
            r#"
            SELECT c.id, c.name, c.created_at, COUNT(d.id) AS data_count
            FROM classifications c
            LEFT JOIN tax_data d ON d.classification_id = c.id
            GROUP BY c.id, c.name, c.created_at
            ORDER BY c.created_at DESC
            "#,
        )
        .load(&mut conn)
        .into_core()?;

        Ok(rows
            .into_iter()
            .map(|row| ClassificationSummary {
                id: row.id,
                name: row.name,
                created_at: row.created_at,
                data_count: row.data_count,
            })
            .collect())
    }
}
