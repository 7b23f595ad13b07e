//! Database model for classifications.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use tributo_core::classifications::{Classification, NewClassification};

/// Database model for classifications.
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
#[diesel(table_name = crate::schema::classifications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ClassificationDB {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl From<ClassificationDB> for Classification {
    fn from(db: ClassificationDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            created_at: db.created_at,
        }
    }
}

impl From<NewClassification> for ClassificationDB {
    fn from(domain: NewClassification) -> Self {
        Self {
            id: String::new(),
            name: domain.name,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
