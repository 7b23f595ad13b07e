//! Database model for user profiles.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use tributo_core::auth::{NewUserProfile, Role, UserProfile};

/// Database model for user profiles.
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
#[diesel(table_name = crate::schema::user_profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProfileDB {
    pub id: String,
    pub user_id: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ProfileDB {
    /// Builds an insertable row from the domain input, stamping identity and
    /// timestamps.
    pub fn from_new(domain: NewUserProfile) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: domain.user_id,
            role: domain.role.as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<ProfileDB> for UserProfile {
    fn from(db: ProfileDB) -> Self {
        let role = Role::from_str(&db.role).unwrap_or_else(|e| {
            error!("Stored role is invalid ({}), falling back to broker", e);
            Role::Broker
        });
        Self {
            id: db.id,
            user_id: db.user_id,
            role,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
