//! Database models for users and registrations.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use tributo_core::users::{NewRegistration, NewUser, Registration, User};

/// Database model for users.
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
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub created_at: NaiveDateTime,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            email: db.email,
            full_name: db.full_name,
            password_hash: db.password_hash,
            is_staff: db.is_staff,
            created_at: db.created_at,
        }
    }
}

impl From<NewUser> for UserDB {
    fn from(domain: NewUser) -> Self {
        Self {
            id: String::new(),
            email: domain.email,
            full_name: domain.full_name,
            password_hash: domain.password_hash,
            is_staff: domain.is_staff,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Database model for sign-up registrations.
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::registrations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RegistrationDB {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub tax_identifier: String,
    pub birth_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl From<RegistrationDB> for Registration {
    fn from(db: RegistrationDB) -> Self {
        Self {
            id: db.id,
            full_name: db.full_name,
            email: db.email,
            country: db.country,
            tax_identifier: db.tax_identifier,
            birth_date: db.birth_date,
            created_at: db.created_at,
        }
    }
}

impl From<NewRegistration> for RegistrationDB {
    fn from(domain: NewRegistration) -> Self {
        Self {
            id: String::new(),
            full_name: domain.full_name,
            email: domain.email,
            country: domain.country,
            tax_identifier: domain.tax_identifier,
            birth_date: domain.birth_date,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
