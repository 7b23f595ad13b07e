use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::users::users_constants::{COUNTRIES, MINIMUM_AGE};
use crate::users::UserError;

/// Domain model for a user account.
///
/// Authentication itself (sessions, credential checks) belongs to the host
/// identity substrate; the core stores the opaque password hash it is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_staff: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub is_staff: bool,
}

/// Domain model for the sign-up registration kept alongside the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub tax_identifier: String,
    pub birth_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Insertable registration record, derived from a validated request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub tax_identifier: String,
    pub birth_date: NaiveDate,
}

/// The raw sign-up form as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub country: String,
    pub tax_identifier: String,
    pub birth_date: NaiveDate,
}

impl RegistrationRequest {
    /// Field-level validation; `today` is passed in so the age rule is
    /// deterministic under test.
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(UserError::InvalidData("Full name cannot be empty".to_string()).into());
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(UserError::InvalidData(format!(
                "'{}' is not a valid email address",
                self.email
            ))
            .into());
        }
        if self.password.is_empty() {
            return Err(UserError::InvalidData("Password cannot be empty".to_string()).into());
        }
        if self.password != self.password_confirm {
            return Err(UserError::PasswordMismatch.into());
        }
        if !COUNTRIES.contains(&self.country.to_lowercase().as_str()) {
            return Err(
                UserError::InvalidData(format!("Unknown country '{}'", self.country)).into(),
            );
        }
        if self.tax_identifier.trim().is_empty() {
            return Err(
                UserError::InvalidData("Tax identifier cannot be empty".to_string()).into(),
            );
        }
        if age_on(self.birth_date, today) < MINIMUM_AGE {
            return Err(UserError::Underage(MINIMUM_AGE).into());
        }
        Ok(())
    }

    /// Strips the credentials off, leaving the persistable record.
    pub fn to_registration(&self) -> NewRegistration {
        NewRegistration {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            country: self.country.to_lowercase(),
            tax_identifier: self.tax_identifier.trim().to_string(),
            birth_date: self.birth_date,
        }
    }
}

/// Completed years between `birth_date` and `today`.
fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}
