use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::auth::auth_constants::*;

/// Application-level role layered on top of the host identity substrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Broker,
    TaxSpecialist,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Broker => ROLE_BROKER,
            Role::TaxSpecialist => ROLE_TAX_SPECIALIST,
        }
    }

    /// Seed role for a freshly created account: staff accounts start as
    /// administrators, everyone else as a broker.
    pub fn seed_for(is_staff: bool) -> Self {
        if is_staff {
            Role::Admin
        } else {
            Role::Broker
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_BROKER => Ok(Role::Broker),
            ROLE_TAX_SPECIALIST => Ok(Role::TaxSpecialist),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Per-request authorization context.
///
/// Constructed once per inbound request from the authenticated identity and
/// the profile lookup, then passed explicitly into every protected operation.
/// Nothing in this crate reads role information from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthContext {
    pub user_id: String,
    pub email: String,
    pub is_staff: bool,
    pub role: Role,
}

impl AuthContext {
    pub fn new(user_id: impl Into<String>, email: impl Into<String>, is_staff: bool, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            is_staff,
            role,
        }
    }

    /// Administrators are either profiled as admin or flagged staff by the
    /// host identity substrate.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin || self.is_staff
    }

    /// Classification CRUD and bulk ingestion are admin-only.
    pub fn can_manage_classifications(&self) -> bool {
        self.is_admin()
    }

    pub fn can_ingest(&self) -> bool {
        self.is_admin()
    }

    pub fn can_delete_tax_data(&self) -> bool {
        self.is_admin()
    }

    /// Qualifications can be created and edited by all three roles.
    pub fn can_manage_qualifications(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Broker | Role::TaxSpecialist) || self.is_staff
    }

    /// Deleting a qualification is reserved to administrators.
    pub fn can_delete_qualifications(&self) -> bool {
        self.is_admin()
    }
}

/// Domain model for a user profile carrying the application role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub user_id: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserProfile {
    pub user_id: String,
    pub role: Role,
}
