//! String codes for user roles as persisted and exchanged with the host app.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_BROKER: &str = "broker";
pub const ROLE_TAX_SPECIALIST: &str = "tax_specialist";
