//! User repository and registration service traits.

use async_trait::async_trait;

use super::users_model::{NewRegistration, NewUser, Registration, RegistrationRequest, User};
use crate::auth::Role;
use crate::errors::Result;

/// Credential hashing seam.
///
/// Implemented by the hosting application on top of whatever its identity
/// substrate uses; the core never sees more than the opaque hash.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, raw_password: &str) -> Result<String>;
}

/// Trait defining the contract for user repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: &str) -> Result<User>;

    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Creates the user, its registration record and the seeded profile in
    /// one transaction. Sign-up either fully lands or leaves nothing behind.
    async fn create_with_registration(
        &self,
        new_user: NewUser,
        new_registration: NewRegistration,
        seed_role: Role,
    ) -> Result<User>;

    /// Most recent registrations first, capped at `limit`.
    fn recent_registrations(&self, limit: i64) -> Result<Vec<Registration>>;
}

/// Trait defining the contract for registration service operations.
#[async_trait]
pub trait RegistrationServiceTrait: Send + Sync {
    /// Validates and executes a sign-up request.
    async fn register(&self, request: RegistrationRequest) -> Result<User>;

    fn get_user(&self, user_id: &str) -> Result<User>;

    fn recent_registrations(&self, limit: i64) -> Result<Vec<Registration>>;
}
