//! Profile repository and service traits.
//!
//! These traits define the contract for profile operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::auth_model::{AuthContext, NewUserProfile, Role, UserProfile};
use crate::errors::Result;

/// Trait defining the contract for UserProfile repository operations.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    /// Creates a new profile row.
    async fn create(&self, new_profile: NewUserProfile) -> Result<UserProfile>;

    /// Looks up the profile attached to a user, if any.
    fn get_by_user_id(&self, user_id: &str) -> Result<Option<UserProfile>>;

    /// Replaces the role on an existing profile.
    async fn update_role(&self, user_id: &str, role: Role) -> Result<UserProfile>;
}

/// Trait defining the contract for profile/authorization service operations.
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    /// Returns the user's profile, creating it with the seed role when the
    /// user has none yet.
    async fn ensure_profile(&self, user_id: &str, is_staff: bool) -> Result<UserProfile>;

    /// Builds the per-request [`AuthContext`] from the authenticated
    /// identity, falling back to the staff flag when the profile lookup
    /// fails or finds nothing.
    fn resolve_context(&self, user_id: &str, email: &str, is_staff: bool) -> AuthContext;

    /// Assigns a new role to a user.
    async fn set_role(&self, user_id: &str, role: Role) -> Result<UserProfile>;
}
