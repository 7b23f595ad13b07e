use log::warn;
use std::sync::Arc;

use super::auth_model::{AuthContext, NewUserProfile, Role, UserProfile};
use super::auth_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
use crate::errors::Result;

/// Service for managing user profiles and building authorization contexts.
pub struct ProfileService {
    repository: Arc<dyn ProfileRepositoryTrait>,
}

impl ProfileService {
    /// Creates a new ProfileService instance.
    pub fn new(repository: Arc<dyn ProfileRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ProfileServiceTrait for ProfileService {
    async fn ensure_profile(&self, user_id: &str, is_staff: bool) -> Result<UserProfile> {
        if let Some(existing) = self.repository.get_by_user_id(user_id)? {
            return Ok(existing);
        }

        self.repository
            .create(NewUserProfile {
                user_id: user_id.to_string(),
                role: Role::seed_for(is_staff),
            })
            .await
    }

    fn resolve_context(&self, user_id: &str, email: &str, is_staff: bool) -> AuthContext {
        let role = match self.repository.get_by_user_id(user_id) {
            Ok(Some(profile)) => profile.role,
            Ok(None) => Role::seed_for(is_staff),
            Err(e) => {
                warn!(
                    "Profile lookup failed for user {}: {}. Falling back to staff flag.",
                    user_id, e
                );
                Role::seed_for(is_staff)
            }
        };

        AuthContext::new(user_id, email, is_staff, role)
    }

    async fn set_role(&self, user_id: &str, role: Role) -> Result<UserProfile> {
        self.repository.update_role(user_id, role).await
    }
}
