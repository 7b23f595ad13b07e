use log::info;
use std::sync::Arc;

use super::users_model::{NewUser, Registration, RegistrationRequest, User};
use super::users_traits::{PasswordHasher, RegistrationServiceTrait, UserRepositoryTrait};
use crate::auth::Role;
use crate::errors::Result;
use crate::users::UserError;

/// Service handling user sign-up.
pub struct RegistrationService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl RegistrationService {
    /// Creates a new RegistrationService instance.
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait::async_trait]
impl RegistrationServiceTrait for RegistrationService {
    async fn register(&self, request: RegistrationRequest) -> Result<User> {
        let today = chrono::Utc::now().date_naive();
        request.validate(today)?;

        let registration = request.to_registration();
        if self
            .user_repository
            .find_by_email(&registration.email)?
            .is_some()
        {
            return Err(UserError::DuplicateEmail(registration.email).into());
        }

        let password_hash = self.password_hasher.hash(&request.password)?;
        let new_user = NewUser {
            email: registration.email.clone(),
            full_name: registration.full_name.clone(),
            password_hash,
            // Self-registered accounts are never staff; staff is granted
            // out-of-band by an administrator.
            is_staff: false,
        };

        let user = self
            .user_repository
            .create_with_registration(new_user, registration, Role::seed_for(false))
            .await?;

        info!("Registered user {}", user.email);
        Ok(user)
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.user_repository.get_by_id(user_id)
    }

    fn recent_registrations(&self, limit: i64) -> Result<Vec<Registration>> {
        self.user_repository.recent_registrations(limit)
    }
}
