#[cfg(test)]
mod tests {
    use crate::auth::{
        AuthContext, NewUserProfile, ProfileRepositoryTrait, ProfileService, ProfileServiceTrait,
        Role, UserProfile,
    };
    use crate::errors::{DatabaseError, Error, Result};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct MockProfileRepository {
        profiles: Arc<Mutex<Vec<UserProfile>>>,
        fail_lookups: bool,
    }

    impl MockProfileRepository {
        fn new() -> Self {
            Self {
                profiles: Arc::new(Mutex::new(Vec::new())),
                fail_lookups: false,
            }
        }

        fn failing() -> Self {
            Self {
                profiles: Arc::new(Mutex::new(Vec::new())),
                fail_lookups: true,
            }
        }

        fn add(&self, user_id: &str, role: Role) {
            let now = chrono::Utc::now().naive_utc();
            self.profiles.lock().unwrap().push(UserProfile {
                id: format!("profile-{}", user_id),
                user_id: user_id.to_string(),
                role,
                created_at: now,
                updated_at: now,
            });
        }
    }

    #[async_trait]
    impl ProfileRepositoryTrait for MockProfileRepository {
        async fn create(&self, new_profile: NewUserProfile) -> Result<UserProfile> {
            let now = chrono::Utc::now().naive_utc();
            let profile = UserProfile {
                id: format!("profile-{}", new_profile.user_id),
                user_id: new_profile.user_id,
                role: new_profile.role,
                created_at: now,
                updated_at: now,
            };
            self.profiles.lock().unwrap().push(profile.clone());
            Ok(profile)
        }

        fn get_by_user_id(&self, user_id: &str) -> Result<Option<UserProfile>> {
            if self.fail_lookups {
                return Err(Error::Database(DatabaseError::QueryFailed(
                    "boom".to_string(),
                )));
            }
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.user_id == user_id)
                .cloned())
        }

        async fn update_role(&self, user_id: &str, role: Role) -> Result<UserProfile> {
            let mut profiles = self.profiles.lock().unwrap();
            let profile = profiles
                .iter_mut()
                .find(|p| p.user_id == user_id)
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(format!(
                        "No profile for user {}",
                        user_id
                    )))
                })?;
            profile.role = role;
            profile.updated_at = chrono::Utc::now().naive_utc();
            Ok(profile.clone())
        }
    }

    #[tokio::test]
    async fn ensure_profile_seeds_admin_for_staff() {
        let repo = Arc::new(MockProfileRepository::new());
        let service = ProfileService::new(repo.clone());

        let profile = service.ensure_profile("u1", true).await.unwrap();
        assert_eq!(profile.role, Role::Admin);
    }

    #[tokio::test]
    async fn ensure_profile_seeds_broker_for_regular_users() {
        let repo = Arc::new(MockProfileRepository::new());
        let service = ProfileService::new(repo.clone());

        let profile = service.ensure_profile("u2", false).await.unwrap();
        assert_eq!(profile.role, Role::Broker);
    }

    #[tokio::test]
    async fn ensure_profile_is_idempotent() {
        let repo = Arc::new(MockProfileRepository::new());
        repo.add("u3", Role::TaxSpecialist);
        let service = ProfileService::new(repo.clone());

        let profile = service.ensure_profile("u3", true).await.unwrap();
        // Existing role wins over the seed.
        assert_eq!(profile.role, Role::TaxSpecialist);
        assert_eq!(repo.profiles.lock().unwrap().len(), 1);
    }

    #[test]
    fn resolve_context_uses_profile_role() {
        let repo = Arc::new(MockProfileRepository::new());
        repo.add("u4", Role::TaxSpecialist);
        let service = ProfileService::new(repo);

        let ctx = service.resolve_context("u4", "u4@example.com", false);
        assert_eq!(ctx.role, Role::TaxSpecialist);
        assert!(ctx.can_manage_qualifications());
        assert!(!ctx.can_manage_classifications());
    }

    #[test]
    fn resolve_context_falls_back_to_staff_flag_on_error() {
        let repo = Arc::new(MockProfileRepository::failing());
        let service = ProfileService::new(repo);

        let ctx = service.resolve_context("u5", "u5@example.com", true);
        assert_eq!(ctx.role, Role::Admin);

        let ctx = service.resolve_context("u6", "u6@example.com", false);
        assert_eq!(ctx.role, Role::Broker);
    }

    #[test]
    fn staff_flag_grants_admin_capabilities_regardless_of_role() {
        let ctx = AuthContext::new("u7", "u7@example.com", true, Role::Broker);
        assert!(ctx.is_admin());
        assert!(ctx.can_ingest());
        assert!(ctx.can_delete_qualifications());
    }

    #[test]
    fn role_codes_round_trip() {
        for role in [Role::Admin, Role::Broker, Role::TaxSpecialist] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("supervisor".parse::<Role>().is_err());
    }
}
